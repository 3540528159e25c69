/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “FAED” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */
#![allow(unused)]

use thiserror::Error;
use faed_common::FaedCommonError;
use crate::incidence::IncidenceId;

pub type Result<T> = std::result::Result<T,FaedDispatchError>;

#[derive(Error,Debug)]
pub enum FaedDispatchError {

    #[error("input error {0}")]
    InputError(String),

    #[error("IO error {0}")]
    IOError( #[from] std::io::Error),

    #[error("config error {0}")]
    ConfigError( #[from] FaedCommonError),

    #[error("JSON error {0}")]
    JsonError( #[from] serde_json::Error),

    #[error("publish error {0}")]
    PublishError(String),

    #[error("unknown site {0}")]
    UnknownSite(String),

    #[error("no {0} available")]
    NoSiteAvailable(String),

    #[error("hangar {0} is not available")]
    HangarUnavailable(String),

    #[error("unsafe flight conditions: {0}")]
    UnsafeConditions(String),

    #[error("incidence {0} already in flight")]
    IncidenceInFlight(IncidenceId),

    #[error("snapshot action failed {0}")]
    ActionError(String),

    #[error("flight job failed {0}")]
    JoinError( #[from] tokio::task::JoinError),
}

macro_rules! input_error {
    ($fmt:literal $(, $arg:expr )* ) => {
        $crate::errors::FaedDispatchError::InputError( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use input_error;

macro_rules! publish_error {
    ($fmt:literal $(, $arg:expr )* ) => {
        $crate::errors::FaedDispatchError::PublishError( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use publish_error;
