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

//! RON based configuration. Configs are explicit values that get passed into constructors - there is
//! no global config state. The config dir defaults to `$FAED_LOCAL/config` (or `./local/config`)

use std::{env, path::{Path,PathBuf}};
use serde::{Serialize,Deserialize};
use ron::ser::PrettyConfig;

use crate::fs::filepath_contents;
use crate::errors::Result;

pub const FAED_LOCAL_ENV: &str = "FAED_LOCAL";

/// the directory we look up relative config filenames in
pub fn config_dir ()->PathBuf {
    let local = env::var(FAED_LOCAL_ENV).map( PathBuf::from).unwrap_or_else( |_| PathBuf::from("local"));
    local.join("config")
}

/// resolve `filename` against [`config_dir`] unless it is already a path to an existing file
pub fn config_path (filename: impl AsRef<Path>)->PathBuf {
    let path = filename.as_ref();
    if path.is_absolute() || path.is_file() { path.to_path_buf() } else { config_dir().join(path) }
}

/// deserialize a config from the RON file at `path`
pub fn load_config<C,P> (path: P) -> Result<C> where C: for <'a> Deserialize<'a>, P: AsRef<Path> {
    let data = filepath_contents( &config_path( path))?;
    Ok( ron::de::from_bytes( data.as_slice())? )
}

/// deserialize a config from a RON string (mostly for tests and embedded defaults)
pub fn config_from_str<C> (s: &str) -> Result<C> where C: for <'a> Deserialize<'a> {
    Ok( ron::de::from_str( s)? )
}

pub fn config_to_ron_string<C> (config: &C) -> Result<String> where C: Serialize {
    Ok( ron::ser::to_string_pretty( config, PrettyConfig::default())? )
}
