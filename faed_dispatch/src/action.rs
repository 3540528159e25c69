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

//! actions that get executed with each [`FlightSnapshot`]. The emitter does not know who consumes its
//! snapshots, it just hands them to whatever action it was given

use std::{fmt::Debug,future::{Future,ready}};
use kanal::AsyncSender;
use tracing::info;
use crate::emitter::FlightSnapshot;
use crate::errors::{Result,FaedDispatchError};

pub trait SnapshotAction: Debug + Send + Sync {
    fn execute (&self, snapshot: FlightSnapshot)->impl Future<Output=Result<()>> + Send;
}

#[derive(Debug)]
pub struct NoSnapshotAction;

impl SnapshotAction for NoSnapshotAction {
    fn execute (&self, _snapshot: FlightSnapshot)->impl Future<Output=Result<()>> + Send { ready(Ok(())) }
}

/// send snapshots over a kanal channel
pub struct ChannelSnapshotAction {
    tx: AsyncSender<FlightSnapshot>
}

impl Debug for ChannelSnapshotAction {
    fn fmt (&self, f: &mut std::fmt::Formatter<'_>)->std::fmt::Result {
        write!( f, "ChannelSnapshotAction(closed={})", self.tx.is_closed())
    }
}

impl ChannelSnapshotAction {
    pub fn new (tx: AsyncSender<FlightSnapshot>)->Self { ChannelSnapshotAction { tx } }
}

impl SnapshotAction for ChannelSnapshotAction {
    async fn execute (&self, snapshot: FlightSnapshot)->Result<()> {
        self.tx.send( snapshot).await.map_err( |e| FaedDispatchError::ActionError( e.to_string()))
    }
}

#[derive(Debug)]
pub struct LogSnapshotAction;

impl SnapshotAction for LogSnapshotAction {
    fn execute (&self, s: FlightSnapshot)->impl Future<Output=Result<()>> + Send {
        info!("incidence {} step {}/{} {:?}: {}", s.incidence, s.step + 1, s.n_steps, s.phase, s.position);
        ready(Ok(()))
    }
}
