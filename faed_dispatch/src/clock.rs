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

use std::{future::{Future,ready},time::Duration};

/// source of the pauses between flight steps. Using this instead of direct sleeps lets tests (and
/// "as fast as possible" runs) go through a full flight without wall clock waits
pub trait StepClock: Send + Sync {
    fn pause (&self, dur: Duration)->impl Future<Output=()> + Send;
}

/// pauses in real time
pub struct RealTimeClock;

impl StepClock for RealTimeClock {
    fn pause (&self, dur: Duration)->impl Future<Output=()> + Send { tokio::time::sleep( dur) }
}

/// completes every pause immediately
pub struct NoDelayClock;

impl StepClock for NoDelayClock {
    fn pause (&self, _dur: Duration)->impl Future<Output=()> + Send { ready(()) }
}
