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

//! autopilot mission for the dispatched drone, as a QGroundControl plain text waypoint file:
//! ```text
//! QGC WPL 110
//! <seq>\t<current>\t<frame>\t<command>\t<p1>\t<p2>\t<p3>\t<p4>\t<lat>\t<lon>\t<alt>\t<autocontinue>
//! ```

use std::{fmt::Write,path::Path};
use serde::{Serialize,Deserialize};
use tracing::info;
use faed_common::{geo::GeoPoint3,fs::set_filepath_contents};
use crate::sites::{Hangar,DropPoint};
use crate::errors::{Result,input_error};

pub const QGC_WPL_HEADER: &str = "QGC WPL 110";

/// relative altitude the drone climbs to before heading to the drop point
pub const TAKEOFF_ALTITUDE: f64 = 50.0;

// MAVLink frames and commands we use
pub const MAV_FRAME_GLOBAL: u8 = 0;
pub const MAV_FRAME_GLOBAL_RELATIVE_ALT: u8 = 3;
pub const MAV_CMD_NAV_WAYPOINT: u16 = 16;
pub const MAV_CMD_NAV_LAND: u16 = 21;
pub const MAV_CMD_NAV_TAKEOFF: u16 = 22;

#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
pub struct MissionItem {
    pub seq: usize,
    pub current: bool,
    pub frame: u8,
    pub command: u16,
    pub params: [f64;4],
    pub lat: f64,
    pub lon: f64,
    pub alt: f64,
    pub autocontinue: bool,
}

impl MissionItem {
    fn new (seq: usize, frame: u8, command: u16, lat: f64, lon: f64, alt: f64)->Self {
        MissionItem { seq, current: false, frame, command, params: [0.0;4], lat, lon, alt, autocontinue: true }
    }
}

/// home at the hangar, take off, fly to the drop point and land there
#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
pub struct MissionPlan {
    pub home: GeoPoint3,
    pub target: GeoPoint3,
}

impl MissionPlan {
    pub fn new (hangar: &Hangar, drop_point: &DropPoint)->Self {
        MissionPlan { home: hangar.location, target: drop_point.location }
    }

    pub fn items (&self)->Vec<MissionItem> {
        vec![
            MissionItem::new( 0, MAV_FRAME_GLOBAL, MAV_CMD_NAV_WAYPOINT, self.home.lat, self.home.lon, self.home.alt),
            MissionItem::new( 1, MAV_FRAME_GLOBAL_RELATIVE_ALT, MAV_CMD_NAV_TAKEOFF, 0.0, 0.0, TAKEOFF_ALTITUDE),
            MissionItem::new( 2, MAV_FRAME_GLOBAL_RELATIVE_ALT, MAV_CMD_NAV_WAYPOINT, self.target.lat, self.target.lon, TAKEOFF_ALTITUDE),
            MissionItem::new( 3, MAV_FRAME_GLOBAL_RELATIVE_ALT, MAV_CMD_NAV_LAND, 0.0, 0.0, 0.0),
        ]
    }

    /// the QGroundControl waypoint file text. Writing to a `String` cannot fail, hence we ignore the `fmt::Result` values
    pub fn to_qgc_wpl (&self)->String {
        let mut s = String::with_capacity(512);
        s.push_str( QGC_WPL_HEADER);
        s.push('\n');

        for it in self.items() {
            let _ = write!( s, "{}\t{}\t{}\t{}", it.seq, it.current as u8, it.frame, it.command);
            for p in &it.params {
                let _ = write!( s, "\t{p:.6}");
            }
            let _ = writeln!( s, "\t{:.6}\t{:.6}\t{:.6}\t{}", it.lat, it.lon, it.alt, it.autocontinue as u8);
        }
        s
    }

    pub fn write_to (&self, path: impl AsRef<Path>)->Result<()> {
        let path = path.as_ref();
        let filename = path.file_name().and_then( |f| f.to_str()).ok_or_else( || input_error!("invalid mission file {path:?}"))?;
        let dir = path.parent().filter( |d| !d.as_os_str().is_empty()).unwrap_or( Path::new("."));

        set_filepath_contents( dir, filename, self.to_qgc_wpl().as_bytes())?;
        info!("wrote mission file {path:?}");
        Ok(())
    }
}
