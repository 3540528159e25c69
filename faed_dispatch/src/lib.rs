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

//! emergency drone dispatch. For an incidence location we pick the nearest available drop point and the
//! hangar closest to it, and then simulate the drone flight as a time stepped sequence of KML marker artifacts
//! that get published to a map display (the display polls the published catalog lists).
//!
//! The main components are
//! - [`sites::SiteRegistry`] - hangars (with their drones) and drop points
//! - [`assignment`] - weather gate and nearest site selection
//! - [`profile::FlightProfile`] - the pure ascent/cruise/descent sample computation
//! - [`catalog::KmlCatalog`] - the registry of published KML artifacts
//! - [`publisher::CatalogPublisher`] - makes the catalog available to the display
//! - [`emitter::FlightPathEmitter`] - writes/publishes one artifact per flight step
//! - [`dispatcher::Dispatcher`] - ties it all together

use std::{path::PathBuf,time::Duration};
use serde::{Serialize,Deserialize};

pub mod errors;
pub use errors::{FaedDispatchError,Result};

pub mod sites;
pub mod assignment;
pub mod incidence;
pub mod catalog;
pub mod publisher;
pub mod clock;
pub mod action;
pub mod profile;
pub mod emitter;
pub mod site_markers;
pub mod mission;
pub mod dispatcher;

pub use faed_common::config::{load_config,config_from_str};

#[derive(Serialize,Deserialize,Debug,Clone)]
pub struct FaedConfig {
    pub kml_dir: PathBuf,        // where KML artifacts are written to
    pub server_url: String,      // base URL under which the display retrieves artifacts, e.g. "http://192.168.1.20:8000"
    pub kml_url_path: String,    // URL path of kml_dir, e.g. "static/kml"
    pub sites: PathBuf,          // RON file with hangars and drop points

    #[serde(default="default_link_refresh")]
    pub link_refresh: u32,       // seconds between display re-loads of the drone artifact

    pub step_delay: Duration,     // real time per flight step
    pub publish_settle: Duration, // pause after each catalog publish
    pub cleanup_delay: Duration,  // grace period before transient artifacts of a resolved incidence are removed

    pub max_wind_speed: f64,      // m/s, no dispatch at or above

    #[serde(default)]
    pub mission_file: Option<PathBuf>, // QGC waypoint file to write for each dispatch

    pub publisher: publisher::PublisherConfig,
}

fn default_link_refresh()->u32 { 1 }

impl Default for FaedConfig {
    fn default()->Self {
        FaedConfig {
            kml_dir: PathBuf::from("local/kml"),
            server_url: "http://localhost:8000".to_string(),
            kml_url_path: "static/kml".to_string(),
            sites: PathBuf::from("faed_sites.ron"),
            link_refresh: default_link_refresh(),
            step_delay: Duration::from_secs(1),
            publish_settle: Duration::from_millis(500),
            cleanup_delay: Duration::from_secs(5),
            max_wind_speed: 10.0,
            mission_file: None,
            publisher: publisher::PublisherConfig::None,
        }
    }
}
