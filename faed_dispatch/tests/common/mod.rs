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

//! shared fixtures for faed_dispatch tests

use std::{path::PathBuf,sync::{Arc,Mutex},time::Duration};
use tokio::sync::Semaphore;
use faed_common::geo::GeoPoint3;
use faed_dispatch::FaedConfig;
use faed_dispatch::sites::{SiteRegistry,Hangar,DropPoint,MeteoStation,Drone,StyleUrl};
use faed_dispatch::catalog::CatalogLists;
use faed_dispatch::publisher::{CatalogPublisher,PublisherConfig};
use faed_dispatch::clock::StepClock;
use faed_dispatch::action::SnapshotAction;
use faed_dispatch::emitter::FlightSnapshot;
use faed_dispatch::Result;

pub const SERVER_URL: &str = "http://10.0.0.1:8000";

pub fn test_dir (name: &str)->PathBuf {
    let dir = std::env::temp_dir().join( format!("faed_dispatch_{}_{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

pub fn test_config (dir: &PathBuf)->FaedConfig {
    FaedConfig {
        kml_dir: dir.join("kml"),
        server_url: SERVER_URL.to_string(),
        kml_url_path: "static/kml".to_string(),
        sites: dir.join("sites.ron"),
        link_refresh: 1,
        step_delay: Duration::ZERO,
        publish_settle: Duration::ZERO,
        cleanup_delay: Duration::ZERO,
        max_wind_speed: 10.0,
        mission_file: None,
        publisher: PublisherConfig::None,
    }
}

fn style (name: &str)->StyleUrl {
    StyleUrl { name: name.to_string(), href: format!("http://icons/{name}.png"), scale: 1.0 }
}

pub fn drop_point (id: &str, lat: f64, lon: f64, is_available: bool)->DropPoint {
    DropPoint {
        id: id.to_string(),
        name: format!("drop point {id}"),
        description: String::new(),
        city: "Lleida".to_string(),
        location: GeoPoint3::from_lat_lon( lat, lon),
        is_available,
        style: style("droppoint")
    }
}

pub fn hangar (id: &str, location: GeoPoint3, is_available: bool, drop_points: &[&str])->Hangar {
    Hangar {
        id: id.to_string(),
        name: format!("hangar {id}"),
        description: String::new(),
        city: "Lleida".to_string(),
        location,
        radius: 10_000.0,
        is_available,
        style: style("hangar"),
        drone: Drone { name: "Erle".to_string(), plate: format!("EC-{id}"), style: style("drone"), battery_life: 100 },
        drop_points: drop_points.iter().map( |s| s.to_string()).collect()
    }
}

pub fn meteo_station (id: &str, lat: f64, lon: f64, is_available: bool)->MeteoStation {
    MeteoStation {
        id: id.to_string(),
        name: format!("weather station {id}"),
        description: String::new(),
        city: "Lleida".to_string(),
        location: GeoPoint3::from_lat_lon_alt( lat, lon, 200.0),
        is_available,
        style: style("meteo")
    }
}

/// h1 (available) serves dp_a, h2 (unavailable) serves dp_b, dp_c is unavailable
pub fn test_registry ()->SiteRegistry {
    SiteRegistry::new(
        vec![
            hangar( "h1", GeoPoint3::from_lat_lon_alt( 41.0, 1.0, 100.0), true, &["dp_a"]),
            hangar( "h2", GeoPoint3::from_lat_lon_alt( 42.3, 2.3, 50.0), false, &["dp_b"]),
        ],
        vec![
            drop_point( "dp_a", 41.5, 1.5, true),
            drop_point( "dp_b", 42.2, 2.2, true),
            drop_point( "dp_c", 41.45, 1.45, false),
        ]
    ).unwrap()
}

/// the test registry plus weather stations ms_a (next to dp_a), ms_b (unavailable, closer to dp_a) and ms_c (north)
pub fn test_registry_with_meteo ()->SiteRegistry {
    test_registry().with_meteo_stations( vec![
        meteo_station( "ms_a", 41.4, 1.4, true),
        meteo_station( "ms_b", 41.5, 1.5, false),
        meteo_station( "ms_c", 42.3, 2.3, true),
    ]).unwrap()
}

/// keeps all published catalog lists
#[derive(Default)]
pub struct RecordingPublisher {
    published: Mutex<Vec<CatalogLists>>
}

impl RecordingPublisher {
    pub fn published (&self)->Vec<CatalogLists> { self.published.lock().unwrap().clone() }
    pub fn last (&self)->Option<CatalogLists> { self.published.lock().unwrap().last().cloned() }
}

impl CatalogPublisher for RecordingPublisher {
    async fn publish (&self, lists: &CatalogLists)->Result<()> {
        self.published.lock().unwrap().push( lists.clone());
        Ok(())
    }
}

/// keeps all received snapshots
#[derive(Debug,Default)]
pub struct CollectAction {
    snapshots: Mutex<Vec<FlightSnapshot>>
}

impl CollectAction {
    pub fn snapshots (&self)->Vec<FlightSnapshot> { self.snapshots.lock().unwrap().clone() }
}

impl SnapshotAction for CollectAction {
    async fn execute (&self, snapshot: FlightSnapshot)->Result<()> {
        self.snapshots.lock().unwrap().push( snapshot);
        Ok(())
    }
}

/// clock that only lets a pause complete once a permit is available
pub struct GateClock {
    gate: Arc<Semaphore>
}

impl GateClock {
    pub fn new (gate: Arc<Semaphore>)->Self { GateClock { gate } }
}

impl StepClock for GateClock {
    async fn pause (&self, _dur: Duration) {
        if let Ok(permit) = self.gate.acquire().await {
            permit.forget();
        }
    }
}
