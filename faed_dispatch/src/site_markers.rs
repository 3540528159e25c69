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

use tracing::{info,debug};
use faed_common::geo::{GeoPoint3,circle_points};
use faed_kml::{hangar_polygon,influence_ring,drop_point_marker,weather_info};
use crate::sites::{SiteRegistry,Hangar,DropPoint,MeteoStation};
use crate::assignment::{FlightConditions,nearest_meteo_station,condition_description};
use crate::catalog::KmlCatalog;
use crate::errors::Result;

/// number of vertices of a hangar influence ring
pub const INFLUENCE_RING_VERTICES: usize = 36;

pub fn hangar_kml_name (hangar: &Hangar)->String { format!("hangar_{}.kml", hangar.id) }

pub fn hangar_influence_kml_name (hangar: &Hangar)->String { format!("hangar_{}_inf.kml", hangar.id) }

pub fn drop_point_kml_name (drop_point: &DropPoint)->String { format!("droppoint_{}.kml", drop_point.id) }

pub fn meteo_station_kml_name (station: &MeteoStation)->String { format!("meteo_{}.kml", station.id) }

/// the weather info artifact, which is overwritten by each dispatch
pub const WEATHER_INFO_KML: &str = "meteo_info.kml";

/// write the static site artifacts (hangar footprint, hangar influence ring, drop point and weather station markers) and
/// register them in `catalog`. Unavailable sites are registered as hidden. Returns the number of artifacts
pub fn publish_sites (registry: &SiteRegistry, catalog: &mut KmlCatalog)->Result<usize> {
    let mut n = 0;

    for h in &registry.hangars {
        catalog.write_artifact( &hangar_kml_name(h), &hangar_polygon( &h.name, &h.description, &h.location), h.is_available)?;

        let ring = circle_points( &h.location, h.radius(), INFLUENCE_RING_VERTICES);
        catalog.write_artifact( &hangar_influence_kml_name(h), &influence_ring( &h.name, &ring), h.is_available)?;
        n += 2;
    }

    for dp in &registry.drop_points {
        let kml = drop_point_marker( &dp.name, &dp.description, &dp.style.href, &dp.location);
        catalog.write_artifact( &drop_point_kml_name(dp), &kml, dp.is_available)?;
        n += 1;
    }

    for ms in &registry.meteo_stations {
        let kml = drop_point_marker( &ms.name, &ms.description, &ms.style.href, &ms.location);
        catalog.write_artifact( &meteo_station_kml_name(ms), &kml, ms.is_available)?;
        n += 1;
    }

    info!("wrote {n} site artifacts to {:?}", catalog.kml_dir());
    Ok(n)
}

/// the `(label,value)` rows of the weather info balloon. Readings the weather source did not report are skipped
pub fn weather_readings (conditions: &FlightConditions)->Vec<(&'static str,String)> {
    let mut rows = Vec::new();
    if let Some(t) = conditions.temperature { rows.push(( "Temperature", format!("{t:.1} °C"))) }
    rows.push(( "Wind", format!("{:.1} m/s", conditions.wind_speed)));
    if let Some(c) = conditions.clouds { rows.push(( "Clouds", format!("{c:.0} %"))) }
    if let Some(p) = conditions.pressure { rows.push(( "Pressure", format!("{p:.0} hPa"))) }
    if let Some(h) = conditions.humidity { rows.push(( "Humidity", format!("{h:.0} %"))) }
    let rain = if conditions.raining { "yes" } else { "no" };
    rows.push(( "Rain", rain.to_string()));
    if let Some(code) = conditions.condition_code {
        rows.push(( "Sky status", format!("{} ({code})", condition_description( code))));
    }
    rows
}

/// write the weather info artifact at the available weather station closest to `location`. The artifact goes
/// into the hidden list. Returns false if there is no such station
pub fn write_weather_info (registry: &SiteRegistry, location: &GeoPoint3, conditions: &FlightConditions, catalog: &mut KmlCatalog)->Result<bool> {
    match nearest_meteo_station( registry, location) {
        Some(ms) => {
            let kml = weather_info( &ms.name, &ms.location, &weather_readings( conditions));
            catalog.write_artifact( WEATHER_INFO_KML, &kml, false)?;
            debug!("weather info written for station {}", ms.id);
            Ok(true)
        }
        None => Ok(false)
    }
}
