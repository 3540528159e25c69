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

use serde::{Serialize,Deserialize};
use tracing::{debug,info,warn};
use uom::si::{f64::Length,length::meter};
use faed_common::geo::GeoPoint3;
use crate::sites::{SiteRegistry,Hangar,DropPoint,MeteoStation};
use crate::errors::{Result,input_error,FaedDispatchError};

/// OpenWeatherMap condition codes we can fly in: clear sky (800) and clouds (801-804)
pub const ACCEPTED_CONDITION_CODES: [u16;5] = [800, 801, 802, 803, 804];

/// the weather at dispatch time, as reported by whatever weather source the caller uses. Only wind, rain
/// and the condition code are used for the dispatch decision, the other readings go into the weather info
/// marker of the incidence
#[derive(Serialize,Deserialize,Debug,Clone,Copy,Default,PartialEq)]
pub struct FlightConditions {
    pub wind_speed: f64, // m/s
    pub raining: bool,

    #[serde(default)]
    pub condition_code: Option<u16>, // OpenWeatherMap weather id

    #[serde(default)]
    pub temperature: Option<f64>, // °C

    #[serde(default)]
    pub humidity: Option<f64>, // percent

    #[serde(default)]
    pub pressure: Option<f64>, // hPa

    #[serde(default)]
    pub clouds: Option<f64>, // percent
}

impl FlightConditions {
    pub fn new (wind_speed: f64, raining: bool)->Self {
        FlightConditions { wind_speed, raining, ..Default::default() }
    }

    pub fn with_condition_code (mut self, code: u16)->Self { self.condition_code = Some(code); self }
    pub fn with_temperature (mut self, temperature: f64)->Self { self.temperature = Some(temperature); self }
    pub fn with_humidity (mut self, humidity: f64)->Self { self.humidity = Some(humidity); self }
    pub fn with_pressure (mut self, pressure: f64)->Self { self.pressure = Some(pressure); self }
    pub fn with_clouds (mut self, clouds: f64)->Self { self.clouds = Some(clouds); self }
}

/// the condition group of an OpenWeatherMap weather id
pub fn condition_description (code: u16)->&'static str {
    match code {
        200..=299 => "thunderstorm",
        300..=399 => "drizzle",
        500..=599 => "rain",
        600..=699 => "snow",
        700..=799 => "atmosphere",
        800 => "clear sky",
        801..=804 => "clouds",
        _ => "unknown"
    }
}

/// refuse to fly if it rains, if the wind speed is at or above `max_wind_speed` or if a reported weather
/// condition code is not one of [`ACCEPTED_CONDITION_CODES`]
pub fn check_conditions (conditions: &FlightConditions, max_wind_speed: f64)->Result<()> {
    if !conditions.wind_speed.is_finite() || conditions.wind_speed < 0.0 {
        return Err( input_error!("invalid wind speed {}", conditions.wind_speed))
    }
    if conditions.wind_speed >= max_wind_speed {
        warn!("wind speed {} m/s exceeds limit {} m/s", conditions.wind_speed, max_wind_speed);
        return Err( FaedDispatchError::UnsafeConditions( format!("wind speed {} m/s", conditions.wind_speed)))
    }
    if conditions.raining {
        warn!("no dispatch while raining");
        return Err( FaedDispatchError::UnsafeConditions( "rain".to_string()))
    }
    if let Some(code) = conditions.condition_code {
        if !ACCEPTED_CONDITION_CODES.contains( &code) {
            let desc = condition_description( code);
            warn!("no dispatch in weather condition {code} ({desc})");
            return Err( FaedDispatchError::UnsafeConditions( format!("weather condition {code} ({desc})")))
        }
    }
    Ok(())
}

fn nearest<'a,T,F> (items: impl Iterator<Item=&'a T>, location: &GeoPoint3, loc_fn: F)->Option<(&'a T,Length)> where F: Fn(&T)->&GeoPoint3 {
    let mut best: Option<(&T,Length)> = None;
    for item in items {
        let d = location.geodesic_distance_to( loc_fn(item));
        match best {
            Some((_,d_best)) if d_best <= d => {}
            _ => best = Some((item,d))
        }
    }
    best
}

/// the available drop point closest to `location`. Ties resolve to the first one in registry order
pub fn nearest_drop_point<'a> (registry: &'a SiteRegistry, location: &GeoPoint3)->Result<&'a DropPoint> {
    let (dp,dist) = nearest( registry.available_drop_points(), location, |dp| &dp.location)
        .ok_or_else( || FaedDispatchError::NoSiteAvailable("drop point".to_string()))?;
    debug!("nearest drop point {} at {:.0} m", dp.id, dist.get::<meter>());
    Ok(dp)
}

/// the available weather station closest to `location`, if there is any
pub fn nearest_meteo_station<'a> (registry: &'a SiteRegistry, location: &GeoPoint3)->Option<&'a MeteoStation> {
    nearest( registry.available_meteo_stations(), location, |ms| &ms.location).map( |(ms,_)| ms)
}

/// the hangar closest to `drop_point`. If that hangar is not available we do not fall back to the next one
/// since its drone might not reach the drop point
pub fn nearest_hangar<'a> (registry: &'a SiteRegistry, drop_point: &DropPoint)->Result<&'a Hangar> {
    let (hangar,dist) = nearest( registry.hangars.iter(), &drop_point.location, |h| &h.location)
        .ok_or_else( || FaedDispatchError::NoSiteAvailable("hangar".to_string()))?;
    debug!("nearest hangar {} at {:.0} m", hangar.id, dist.get::<meter>());

    if hangar.is_available {
        Ok(hangar)
    } else {
        Err( FaedDispatchError::HangarUnavailable( hangar.id.clone()))
    }
}

/// the (hangar,drop point) pair to serve an incidence at `location`
pub fn assign<'a> (registry: &'a SiteRegistry, location: &GeoPoint3, conditions: &FlightConditions, max_wind_speed: f64)->Result<(&'a Hangar,&'a DropPoint)> {
    location.validate().map_err( |e| input_error!("incidence location: {}", e))?;
    check_conditions( conditions, max_wind_speed)?;

    let drop_point = nearest_drop_point( registry, location)?;
    let hangar = nearest_hangar( registry, drop_point)?;
    info!("assigned hangar {} and drop point {} to incidence at {}", hangar.id, drop_point.id, location);

    Ok((hangar,drop_point))
}
