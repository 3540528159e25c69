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

//! the simulated drone flight between two sites: a vertical ascent at the origin, a cruise at constant
//! altitude along the initial bearing, and a vertical descent at the end of the cruise.
//!
//! The cruise follows the *initial* bearing for all segments, i.e. it is a fixed heading flight that ends within
//! discretization distance of the destination. Do not replace this with per-step course corrections, the
//! published flight paths are supposed to look the way the drone is commanded to fly

use serde::{Serialize,Deserialize};
use uom::si::{f64::Length,length::meter};
use faed_common::geo::GeoPoint3;
use crate::errors::{Result,input_error};

pub const ASCENT_STEPS: usize = 8;
pub const CRUISE_STEPS: usize = 20;
pub const DESCENT_STEPS: usize = 8;
pub const FLIGHT_STEPS: usize = ASCENT_STEPS + CRUISE_STEPS + DESCENT_STEPS;

/// altitude change per ascent/descent step in meters
pub const ALTITUDE_STEP: f64 = 25.0;

/// cruise altitude above origin altitude
pub const CRUISE_HEIGHT: f64 = ASCENT_STEPS as f64 * ALTITUDE_STEP;

#[derive(Serialize,Deserialize,Debug,Clone,Copy,PartialEq,Eq)]
pub enum FlightPhase {
    Ascent,
    Cruise,
    Descent
}

#[derive(Serialize,Deserialize,Debug,Clone,Copy,PartialEq)]
pub struct ProfileSample {
    pub step: usize, // 0-based over the whole flight
    pub phase: FlightPhase,
    pub position: GeoPoint3,
}

#[derive(Serialize,Deserialize,Debug,Clone)]
pub struct FlightProfile {
    pub origin: GeoPoint3,
    pub destination: GeoPoint3,
    pub bearing: f64,     // degrees [0,360)
    pub distance: Length, // geodesic origin -> destination
    pub samples: Vec<ProfileSample>,
}

impl FlightProfile {
    /// compute the samples for a flight from `origin` to `destination`. This is pure, the only failure is
    /// an invalid origin or destination
    pub fn compute (origin: &GeoPoint3, destination: &GeoPoint3)->Result<FlightProfile> {
        origin.validate().map_err( |e| input_error!("flight origin: {}", e))?;
        destination.validate().map_err( |e| input_error!("flight destination: {}", e))?;

        let bearing = origin.bearing_to( destination);
        let distance = origin.geodesic_distance_to( destination);
        let segment = distance / CRUISE_STEPS as f64;
        let peak = origin.alt + CRUISE_HEIGHT;

        let mut samples: Vec<ProfileSample> = Vec::with_capacity( FLIGHT_STEPS);
        let mut push = |phase: FlightPhase, position: GeoPoint3| {
            samples.push( ProfileSample { step: samples.len(), phase, position });
        };

        for k in 1..=ASCENT_STEPS {
            push( FlightPhase::Ascent, origin.with_altitude( origin.alt + k as f64 * ALTITUDE_STEP));
        }

        let mut p = origin.with_altitude( peak);
        for _ in 0..CRUISE_STEPS {
            p = p.geodesic_destination( bearing, segment);
            push( FlightPhase::Cruise, p);
        }

        for k in 1..=DESCENT_STEPS {
            push( FlightPhase::Descent, p.with_altitude( peak - k as f64 * ALTITUDE_STEP));
        }

        Ok( FlightProfile { origin: *origin, destination: *destination, bearing, distance, samples })
    }

    pub fn len (&self)->usize { self.samples.len() }

    pub fn is_empty (&self)->bool { self.samples.is_empty() }

    pub fn peak_altitude (&self)->f64 { self.origin.alt + CRUISE_HEIGHT }

    pub fn phase_samples (&self, phase: FlightPhase)->impl Iterator<Item=&ProfileSample> {
        self.samples.iter().filter( move |s| s.phase == phase)
    }

    /// lateral end point of the cruise (where the drone lands)
    pub fn landing_position (&self)->Option<GeoPoint3> {
        self.samples.last().map( |s| s.position)
    }

    /// how far the landing position is from the destination (fixed heading discretization error)
    pub fn landing_offset (&self)->Length {
        self.landing_position()
            .map( |p| p.geodesic_distance_to( &self.destination))
            .unwrap_or_else( || Length::new::<meter>(0.0))
    }
}
