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

use std::fmt;
use serde::{Serialize,Deserialize};
use chrono::{DateTime,Utc};
use faed_common::geo::GeoPoint3;
use crate::sites::{Hangar,DropPoint};

pub type IncidenceId = u64;

#[derive(Serialize,Deserialize,Debug,Clone,Copy,PartialEq,Eq)]
pub enum IncidenceState {
    Dispatched, // flight in progress
    Resolved,   // drone arrived, transient artifacts still published
    Cleared     // transient artifacts removed
}

/// a request for service at a given location, with the sites assigned to it
#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
pub struct Incidence {
    pub id: IncidenceId,
    pub location: GeoPoint3,
    pub hangar: String,
    pub drop_point: String,
    pub is_active: bool,
    pub created: DateTime<Utc>,
    pub resolved: Option<DateTime<Utc>>,
    pub cleared: Option<DateTime<Utc>>,
}

impl Incidence {
    pub fn new (id: IncidenceId, location: GeoPoint3, hangar: &Hangar, drop_point: &DropPoint)->Self {
        Incidence {
            id, location,
            hangar: hangar.id.clone(),
            drop_point: drop_point.id.clone(),
            is_active: true,
            created: Utc::now(),
            resolved: None,
            cleared: None
        }
    }

    pub fn state (&self)->IncidenceState {
        if self.is_active { IncidenceState::Dispatched }
        else if self.cleared.is_some() { IncidenceState::Cleared }
        else { IncidenceState::Resolved }
    }

    pub fn resolve (&mut self) {
        if self.is_active {
            self.is_active = false;
            self.resolved = Some( Utc::now());
        }
    }

    pub fn clear (&mut self) {
        self.resolve();
        if self.cleared.is_none() {
            self.cleared = Some( Utc::now());
        }
    }

    pub fn drone_kml_name (&self)->String { drone_kml_name( self.id) }
    pub fn link_kml_name (&self)->String { link_kml_name( self.id) }
    pub fn marker_kml_name (&self)->String { marker_kml_name( self.id) }
}

impl fmt::Display for Incidence {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result {
        write!( f, "incidence {} at {} ({:?})", self.id, self.location, self.state())
    }
}

//--- transient artifact names

/// the drone placemark that gets overwritten with each flight step
pub fn drone_kml_name (id: IncidenceId)->String { format!("in{id}drone.kml") }

/// the network link that makes the display refresh the drone placemark
pub fn link_kml_name (id: IncidenceId)->String { format!("manage{id}.kml") }

pub fn marker_kml_name (id: IncidenceId)->String { format!("incidence{id}.kml") }
