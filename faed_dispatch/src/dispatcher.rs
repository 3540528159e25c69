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

use std::sync::Arc;
use tracing::{info,debug};
use faed_common::geo::GeoPoint3;
use faed_kml::{incidence_marker,IncidenceMarkerState};

use crate::FaedConfig;
use crate::sites::{SiteRegistry,Hangar,DropPoint};
use crate::assignment::{FlightConditions,assign};
use crate::incidence::{Incidence,IncidenceId};
use crate::catalog::{KmlCatalog,SharedCatalog};
use crate::publisher::CatalogPublisher;
use crate::clock::StepClock;
use crate::action::SnapshotAction;
use crate::emitter::{FlightPathEmitter,FlightReport,FlightJob,FlightReservation};
use crate::mission::MissionPlan;
use crate::site_markers;
use crate::errors::Result;

/// a reserved incidence with its assigned sites, ready to fly
#[derive(Debug)]
pub struct PreparedFlight {
    pub reservation: FlightReservation,
    pub hangar: Hangar,
    pub drop_point: DropPoint,
    pub incidence: Incidence,
}

/// the top level object that handles emergency requests: it checks conditions, assigns sites, creates the
/// incidence and its marker and then runs the flight
pub struct Dispatcher<P,C> where P: CatalogPublisher, C: StepClock {
    config: Arc<FaedConfig>,
    registry: SiteRegistry,
    emitter: Arc<FlightPathEmitter<P,C>>,
}

impl<P,C> Dispatcher<P,C> where P: CatalogPublisher + 'static, C: StepClock + 'static {
    pub fn new (config: Arc<FaedConfig>, registry: SiteRegistry, publisher: P, clock: C)->Self {
        let catalog = KmlCatalog::from_config( &config).into_shared();
        Dispatcher::with_catalog( config, registry, catalog, publisher, clock)
    }

    pub fn with_catalog (config: Arc<FaedConfig>, registry: SiteRegistry, catalog: SharedCatalog, publisher: P, clock: C)->Self {
        let emitter = Arc::new( FlightPathEmitter::new( config.clone(), catalog, publisher, clock));
        Dispatcher { config, registry, emitter }
    }

    pub fn config (&self)->&FaedConfig { &self.config }

    pub fn registry (&self)->&SiteRegistry { &self.registry }

    pub fn registry_mut (&mut self)->&mut SiteRegistry { &mut self.registry }

    pub fn catalog (&self)->&SharedCatalog { self.emitter.catalog() }

    pub fn emitter (&self)->&Arc<FlightPathEmitter<P,C>> { &self.emitter }

    /// write, register and publish the static site artifacts
    pub async fn publish_sites (&self)->Result<usize> {
        let n = {
            let mut catalog = self.catalog().lock().await;
            site_markers::publish_sites( &self.registry, &mut catalog)?
        };
        self.emitter.publish_catalog().await?;
        Ok(n)
    }

    /// everything up to the flight: reserve the incidence id, check, assign, create the incidence with its
    /// marker, the weather info and the mission file. The reservation is released if any of these steps fails
    pub async fn prepare (&self, location: &GeoPoint3, conditions: &FlightConditions, id: IncidenceId)->Result<PreparedFlight> {
        let reservation = self.emitter.reserve( id)?;

        let (hangar,drop_point) = assign( &self.registry, location, conditions, self.config.max_wind_speed)?;
        let incidence = Incidence::new( id, *location, hangar, drop_point);

        {
            let mut catalog = self.catalog().lock().await;
            site_markers::write_weather_info( &self.registry, location, conditions, &mut catalog)?;
            let kml = incidence_marker( location, IncidenceMarkerState::Active);
            catalog.write_artifact( &incidence.marker_kml_name(), &kml, true)?;
        }

        if let Some(path) = &self.config.mission_file {
            MissionPlan::new( hangar, drop_point).write_to( path)?;
        }

        info!("dispatching {incidence}");
        Ok( PreparedFlight { reservation, hangar: hangar.clone(), drop_point: drop_point.clone(), incidence })
    }

    /// handle an emergency at `location` and return after the flight has completed
    pub async fn dispatch<A> (&self, location: &GeoPoint3, conditions: &FlightConditions, id: IncidenceId, action: &A)->Result<FlightReport>
        where A: SnapshotAction
    {
        let PreparedFlight { reservation, hangar, drop_point, mut incidence } = self.prepare( location, conditions, id).await?;
        self.emitter.emit_reserved_path( reservation, &hangar, &drop_point, &mut incidence, action).await
    }

    /// handle an emergency at `location` with a flight that runs as a background task
    pub async fn dispatch_job (&self, location: &GeoPoint3, conditions: &FlightConditions, id: IncidenceId)->Result<FlightJob> {
        let PreparedFlight { reservation, hangar, drop_point, incidence } = self.prepare( location, conditions, id).await?;
        debug!("spawning flight job for incidence {id}");
        Ok( self.emitter.clone().spawn_reserved( reservation, hangar, drop_point, incidence))
    }
}
