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

//! the flight path emitter. For each sample of a [`FlightProfile`] it overwrites the drone artifact of the
//! incidence, publishes the catalog and pauses. The display follows the drone through a network link that
//! periodically re-loads the drone artifact. Once the drone has landed the incidence is resolved and its
//! transient artifacts are removed after a grace period.
//!
//! There is at most one flight per incidence at any time. Artifact write and publish errors abort the
//! flight (partial artifacts are left as they are), snapshot action errors are only logged

use std::{collections::HashSet,sync::{Arc,Mutex},time::Duration};
use serde::{Serialize,Deserialize};
use chrono::{DateTime,Utc};
use kanal::{AsyncReceiver,bounded_async};
use tokio::task::JoinHandle;
use tracing::{debug,info,warn};
use uom::si::{f64::Length,length::meter};
use faed_common::geo::GeoPoint3;
use faed_kml::{drone_placemark,network_link,incidence_marker,IncidenceMarkerState};

use crate::FaedConfig;
use crate::sites::{Hangar,DropPoint};
use crate::incidence::{Incidence,IncidenceId};
use crate::catalog::SharedCatalog;
use crate::publisher::CatalogPublisher;
use crate::clock::StepClock;
use crate::action::{SnapshotAction,ChannelSnapshotAction};
use crate::profile::{FlightProfile,FlightPhase,FLIGHT_STEPS};
use crate::errors::{Result,input_error,FaedDispatchError};

/// the drone position at one step of the flight
#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
pub struct FlightSnapshot {
    pub incidence: IncidenceId,
    pub step: usize,    // 0-based
    pub n_steps: usize,
    pub phase: FlightPhase,
    pub position: GeoPoint3,
    pub time: DateTime<Utc>,
}

/// summary of a completed flight
#[derive(Serialize,Deserialize,Debug,Clone)]
pub struct FlightReport {
    pub incidence: Incidence, // final state
    pub bearing: f64,
    pub distance: Length,
    pub n_steps: usize,
    pub landing_position: GeoPoint3,
    pub started: DateTime<Utc>,
    pub completed: DateTime<Utc>,
}

/// a flight that runs as a tokio task. Snapshots can be received while the flight is in progress,
/// the channel is closed when the flight ends
pub struct FlightJob {
    pub incidence: IncidenceId,
    pub snapshots: AsyncReceiver<FlightSnapshot>,
    pub handle: JoinHandle<Result<FlightReport>>,
}

impl FlightJob {
    /// wait for the flight to complete
    pub async fn join (self)->Result<FlightReport> {
        self.handle.await?
    }

    pub fn is_finished (&self)->bool { self.handle.is_finished() }
}

pub struct FlightPathEmitter<P,C> where P: CatalogPublisher, C: StepClock {
    config: Arc<FaedConfig>,
    catalog: SharedCatalog,
    publisher: P,
    clock: C,
    in_flight: Arc<Mutex<HashSet<IncidenceId>>>,
}

impl<P,C> FlightPathEmitter<P,C> where P: CatalogPublisher, C: StepClock {
    pub fn new (config: Arc<FaedConfig>, catalog: SharedCatalog, publisher: P, clock: C)->Self {
        FlightPathEmitter { config, catalog, publisher, clock, in_flight: Arc::new( Mutex::new( HashSet::new())) }
    }

    pub fn config (&self)->&FaedConfig { &self.config }

    pub fn catalog (&self)->&SharedCatalog { &self.catalog }

    pub fn publisher (&self)->&P { &self.publisher }

    pub fn is_in_flight (&self, id: IncidenceId)->bool {
        self.in_flight.lock().unwrap_or_else( |e| e.into_inner()).contains( &id)
    }

    /// publish the current catalog lists and wait for the display to pick them up
    pub async fn publish_catalog (&self)->Result<()> {
        let lists = self.catalog.lock().await.url_lists();
        self.publisher.publish( &lists).await?;
        self.clock.pause( self.config.publish_settle).await;
        Ok(())
    }

    /// reserve `id` for a flight. Checking and reserving is one atomic step, i.e. of two concurrent requests
    /// for the same incidence only one gets a reservation. The id is released when the reservation is dropped
    pub fn reserve (&self, id: IncidenceId)->Result<FlightReservation> {
        let mut in_flight = self.in_flight.lock().unwrap_or_else( |e| e.into_inner());
        if in_flight.insert( id) {
            Ok( FlightReservation { in_flight: self.in_flight.clone(), id })
        } else {
            Err( FaedDispatchError::IncidenceInFlight( id))
        }
    }

    /// run the whole flight for `incidence` from `origin` to `destination`, returning after the transient
    /// artifacts have been removed
    pub async fn emit_path<A> (&self, origin: &Hangar, destination: &DropPoint, incidence: &mut Incidence, action: &A)->Result<FlightReport>
        where A: SnapshotAction
    {
        let profile = self.flight_profile( origin, destination, incidence)?;
        let reservation = self.reserve( incidence.id)?;
        self.fly( reservation, profile, origin, destination, incidence, action).await
    }

    /// same as [`emit_path`](Self::emit_path) for an incidence that was already reserved by the caller
    pub async fn emit_reserved_path<A> (&self, reservation: FlightReservation, origin: &Hangar, destination: &DropPoint,
                                        incidence: &mut Incidence, action: &A)->Result<FlightReport>
        where A: SnapshotAction
    {
        if reservation.id != incidence.id {
            return Err( input_error!("reservation for incidence {} used for incidence {}", reservation.id, incidence.id))
        }
        let profile = self.flight_profile( origin, destination, incidence)?;
        self.fly( reservation, profile, origin, destination, incidence, action).await
    }

    fn flight_profile (&self, origin: &Hangar, destination: &DropPoint, incidence: &Incidence)->Result<FlightProfile> {
        let profile = FlightProfile::compute( &origin.location, &destination.location)?;
        if !incidence.is_active {
            return Err( input_error!("incidence {} is already resolved", incidence.id))
        }
        Ok(profile)
    }

    async fn fly<A> (&self, _reservation: FlightReservation, profile: FlightProfile, origin: &Hangar, destination: &DropPoint,
                     incidence: &mut Incidence, action: &A)->Result<FlightReport>
        where A: SnapshotAction
    {
        let id = incidence.id;
        let started = Utc::now();
        let drone_name = incidence.drone_kml_name();
        let link_name = incidence.link_kml_name();
        let marker_name = incidence.marker_kml_name();

        info!("incidence {id}: flight from hangar {} to drop point {}, bearing {:.1}°, distance {:.0} m",
              origin.id, destination.id, profile.bearing, profile.distance.get::<meter>());

        {
            let mut catalog = self.catalog.lock().await;
            let drone_url = catalog.url_for( &drone_name);
            catalog.write_artifact( &link_name, &network_link( &drone_url, self.config.link_refresh), true)?;
        }
        self.publish_catalog().await?;

        let n_steps = profile.len();
        for sample in &profile.samples {
            let kml = drone_placemark( &origin.drone.style.href, &sample.position);
            self.catalog.lock().await.write_artifact( &drone_name, &kml, true)?;
            self.publish_catalog().await?;

            let snapshot = FlightSnapshot {
                incidence: id,
                step: sample.step,
                n_steps,
                phase: sample.phase,
                position: sample.position,
                time: Utc::now()
            };
            if let Err(e) = action.execute( snapshot).await {
                warn!("incidence {id}: snapshot {} not delivered: {e}", sample.step);
            }

            self.clock.pause( self.config.step_delay).await;
        }

        incidence.resolve();
        info!("incidence {id} resolved");
        self.catalog.lock().await.write_artifact( &marker_name, &incidence_marker( &incidence.location, IncidenceMarkerState::Resolved), true)?;
        self.publish_catalog().await?;

        self.clock.pause( self.config.cleanup_delay).await;
        {
            let mut catalog = self.catalog.lock().await;
            for name in [&drone_name, &link_name, &marker_name] {
                catalog.remove_artifact( name)?;
            }
        }
        self.publish_catalog().await?;
        incidence.clear();
        debug!("incidence {id}: transient artifacts removed");

        Ok( FlightReport {
            incidence: incidence.clone(),
            bearing: profile.bearing,
            distance: profile.distance,
            n_steps,
            landing_position: profile.landing_position().unwrap_or( profile.origin),
            started,
            completed: Utc::now()
        })
    }
}

impl<P,C> FlightPathEmitter<P,C> where P: CatalogPublisher + 'static, C: StepClock + 'static {
    /// run the flight as a tokio task. Snapshots are sent to the returned job's channel, which has enough
    /// capacity to hold all snapshots of a flight so that an idle consumer does not stall the flight.
    /// Fails right away if the incidence is already in flight
    pub fn spawn (self: Arc<Self>, origin: Hangar, destination: DropPoint, incidence: Incidence)->Result<FlightJob> {
        let reservation = self.reserve( incidence.id)?;
        Ok( self.spawn_reserved( reservation, origin, destination, incidence))
    }

    pub fn spawn_reserved (self: Arc<Self>, reservation: FlightReservation, origin: Hangar, destination: DropPoint, mut incidence: Incidence)->FlightJob {
        let id = incidence.id;
        let (tx,rx) = bounded_async::<FlightSnapshot>( FLIGHT_STEPS);
        let action = ChannelSnapshotAction::new( tx);

        let handle = tokio::spawn( async move {
            self.emit_reserved_path( reservation, &origin, &destination, &mut incidence, &action).await
        });

        FlightJob { incidence: id, snapshots: rx, handle }
    }
}

/// exclusive right to fly an incidence. Removes its incidence id from the in-flight set when dropped,
/// regardless of how the flight ended
#[derive(Debug)]
pub struct FlightReservation {
    in_flight: Arc<Mutex<HashSet<IncidenceId>>>,
    id: IncidenceId,
}

impl FlightReservation {
    pub fn id (&self)->IncidenceId { self.id }
}

impl Drop for FlightReservation {
    fn drop (&mut self) {
        self.in_flight.lock().unwrap_or_else( |e| e.into_inner()).remove( &self.id);
    }
}
