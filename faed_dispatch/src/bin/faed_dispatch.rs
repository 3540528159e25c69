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

use std::sync::Arc;
use anyhow::Result;
use clap::{Parser,Subcommand};
use chrono::Utc;
use tracing::{info,warn};
use tracing_subscriber::EnvFilter;
use faed_common::geo::GeoPoint3;
use faed_dispatch::{FaedConfig,load_config};
use faed_dispatch::sites::SiteRegistry;
use faed_dispatch::assignment::FlightConditions;
use faed_dispatch::incidence::IncidenceId;
use faed_dispatch::publisher::ConfiguredPublisher;
use faed_dispatch::clock::{StepClock,RealTimeClock,NoDelayClock};
use faed_dispatch::profile::FlightProfile;
use faed_dispatch::dispatcher::Dispatcher;

#[derive(Parser, Debug)]
#[command(version, about, long_about = "dispatch emergency drones and publish their simulated flight as KML")]
pub struct Args {
    /// RON config file (relative names are looked up in $FAED_LOCAL/config)
    #[arg(short, long, default_value = "faed_dispatch.ron")]
    pub config: String,

    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// write and publish the hangar and drop point artifacts
    Sites,

    /// handle an emergency at the given location
    Dispatch {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        #[arg(long, allow_hyphen_values = true)]
        lon: f64,

        /// incidence id (defaults to the current epoch seconds)
        #[arg(long)]
        id: Option<IncidenceId>,

        /// current wind speed in m/s
        #[arg(long, default_value_t = 0.0)]
        wind_speed: f64,

        #[arg(long)]
        raining: bool,

        /// OpenWeatherMap weather condition id
        #[arg(long)]
        condition_code: Option<u16>,

        /// current temperature in °C, shown in the weather info
        #[arg(long, allow_hyphen_values = true)]
        temperature: Option<f64>,

        /// don't pause between flight steps
        #[arg(long)]
        no_delay: bool,
    },

    /// print the flight profile between two points as JSON
    Profile {
        #[arg(long, allow_hyphen_values = true)]
        from_lat: f64,

        #[arg(long, allow_hyphen_values = true)]
        from_lon: f64,

        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        from_alt: f64,

        #[arg(long, allow_hyphen_values = true)]
        to_lat: f64,

        #[arg(long, allow_hyphen_values = true)]
        to_lon: f64,
    },
}

#[tokio::main]
async fn main()->Result<()> {
    tracing_subscriber::fmt().with_env_filter( EnvFilter::from_default_env()).init();

    let args = Args::parse();

    match args.cmd {
        Cmd::Profile { from_lat, from_lon, from_alt, to_lat, to_lon } => {
            let origin = GeoPoint3::from_lat_lon_alt( from_lat, from_lon, from_alt);
            let destination = GeoPoint3::from_lat_lon( to_lat, to_lon);
            let profile = FlightProfile::compute( &origin, &destination)?;
            println!("{}", serde_json::to_string_pretty( &profile)?);
        }

        Cmd::Sites => {
            let (config,registry) = load(&args.config)?;
            let dispatcher = Dispatcher::new( config.clone(), registry, ConfiguredPublisher::from_config( &config.publisher), NoDelayClock);
            let n = dispatcher.publish_sites().await?;
            println!("published {n} site artifacts");
        }

        Cmd::Dispatch { lat, lon, id, wind_speed, raining, condition_code, temperature, no_delay } => {
            let (config,registry) = load(&args.config)?;
            let location = GeoPoint3::from_lat_lon( lat, lon);
            let mut conditions = FlightConditions::new( wind_speed, raining);
            conditions.condition_code = condition_code;
            conditions.temperature = temperature;
            let id = id.unwrap_or_else( || Utc::now().timestamp().unsigned_abs());

            if no_delay {
                run_dispatch( config, registry, NoDelayClock, location, conditions, id).await?
            } else {
                run_dispatch( config, registry, RealTimeClock, location, conditions, id).await?
            }
        }
    }

    Ok(())
}

fn load (config_file: &str)->Result<(Arc<FaedConfig>,SiteRegistry)> {
    let config: FaedConfig = load_config( config_file)?;
    let registry = SiteRegistry::load( &config.sites)?;
    info!("loaded {} hangars, {} drop points and {} weather stations", registry.hangars.len(), registry.drop_points.len(), registry.meteo_stations.len());

    Ok((Arc::new(config), registry))
}

async fn run_dispatch<C> (config: Arc<FaedConfig>, registry: SiteRegistry, clock: C, location: GeoPoint3, conditions: FlightConditions, id: IncidenceId)->Result<()>
    where C: StepClock + 'static
{
    let publisher = ConfiguredPublisher::from_config( &config.publisher);
    let dispatcher = Dispatcher::new( config, registry, publisher, clock);
    dispatcher.publish_sites().await?;

    let job = dispatcher.dispatch_job( &location, &conditions, id).await?;
    while let Ok(s) = job.snapshots.recv().await {
        println!("{:2}/{} {:?}\t{}", s.step + 1, s.n_steps, s.phase, s.position);
    }

    let report = job.join().await?;
    println!("{}", serde_json::to_string_pretty( &report)?);
    Ok(())
}
