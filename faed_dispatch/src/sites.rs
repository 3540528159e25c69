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

//! the static dispatch sites: hangars (each with a drone), drop points and weather stations. Sites are loaded
//! from a RON file

use std::path::Path;
use serde::{Serialize,Deserialize};
use uom::si::{f64::Length,length::meter};
use faed_common::{config::{load_config,config_from_str}, geo::GeoPoint3};
use crate::errors::{Result,input_error,FaedDispatchError};

/// icon reference for KML markers
#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
pub struct StyleUrl {
    pub name: String,
    pub href: String,

    #[serde(default="default_scale")]
    pub scale: f64,
}

fn default_scale()->f64 { 1.0 }

#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
pub struct Drone {
    pub name: String,
    pub plate: String,
    pub style: StyleUrl,

    #[serde(default="default_battery_life")]
    pub battery_life: u8, // percent
}

fn default_battery_life()->u8 { 100 }

#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
pub struct DropPoint {
    pub id: String,
    pub name: String,

    #[serde(default)]
    pub description: String,

    pub city: String,
    pub location: GeoPoint3,

    #[serde(default="default_available")]
    pub is_available: bool,

    pub style: StyleUrl,
}

#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
pub struct Hangar {
    pub id: String,
    pub name: String,

    #[serde(default)]
    pub description: String,

    pub city: String,
    pub location: GeoPoint3,
    pub radius: f64, // meters

    #[serde(default="default_available")]
    pub is_available: bool,

    pub style: StyleUrl,
    pub drone: Drone,

    #[serde(default)]
    pub drop_points: Vec<String>, // ids of drop points served by this hangar
}

impl Hangar {
    pub fn radius (&self)->Length { Length::new::<meter>(self.radius) }
}

/// a weather station. Stations are shown on the display and the one closest to an incidence carries the
/// weather info that was used for the dispatch decision
#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
pub struct MeteoStation {
    pub id: String,
    pub name: String,

    #[serde(default)]
    pub description: String,

    pub city: String,
    pub location: GeoPoint3,

    #[serde(default="default_available")]
    pub is_available: bool,

    pub style: StyleUrl,
}

fn default_available()->bool { true }

#[derive(Serialize,Deserialize,Debug,Clone,Default)]
pub struct SiteRegistry {
    pub hangars: Vec<Hangar>,
    pub drop_points: Vec<DropPoint>,

    #[serde(default)]
    pub meteo_stations: Vec<MeteoStation>,
}

impl SiteRegistry {
    pub fn new (hangars: Vec<Hangar>, drop_points: Vec<DropPoint>)->Result<Self> {
        let registry = SiteRegistry { hangars, drop_points, meteo_stations: Vec::new() };
        registry.validate()?;
        Ok(registry)
    }

    pub fn with_meteo_stations (mut self, meteo_stations: Vec<MeteoStation>)->Result<Self> {
        self.meteo_stations = meteo_stations;
        self.validate()?;
        Ok(self)
    }

    pub fn load (path: impl AsRef<Path>)->Result<Self> {
        let registry: SiteRegistry = load_config( path)?;
        registry.validate()?;
        Ok(registry)
    }

    pub fn from_ron_str (s: &str)->Result<Self> {
        let registry: SiteRegistry = config_from_str( s)?;
        registry.validate()?;
        Ok(registry)
    }

    /// check site locations, id uniqueness and hangar drop point references
    pub fn validate (&self)->Result<()> {
        for (i,h) in self.hangars.iter().enumerate() {
            h.location.validate().map_err( |e| input_error!("hangar {}: {}", h.id, e))?;
            if !(h.radius.is_finite() && h.radius >= 0.0) { return Err( input_error!("hangar {}: invalid radius {}", h.id, h.radius)) }
            if self.hangars[..i].iter().any( |o| o.id == h.id) { return Err( input_error!("duplicate hangar id {}", h.id)) }

            for dp_id in &h.drop_points {
                if self.drop_point( dp_id).is_none() {
                    return Err( FaedDispatchError::UnknownSite( format!("drop point {dp_id} of hangar {}", h.id)))
                }
            }
        }

        for (i,dp) in self.drop_points.iter().enumerate() {
            dp.location.validate().map_err( |e| input_error!("drop point {}: {}", dp.id, e))?;
            if self.drop_points[..i].iter().any( |o| o.id == dp.id) { return Err( input_error!("duplicate drop point id {}", dp.id)) }
        }

        for (i,ms) in self.meteo_stations.iter().enumerate() {
            ms.location.validate().map_err( |e| input_error!("meteo station {}: {}", ms.id, e))?;
            if self.meteo_stations[..i].iter().any( |o| o.id == ms.id) { return Err( input_error!("duplicate meteo station id {}", ms.id)) }
        }

        Ok(())
    }

    pub fn hangar (&self, id: &str)->Option<&Hangar> {
        self.hangars.iter().find( |h| h.id == id)
    }

    pub fn drop_point (&self, id: &str)->Option<&DropPoint> {
        self.drop_points.iter().find( |dp| dp.id == id)
    }

    pub fn meteo_station (&self, id: &str)->Option<&MeteoStation> {
        self.meteo_stations.iter().find( |ms| ms.id == id)
    }

    pub fn hangars_in_city<'a> (&'a self, city: &'a str)->impl Iterator<Item=&'a Hangar> {
        self.hangars.iter().filter( move |h| h.city == city)
    }

    pub fn drop_points_in_city<'a> (&'a self, city: &'a str)->impl Iterator<Item=&'a DropPoint> {
        self.drop_points.iter().filter( move |dp| dp.city == city)
    }

    pub fn meteo_stations_in_city<'a> (&'a self, city: &'a str)->impl Iterator<Item=&'a MeteoStation> {
        self.meteo_stations.iter().filter( move |ms| ms.city == city)
    }

    pub fn available_drop_points (&self)->impl Iterator<Item=&DropPoint> {
        self.drop_points.iter().filter( |dp| dp.is_available)
    }

    pub fn available_meteo_stations (&self)->impl Iterator<Item=&MeteoStation> {
        self.meteo_stations.iter().filter( |ms| ms.is_available)
    }

    /// the drop points a hangar serves
    pub fn served_drop_points<'a> (&'a self, hangar: &'a Hangar)->impl Iterator<Item=&'a DropPoint> {
        hangar.drop_points.iter().filter_map( |id| self.drop_point(id))
    }

    pub fn set_hangar_availability (&mut self, id: &str, is_available: bool)->Result<()> {
        let h = self.hangars.iter_mut().find( |h| h.id == id).ok_or_else( || FaedDispatchError::UnknownSite( id.to_string()))?;
        h.is_available = is_available;
        Ok(())
    }

    pub fn set_drop_point_availability (&mut self, id: &str, is_available: bool)->Result<()> {
        let dp = self.drop_points.iter_mut().find( |dp| dp.id == id).ok_or_else( || FaedDispatchError::UnknownSite( id.to_string()))?;
        dp.is_available = is_available;
        Ok(())
    }

    pub fn set_meteo_station_availability (&mut self, id: &str, is_available: bool)->Result<()> {
        let ms = self.meteo_stations.iter_mut().find( |ms| ms.id == id).ok_or_else( || FaedDispatchError::UnknownSite( id.to_string()))?;
        ms.is_available = is_available;
        Ok(())
    }
}
