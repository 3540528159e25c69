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
#![allow(non_snake_case,uncommon_codepoints,mixed_script_confusables)]

/// this module provides the geodesic support for drone flight paths on the WGS84 ellipsoid.
/// Distances are returned as [uom](https://docs.rs/uom/latest/uom/) lengths so that callers do not have to
/// guess about meters vs. kilometers. Positions are plain geodetic degrees plus altitude in meters.
///
/// Ellipsoidal distance and destination computations are delegated to the [geo](https://docs.rs/geo) crate
/// (Karney's geodesic algorithms), only the initial great circle bearing is computed here

use std::fmt;
use serde::{Serialize,Deserialize};
use uom::si::f64::Length;
use uom::si::length::meter;

use geo::{Destination,Distance,Point};
use geo::algorithm::line_measures::metric_spaces::{Haversine,Geodesic};

use crate::{sin,cos,atan2,rad,deg};
use crate::angle::{normalize_180,normalize_360,is_valid_latitude,is_valid_longitude};
use crate::errors::{Result,invalid_coordinate};

/* #region GeoPoint3 ***********************************************************************************************/

/// a geodetic position with altitude. Note that we use (lat,lon,alt) order for construction
/// since this is how the flight path computations are formulated, but KML output is (lon,lat,alt).
/// Deserialization also accepts "latitude"/"longitude"/"altitude" field names
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct GeoPoint3 {
    #[serde(alias="latitude")]
    pub lat: f64,  // degrees

    #[serde(alias="longitude")]
    pub lon: f64,  // degrees

    #[serde(alias="altitude", default)]
    pub alt: f64   // meters
}

impl GeoPoint3 {
    pub fn from_lat_lon_alt (lat: f64, lon: f64, alt: f64) -> Self {
        GeoPoint3 { lat, lon, alt }
    }

    pub fn from_lat_lon (lat: f64, lon: f64) -> Self {
        GeoPoint3 { lat, lon, alt: 0.0 }
    }

    /// same lateral position, different altitude
    pub fn with_altitude (&self, alt: f64) -> Self {
        GeoPoint3 { lat: self.lat, lon: self.lon, alt }
    }

    /// note that geo points are (x=lon,y=lat)
    pub fn from_point (p: Point, alt: f64) -> Self {
        GeoPoint3 { lat: p.y(), lon: p.x(), alt }
    }

    #[inline] pub fn point (&self) -> Point { Point::new( self.lon, self.lat) }

    #[inline] pub fn lat_rad (&self) -> f64 { rad(self.lat) }

    /// check that we have finite degrees within the valid latitude/longitude ranges and a finite altitude
    pub fn validate (&self) -> Result<()> {
        if !is_valid_latitude(self.lat) { return Err( invalid_coordinate!("latitude {} not in [-90,90]", self.lat)) }
        if !is_valid_longitude(self.lon) { return Err( invalid_coordinate!("longitude {} not in [-180,180]", self.lon)) }
        if !self.alt.is_finite() { return Err( invalid_coordinate!("altitude {} not finite", self.alt)) }
        Ok(())
    }

    /// same lateral position (within float equality), ignoring altitude
    pub fn is_same_location (&self, other: &GeoPoint3) -> bool {
        self.lat == other.lat && self.lon == other.lon
    }

    /// initial compass bearing towards `other` in degrees [0,360)
    #[inline] pub fn bearing_to (&self, other: &GeoPoint3) -> f64 { initial_bearing( self, other) }

    #[inline] pub fn geodesic_distance_to (&self, other: &GeoPoint3) -> Length { geodesic_distance( self, other) }

    #[inline] pub fn haversine_distance_to (&self, other: &GeoPoint3) -> Length { haversine_distance( self, other) }

    /// the point reached by traveling `dist` along `bearing` (degrees) on the ellipsoid. Altitude is preserved
    #[inline] pub fn geodesic_destination (&self, bearing: f64, dist: Length) -> GeoPoint3 { geodesic_destination( self, bearing, dist) }
}

impl fmt::Display for GeoPoint3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.6},{:.6},{:.1}m]", self.lat, self.lon, self.alt)
    }
}

/* #endregion GeoPoint3 */

/* #region bearing and distance ************************************************************************************/

/// initial great circle bearing (forward azimuth) from `p1` to `p2` in degrees, normalized to [0,360).
///
///   θ = atan2( sin Δλ ⋅ cos φ2 , cos φ1 ⋅ sin φ2 − sin φ1 ⋅ cos φ2 ⋅ cos Δλ )
///
/// The bearing between identical locations is undefined - we return 0 (north) for it instead of NaN
pub fn initial_bearing (p1: &GeoPoint3, p2: &GeoPoint3) -> f64 {
    if p1.is_same_location(p2) { return 0.0 }

    let φ1 = p1.lat_rad();
    let φ2 = p2.lat_rad();
    let Δλ = rad(p2.lon - p1.lon);

    let x = sin(Δλ) * cos(φ2);
    let y = cos(φ1)*sin(φ2) - sin(φ1)*cos(φ2)*cos(Δλ);
    let θ = atan2( x, y);

    if θ.is_nan() { 0.0 } else { normalize_360( deg(θ)) }
}

/// great circle distance on a sphere with mean earth radius
pub fn haversine_distance (p1: &GeoPoint3, p2: &GeoPoint3) -> Length {
    let dist = Haversine.distance( p1.point(), p2.point());
    Length::new::<meter>(dist)
}

/// ellipsoidal (WGS84) distance between `p1` and `p2`. Falls back to the haversine distance if the
/// geodesic computation does not produce a finite result
pub fn geodesic_distance (p1: &GeoPoint3, p2: &GeoPoint3) -> Length {
    if p1.is_same_location(p2) { return Length::new::<meter>(0.0) }

    let dist = Geodesic.distance( p1.point(), p2.point());
    if dist.is_finite() { Length::new::<meter>(dist) } else { haversine_distance( p1, p2) }
}

/// the position reached from `p` after traveling `dist` along the initial `bearing` (degrees) on a WGS84
/// geodesic. Altitude of `p` is preserved, longitude is normalized to [-180,180]
pub fn geodesic_destination (p: &GeoPoint3, bearing: f64, dist: Length) -> GeoPoint3 {
    let s = dist.get::<meter>();
    if s == 0.0 { return *p }

    let dest = Geodesic.destination( p.point(), bearing, s);
    GeoPoint3 {
        lat: dest.y(),
        lon: normalize_180( dest.x()),
        alt: p.alt
    }
}

/* #endregion bearing and distance */

/* #region derived geometries **************************************************************************************/

/// closed ring of `n_vertices`+1 points at geodesic distance `radius` around `center` (first == last point).
/// Ring altitude is the center altitude
pub fn circle_points (center: &GeoPoint3, radius: Length, n_vertices: usize) -> Vec<GeoPoint3> {
    let n = n_vertices.max(3);
    let mut pts: Vec<GeoPoint3> = Vec::with_capacity(n+1);
    let inc = 360.0 / n as f64;

    for i in 0..n {
        pts.push( geodesic_destination( center, inc * i as f64, radius));
    }
    pts.push( pts[0]);

    pts
}

/* #endregion derived geometries */
