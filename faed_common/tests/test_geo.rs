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

use uom::si::f64::Length;
use uom::si::length::{meter,kilometer};
use faed_common::angle::*;
use faed_common::geo::*;

// run with "cargo test -p faed_common test_bearing -- --nocapture"

fn dms (d: f64, m: f64, s: f64)->f64 { d.signum() * (d.abs() + m/60.0 + s/3600.0) }

#[test]
fn test_normalize() {
    assert_eq!( normalize_360(-90.0), 270.0);
    assert_eq!( normalize_360(720.0), 0.0);
    assert!( normalize_360(-1e-15) < 360.0);
    assert_eq!( normalize_180(190.0), -170.0);
    assert_eq!( normalize_90(100.0), 80.0);

    assert!( is_valid_latitude(90.0));
    assert!( !is_valid_latitude(90.5));
    assert!( !is_valid_longitude(f64::NAN));
}

#[test]
fn test_bearing() {
    let origin = GeoPoint3::from_lat_lon_alt( 41.0, 1.0, 100.0);
    let dest = GeoPoint3::from_lat_lon_alt( 41.5, 1.5, 0.0);

    let bearing = origin.bearing_to(&dest);
    println!("bearing {origin} -> {dest} = {bearing}");
    assert!( (bearing - 36.7727).abs() < 1e-3);

    // cardinal directions on the equator
    let p0 = GeoPoint3::from_lat_lon( 0.0, 0.0);
    assert!( (p0.bearing_to( &GeoPoint3::from_lat_lon( 1.0, 0.0)) - 0.0).abs() < 1e-9);
    assert!( (p0.bearing_to( &GeoPoint3::from_lat_lon( 0.0, 1.0)) - 90.0).abs() < 1e-9);
    assert!( (p0.bearing_to( &GeoPoint3::from_lat_lon( -1.0, 0.0)) - 180.0).abs() < 1e-9);
    assert!( (p0.bearing_to( &GeoPoint3::from_lat_lon( 0.0, -1.0)) - 270.0).abs() < 1e-9);

    // all bearings are within [0,360)
    for i in 0..36 {
        let a = 10.0 * i as f64;
        let p = p0.geodesic_destination( a, Length::new::<kilometer>(50.0));
        let b = p0.bearing_to(&p);
        assert!( b >= 0.0 && b < 360.0, "bearing {b} out of range");
    }
}

#[test]
fn test_bearing_same_location() {
    let p = GeoPoint3::from_lat_lon_alt( 41.0, 1.0, 100.0);
    let q = GeoPoint3::from_lat_lon_alt( 41.0, 1.0, 0.0);
    let bearing = initial_bearing( &p, &q);
    assert_eq!( bearing, 0.0);
    assert_eq!( geodesic_distance( &p, &q).get::<meter>(), 0.0);
    assert!( haversine_distance( &p, &q).get::<meter>().abs() < 1e-9);
}

#[test]
fn test_geodesic_distance() {
    // Flinders Peak -> Buninyong
    let flinders = GeoPoint3::from_lat_lon( dms(-37.0, 57.0, 3.72030), dms(144.0, 25.0, 29.52440));
    let buninyong = GeoPoint3::from_lat_lon( dms(-37.0, 39.0, 10.15610), dms(143.0, 55.0, 35.38390));
    let d = geodesic_distance( &flinders, &buninyong).get::<meter>();
    println!("Flinders Peak -> Buninyong: {d}m");
    assert!( (d - 54972.271).abs() < 0.05);

    let origin = GeoPoint3::from_lat_lon( 41.0, 1.0);
    let dest = GeoPoint3::from_lat_lon( 41.5, 1.5);
    let d = origin.geodesic_distance_to(&dest).get::<kilometer>();
    println!("geodesic distance: {d}km");
    assert!( (d - 69.568).abs() < 0.01);

    // sphere vs. ellipsoid should be close for short distances
    let h = origin.haversine_distance_to(&dest).get::<kilometer>();
    assert!( (h - d).abs() < 0.5);

    // one degree of longitude on the equator
    let d = geodesic_distance( &GeoPoint3::from_lat_lon( 0.0, 0.0), &GeoPoint3::from_lat_lon( 0.0, 1.0)).get::<meter>();
    assert!( (d - 111319.491).abs() < 0.01);
}

#[test]
fn test_geodesic_destination() {
    let origin = GeoPoint3::from_lat_lon_alt( 41.0, 1.0, 300.0);
    let dest = GeoPoint3::from_lat_lon( 41.5, 1.5);

    let bearing = origin.bearing_to(&dest);
    let dist = origin.geodesic_distance_to(&dest);
    let p = origin.geodesic_destination( bearing, dist);
    println!("destination: {p}");

    assert!( (p.lat - dest.lat).abs() < 1e-6);
    assert!( (p.lon - dest.lon).abs() < 1e-6);
    assert_eq!( p.alt, 300.0); // altitude is preserved

    // zero distance does not move
    let q = origin.geodesic_destination( 123.0, Length::new::<meter>(0.0));
    assert_eq!( q, origin);

    // crossing the antimeridian normalizes longitude
    let p = GeoPoint3::from_lat_lon( 0.0, 179.9).geodesic_destination( 90.0, Length::new::<kilometer>(50.0));
    assert!( p.lon < -179.0 && p.lon >= -180.0);
}

#[test]
fn test_circle_points() {
    let center = GeoPoint3::from_lat_lon_alt( 41.6, 0.62, 5.0);
    let radius = Length::new::<meter>(1500.0);
    let ring = circle_points( &center, radius, 36);

    assert_eq!( ring.len(), 37);
    assert_eq!( ring.first(), ring.last());
    for p in &ring {
        let d = center.geodesic_distance_to(p).get::<meter>();
        assert!( (d - 1500.0).abs() < 1e-3, "vertex {p} at distance {d}");
        assert_eq!( p.alt, 5.0);
    }
}

#[test]
fn test_point_conversion() {
    let p = GeoPoint3::from_lat_lon_alt( 41.6, 0.62, 150.0);
    let pt = p.point();
    assert_eq!( pt.x(), 0.62);
    assert_eq!( pt.y(), 41.6);
    assert_eq!( GeoPoint3::from_point( pt, 150.0), p);
}

#[test]
fn test_validate() {
    assert!( GeoPoint3::from_lat_lon_alt( 41.0, 1.0, 100.0).validate().is_ok());
    assert!( GeoPoint3::from_lat_lon( 91.0, 1.0).validate().is_err());
    assert!( GeoPoint3::from_lat_lon( 41.0, -181.0).validate().is_err());
    assert!( GeoPoint3::from_lat_lon( f64::NAN, 1.0).validate().is_err());
    assert!( GeoPoint3::from_lat_lon_alt( 41.0, 1.0, f64::INFINITY).validate().is_err());
}

#[test]
fn test_serde() {
    let input = r#"{ "latitude": 41.6, "longitude": 0.62, "altitude": 150.0 }"#;
    let p: GeoPoint3 = serde_json::from_str(input).unwrap();
    println!("deserialized GeoPoint3: {p:?}");
    assert_eq!( p, GeoPoint3::from_lat_lon_alt( 41.6, 0.62, 150.0));

    let input = r#"{ "lat": 41.6, "lon": 0.62 }"#;
    let p: GeoPoint3 = serde_json::from_str(input).unwrap();
    assert_eq!( p.alt, 0.0);

    let s = serde_json::to_string(&p).unwrap();
    assert_eq!( s, r#"{"lat":41.6,"lon":0.62,"alt":0.0}"#);
}
