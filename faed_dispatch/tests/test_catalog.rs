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

mod common;
use common::*;

use faed_common::geo::GeoPoint3;
use faed_common::fs::filepath_contents_as_string;
use faed_dispatch::catalog::*;
use faed_dispatch::publisher::*;
use faed_dispatch::mission::*;
use faed_dispatch::site_markers::*;
use faed_dispatch::{FaedDispatchError,config_from_str};
use faed_dispatch::assignment::FlightConditions;

#[test]
fn test_register() {
    let mut catalog = KmlCatalog::new( "http://10.0.0.1:8000/", "/static/kml/", "/tmp/unused");

    assert_eq!( catalog.url_for("a.kml"), "http://10.0.0.1:8000/static/kml/a.kml");

    catalog.register( "a.kml", true);
    catalog.register( "b.kml", false);
    catalog.register( "c.kml", true);
    assert_eq!( catalog.len(), 3);

    // replace keeps position
    let e = catalog.register( "a.kml", false).clone();
    assert_eq!( e, KmlEntry { name: "a.kml".to_string(), url: "http://10.0.0.1:8000/static/kml/a.kml".to_string(), visibility: false });
    let names: Vec<&str> = catalog.iter().map( |e| e.name.as_str()).collect();
    assert_eq!( names, vec!["a.kml", "b.kml", "c.kml"]);

    assert!( catalog.set_visibility( "b.kml", true));
    assert!( !catalog.set_visibility( "x.kml", true));

    let lists = catalog.url_lists();
    assert_eq!( lists.visible, vec![ catalog.url_for("b.kml"), catalog.url_for("c.kml")]);
    assert_eq!( lists.hidden, vec![ catalog.url_for("a.kml")]);

    assert!( catalog.remove("b.kml").is_some());
    assert!( catalog.remove("b.kml").is_none());
    assert!( !catalog.contains("b.kml"));
    assert!( catalog.get("c.kml").unwrap().visibility);
}

#[test]
fn test_artifacts() {
    let dir = test_dir("artifacts");
    let mut catalog = KmlCatalog::new( SERVER_URL, "static/kml", &dir);

    let path = catalog.write_artifact( "in1drone.kml", "<kml/>", true).unwrap();
    assert_eq!( filepath_contents_as_string(&path).unwrap(), "<kml/>");
    assert!( catalog.contains("in1drone.kml"));

    catalog.write_artifact( "in1drone.kml", "<kml></kml>", true).unwrap();
    assert_eq!( filepath_contents_as_string(&path).unwrap(), "<kml></kml>");
    assert_eq!( catalog.len(), 1);

    assert!( catalog.remove_artifact("in1drone.kml").unwrap());
    assert!( !path.exists());
    assert!( catalog.is_empty());
    assert!( !catalog.remove_artifact("in1drone.kml").unwrap());

    std::fs::remove_dir_all(&dir).unwrap();
}

#[tokio::test]
async fn test_list_file_publisher() {
    let dir = test_dir("list_files");
    let publisher = ListFilePublisher::new( &dir);

    let lists = CatalogLists {
        visible: vec![ "http://h/a.kml".to_string(), "http://h/b.kml".to_string() ],
        hidden: vec![]
    };
    publisher.publish( &lists).await.unwrap();

    assert_eq!( filepath_contents_as_string( &dir.join( VISIBLE_LIST)).unwrap(), "http://h/a.kml\nhttp://h/b.kml\n");
    assert_eq!( filepath_contents_as_string( &dir.join( HIDDEN_LIST)).unwrap(), "");

    std::fs::remove_dir_all(&dir).unwrap();
}

#[tokio::test]
async fn test_scp_publisher_failure() {
    let dir = test_dir("scp");
    let publisher = ScpPublisher::new( &dir, "lg", "lg1", "/var/www/html", "faed-no-such-scp-command");
    assert_eq!( publisher.target(), "lg@lg1:/var/www/html");

    let result = publisher.publish( &CatalogLists::default()).await;
    assert!( matches!( result, Err(FaedDispatchError::PublishError(_))));
    assert!( dir.join( VISIBLE_LIST).is_file()); // lists are written before they are copied

    std::fs::remove_dir_all(&dir).unwrap();
}

#[cfg(unix)]
#[tokio::test]
async fn test_scp_publisher_exit_status() {
    let dir = test_dir("scp_status");
    let lists = CatalogLists { visible: vec![ "http://h/a.kml".to_string() ], hidden: vec![] };

    // the copy command runs but fails
    let publisher = ScpPublisher::new( &dir, "lg", "lg1", "/var/www/html", "false");
    match publisher.publish( &lists).await {
        Err(FaedDispatchError::PublishError(msg)) => println!("failed copy: {msg}"),
        other => panic!("unexpected result {other:?}")
    }

    // the copy command succeeds
    let publisher = ScpPublisher::new( &dir, "lg", "lg1", "/var/www/html", "true");
    publisher.publish( &lists).await.unwrap();
    assert_eq!( filepath_contents_as_string( &dir.join( VISIBLE_LIST)).unwrap(), "http://h/a.kml\n");
    assert_eq!( filepath_contents_as_string( &dir.join( HIDDEN_LIST)).unwrap(), "");

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_publisher_config() {
    let config: PublisherConfig = config_from_str( r#"Remote( list_dir: "/tmp/lists", user: "lg", host: "lg1", remote_dir: "/var/www/html" )"#).unwrap();
    match ConfiguredPublisher::from_config( &config) {
        ConfiguredPublisher::Remote(p) => assert_eq!( p.target(), "lg@lg1:/var/www/html"),
        _ => panic!("wrong publisher")
    }

    let config: PublisherConfig = config_from_str( "None").unwrap();
    assert!( matches!( ConfiguredPublisher::from_config( &config), ConfiguredPublisher::None(_)));
}

#[test]
fn test_site_markers() {
    let dir = test_dir("site_markers");
    let registry = test_registry();
    let mut catalog = KmlCatalog::new( SERVER_URL, "static/kml", &dir);

    let n = publish_sites( &registry, &mut catalog).unwrap();
    assert_eq!( n, 7);
    assert_eq!( catalog.len(), 7);

    let h2 = registry.hangar("h2").unwrap();
    assert_eq!( hangar_kml_name(h2), "hangar_h2.kml");
    assert!( !catalog.get("hangar_h2.kml").unwrap().visibility);
    assert!( !catalog.get("hangar_h2_inf.kml").unwrap().visibility);
    assert!( catalog.get("hangar_h1_inf.kml").unwrap().visibility);
    assert!( !catalog.get("droppoint_dp_c.kml").unwrap().visibility);

    let lists = catalog.url_lists();
    assert_eq!( lists.visible.len(), 4);
    assert_eq!( lists.hidden.len(), 3);

    let ring = filepath_contents_as_string( &dir.join("hangar_h1_inf.kml")).unwrap();
    assert!( ring.contains("<LinearRing>"));
    let dp = filepath_contents_as_string( &dir.join("droppoint_dp_a.kml")).unwrap();
    assert!( dp.contains("<coordinates>1.5,41.5,0</coordinates>"));

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_meteo_station_markers() {
    let dir = test_dir("meteo_markers");
    let registry = test_registry_with_meteo();
    let mut catalog = KmlCatalog::new( SERVER_URL, "static/kml", &dir);

    let n = publish_sites( &registry, &mut catalog).unwrap();
    assert_eq!( n, 10);

    let ms_b = registry.meteo_station("ms_b").unwrap();
    assert_eq!( meteo_station_kml_name( ms_b), "meteo_ms_b.kml");
    assert!( catalog.get("meteo_ms_a.kml").unwrap().visibility);
    assert!( !catalog.get("meteo_ms_b.kml").unwrap().visibility);

    let kml = filepath_contents_as_string( &dir.join("meteo_ms_c.kml")).unwrap();
    assert!( kml.contains("<name>weather station ms_c</name>"));
    assert!( kml.contains("<href>http://icons/meteo.png</href>"));

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_weather_info() {
    let dir = test_dir("weather_info");
    let mut catalog = KmlCatalog::new( SERVER_URL, "static/kml", &dir);
    let conditions = FlightConditions::new( 4.2, false).with_condition_code(801).with_temperature(23.46).with_humidity(40.0);

    let rows = weather_readings( &conditions);
    assert_eq!( rows[0], ("Temperature", "23.5 °C".to_string()));
    assert_eq!( rows[1], ("Wind", "4.2 m/s".to_string()));
    assert!( rows.contains( &("Humidity", "40 %".to_string())));
    assert!( rows.contains( &("Sky status", "clouds (801)".to_string())));
    assert!( !rows.iter().any( |(label,_)| *label == "Pressure"));

    // no station, no weather info
    assert!( !write_weather_info( &test_registry(), &GeoPoint3::from_lat_lon( 41.52, 1.52), &conditions, &mut catalog).unwrap());
    assert!( catalog.is_empty());

    // at the closest available station, in the hidden list
    let registry = test_registry_with_meteo();
    assert!( write_weather_info( &registry, &GeoPoint3::from_lat_lon( 41.52, 1.52), &conditions, &mut catalog).unwrap());
    assert!( !catalog.get( WEATHER_INFO_KML).unwrap().visibility);

    let kml = filepath_contents_as_string( &dir.join( WEATHER_INFO_KML)).unwrap();
    println!("{kml}");
    assert!( kml.contains("<name>weather station ms_a</name>"));
    assert!( kml.contains("<coordinates>1.4,41.4,200</coordinates>"));
    assert!( kml.contains("<b>Wind</b> - 4.2 m/s"));

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_mission_plan() {
    let registry = test_registry();
    let plan = MissionPlan::new( registry.hangar("h1").unwrap(), registry.drop_point("dp_a").unwrap());
    let wpl = plan.to_qgc_wpl();
    println!("{wpl}");

    let lines: Vec<&str> = wpl.lines().collect();
    assert_eq!( lines.len(), 5);
    assert_eq!( lines[0], "QGC WPL 110");
    assert_eq!( lines[1], "0\t0\t0\t16\t0.000000\t0.000000\t0.000000\t0.000000\t41.000000\t1.000000\t100.000000\t1");
    assert_eq!( lines[2], "1\t0\t3\t22\t0.000000\t0.000000\t0.000000\t0.000000\t0.000000\t0.000000\t50.000000\t1");
    assert_eq!( lines[3], "2\t0\t3\t16\t0.000000\t0.000000\t0.000000\t0.000000\t41.500000\t1.500000\t50.000000\t1");
    assert_eq!( lines[4], "3\t0\t3\t21\t0.000000\t0.000000\t0.000000\t0.000000\t0.000000\t0.000000\t0.000000\t1");

    let dir = test_dir("mission");
    let path = dir.join("mission.txt");
    plan.write_to( &path).unwrap();
    assert_eq!( filepath_contents_as_string(&path).unwrap(), wpl);
    std::fs::remove_dir_all(&dir).unwrap();
}
