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

use std::path::PathBuf;
use std::time::Duration;
use serde::{Serialize,Deserialize};
use faed_common::fs::*;
use faed_common::config::*;
use faed_common::geo::GeoPoint3;

fn test_dir (name: &str)->PathBuf {
    let dir = std::env::temp_dir().join( format!("faed_common_{}_{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

#[test]
fn test_set_contents() {
    let dir = test_dir("set_contents");

    let path = set_filepath_contents( &dir, "a.kml", b"first").unwrap();
    assert_eq!( filename(&path), Some("a.kml"));
    assert_eq!( filepath_contents_as_string(&path).unwrap(), "first");

    // overwrite, no leftover temp file
    set_filepath_contents( &dir, "a.kml", b"second").unwrap();
    assert_eq!( filepath_contents_as_string(&path).unwrap(), "second");
    assert!( !dir.join(".a.kml.tmp").exists());

    assert!( remove_file_if_exists(&path).unwrap());
    assert!( !remove_file_if_exists(&path).unwrap());

    std::fs::remove_dir_all(&dir).unwrap();
}

#[derive(Serialize,Deserialize,Debug,PartialEq)]
struct TestConfig {
    name: String,
    delay: Duration,
    home: GeoPoint3,
}

#[test]
fn test_ron_config() {
    let input = r#"
        TestConfig(
            name: "lleida",
            delay: (secs: 1, nanos: 500000000),
            home: ( lat: 41.6, lon: 0.62, alt: 150.0 ),
        )
    "#;
    let config: TestConfig = config_from_str( input).unwrap();
    assert_eq!( config.delay, Duration::from_millis(1500));
    assert_eq!( config.home.alt, 150.0);

    let dir = test_dir("ron_config");
    let s = config_to_ron_string( &config).unwrap();
    let path = set_filepath_contents( &dir, "test.ron", s.as_bytes()).unwrap();

    let loaded: TestConfig = load_config( &path).unwrap();
    assert_eq!( loaded, config);

    std::fs::remove_dir_all(&dir).unwrap();
}
