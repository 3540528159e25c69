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

//! KML marker artifacts for the map display. The display only polls the artifacts, i.e. all we have to
//! produce are self-contained KML documents for a given position/geometry. The schema details (icons, styles)
//! are owned by the display client

pub mod kml_writer;
pub use kml_writer::KmlWriter;

pub mod markers;
pub use markers::*;
