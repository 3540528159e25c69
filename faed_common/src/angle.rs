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

/// normalize latitude degrees into [-90,90], folding over the poles
#[inline]
pub fn normalize_90 (d:f64) -> f64 {
    let x = normalize_180(d);

    if x < -90.0 { -180.0 - x }
    else if x > 90.0 { 180.0 - x }
    else { x }
}

/// normalize longitude degrees into [-180,180]
#[inline]
pub fn normalize_180 (d: f64) -> f64 {
    let x = d % 360.0;

    if x < -180.0 { 360.0 + x }
    else if x > 180.0 { x - 360.0 }
    else { x }
}

/// normalize compass degrees into [0,360).
/// Note that `360.0 + x` can round up to 360.0 for tiny negative x, which we map back to 0
#[inline]
pub fn normalize_360 (d: f64) -> f64 {
    let x = d % 360.0;
    let x = if x < 0.0 { 360.0 + x } else { x };
    if x >= 360.0 { 0.0 } else { x }
}

#[inline]
pub fn is_valid_latitude (d: f64) -> bool {
    d.is_finite() && (-90.0..=90.0).contains(&d)
}

#[inline]
pub fn is_valid_longitude (d: f64) -> bool {
    d.is_finite() && (-180.0..=180.0).contains(&d)
}
