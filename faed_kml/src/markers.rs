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

use faed_common::geo::GeoPoint3;
use crate::KmlWriter;
use crate::kml_writer::escape;

/// incidence markers are shown at a fixed altitude above ground so that they stay visible next to the drone
pub const INCIDENCE_MARKER_ALTITUDE: f64 = 200.0;

pub const CAUTION_ICON: &str = "http://maps.google.com/mapfiles/kml/shapes/caution.png";
pub const RESOLVED_ICON: &str = "http://maps.google.com/mapfiles/kml/paddle/grn-circle.png";

/// side length of the (square) hangar footprint polygon in degrees
pub const HANGAR_FOOTPRINT_DEG: f64 = 0.0001;

/// the drone position of a single flight step
pub fn drone_placemark (icon_href: &str, p: &GeoPoint3)->String {
    let mut w = KmlWriter::new();
    w.write_document( |w| {
        w.write_element( "Document", |w| {
            w.write_element_attrs( "Style", &[("id","drone")], |w| {
                w.write_element( "IconStyle", |w| {
                    w.write_element( "Icon", |w| {
                        w.write_text_element( "href", icon_href);
                        w.write_value_element( "scale", 1.0);
                    });
                });
            });
            w.write_element( "Placemark", |w| {
                w.write_text_element( "description", "Drone covering emergency");
                w.write_text_element( "styleUrl", "#drone");
                w.write_element( "Point", |w| {
                    w.write_text_element( "altitudeMode", "relativeToGround");
                    w.write_coordinates( &[*p]);
                });
            });
        });
    });
    w.into_string()
}

/// a network link that makes the display re-load the (overwritten) drone placemark at `href` every
/// `refresh_interval` seconds
pub fn network_link (href: &str, refresh_interval: u32)->String {
    let mut w = KmlWriter::new();
    w.write_document( |w| {
        w.write_element( "Document", |w| {
            w.write_element( "NetworkLink", |w| {
                w.write_element( "Link", |w| {
                    w.write_text_element( "href", href);
                    w.write_text_element( "refreshMode", "onInterval");
                    w.write_value_element( "refreshInterval", refresh_interval);
                });
            });
        });
    });
    w.into_string()
}

#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum IncidenceMarkerState {
    Active,
    Resolved
}

/// the marker at the emergency location. Once the flight is completed the marker gets superseded by a
/// resolved marker at the same location
pub fn incidence_marker (location: &GeoPoint3, state: IncidenceMarkerState)->String {
    let (description, icon) = match state {
        IncidenceMarkerState::Active => ("Incidence", CAUTION_ICON),
        IncidenceMarkerState::Resolved => ("Incidence resolved", RESOLVED_ICON),
    };
    let p = location.with_altitude( INCIDENCE_MARKER_ALTITUDE);

    let mut w = KmlWriter::new();
    w.write_document( |w| {
        w.write_element( "Placemark", |w| {
            w.write_text_element( "name", "FAED");
            w.write_value_element( "visibility", 1);
            w.write_text_element( "description", description);
            w.write_element( "Style", |w| {
                w.write_element( "IconStyle", |w| {
                    w.write_element( "Icon", |w| {
                        w.write_text_element( "href", icon);
                    });
                });
                w.write_element( "LineStyle", |w| {
                    w.write_value_element( "width", 2);
                });
            });
            w.write_element( "Point", |w| {
                w.write_value_element( "extrude", 1);
                w.write_text_element( "altitudeMode", "relativeToGround");
                w.write_coordinates( &[p]);
            });
        });
    });
    w.into_string()
}

pub fn drop_point_marker (name: &str, description: &str, icon_href: &str, location: &GeoPoint3)->String {
    let mut w = KmlWriter::new();
    w.write_document( |w| {
        w.write_element( "Placemark", |w| {
            w.write_text_element( "name", name);
            w.write_value_element( "visibility", 1);
            w.write_text_element( "description", description);
            w.write_element( "Style", |w| {
                w.write_element( "IconStyle", |w| {
                    w.write_element( "Icon", |w| {
                        w.write_text_element( "href", icon_href);
                    });
                });
                w.write_element( "LineStyle", |w| {
                    w.write_value_element( "width", 2);
                });
            });
            w.write_element( "Point", |w| {
                w.write_value_element( "extrude", 1);
                w.write_text_element( "altitudeMode", "relativeToGround");
                w.write_coordinates( &[*location]);
            });
        });
    });
    w.into_string()
}

/// the extruded (square) footprint of a hangar building
pub fn hangar_polygon (name: &str, description: &str, location: &GeoPoint3)->String {
    let d = HANGAR_FOOTPRINT_DEG;
    let GeoPoint3 { lat, lon, alt } = *location;
    let ring = [
        GeoPoint3::from_lat_lon_alt( lat, lon, alt),
        GeoPoint3::from_lat_lon_alt( lat + d, lon, alt),
        GeoPoint3::from_lat_lon_alt( lat + d, lon + d, alt),
        GeoPoint3::from_lat_lon_alt( lat, lon + d, alt),
        GeoPoint3::from_lat_lon_alt( lat, lon, alt),
    ];

    let mut w = KmlWriter::new();
    w.write_document( |w| {
        w.write_element( "Document", |w| {
            w.write_element_attrs( "Style", &[("id","Red")], |w| {
                w.write_element( "LineStyle", |w| {
                    w.write_value_element( "width", 1.5);
                });
                w.write_element( "PolyStyle", |w| {
                    w.write_text_element( "color", "ff0000ff");
                });
            });
            w.write_element( "Placemark", |w| {
                w.write_text_element( "name", name);
                w.write_text_element( "description", description);
                w.write_text_element( "styleUrl", "#Red");
                w.write_element( "Polygon", |w| {
                    w.write_value_element( "extrude", 1);
                    w.write_text_element( "altitudeMode", "relativeToGround");
                    w.write_element( "outerBoundaryIs", |w| {
                        w.write_element( "LinearRing", |w| {
                            w.write_coordinates( &ring);
                        });
                    });
                });
            });
        });
    });
    w.into_string()
}

/// the area a hangar can serve, given as a closed ring of vertices
pub fn influence_ring (name: &str, ring: &[GeoPoint3])->String {
    let mut w = KmlWriter::new();
    w.write_document( |w| {
        w.write_element( "Document", |w| {
            w.write_text_element( "name", "Influence Radius");
            w.write_value_element( "open", 1);
            w.write_element( "Placemark", |w| {
                w.write_text_element( "name", name);
                w.write_value_element( "visibility", 1);
                w.write_element( "Style", |w| {
                    w.write_element( "LineStyle", |w| {
                        w.write_text_element( "color", "ff0000ff");
                        w.write_value_element( "width", 10);
                    });
                    w.write_element( "PolyStyle", |w| {
                        w.write_text_element( "color", "22ff0000");
                        w.write_value_element( "fill", 1);
                        w.write_value_element( "outline", 1);
                    });
                });
                w.write_element( "Polygon", |w| {
                    w.write_value_element( "extrude", 1);
                    w.write_text_element( "altitudeMode", "relativeToGround");
                    w.write_element( "outerBoundaryIs", |w| {
                        w.write_element( "LinearRing", |w| {
                            w.write_coordinates( ring);
                        });
                    });
                });
            });
        });
    });
    w.into_string()
}

/// a weather station placemark with an open balloon that lists the `(label,value)` readings
pub fn weather_info (station_name: &str, location: &GeoPoint3, readings: &[(&str,String)])->String {
    let mut html = String::new();
    for (label,value) in readings {
        html.push_str( &format!("<p><b>{}</b> - {}</p>", escape(label), escape(value)));
    }
    html.push_str( &format!("<hr><p>Latitude - {:.4}</p><p>Longitude - {:.4}</p>", location.lat, location.lon));

    let mut w = KmlWriter::new();
    w.write_document( |w| {
        w.write_element( "Placemark", |w| {
            w.write_text_element( "name", station_name);
            w.write_value_element( "gx:balloonVisibility", 1);
            w.write_cdata_element( "description", &html);
            w.write_element( "Point", |w| {
                w.write_coordinates( &[*location]);
            });
        });
    });
    w.into_string()
}
