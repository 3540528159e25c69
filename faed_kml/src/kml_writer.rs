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

use std::fmt::{Write,Display};
use faed_common::geo::GeoPoint3;

pub const KML_NS: &str = "http://www.opengis.net/kml/2.2";
pub const GX_NS: &str = "http://www.google.com/kml/ext/2.2";

/// a simple standalone KML writer that produces (tab indented) KML strings from nested closures.
/// Use like so:
/// ```
///     use faed_kml::KmlWriter;
///     use faed_common::geo::GeoPoint3;
///
///     let mut w = KmlWriter::new();
///     w.write_document( |w| {
///         w.write_element( "Placemark", |w| {
///             w.write_text_element( "name", "FAED");
///             w.write_element( "Point", |w| {
///                 w.write_coordinates( &[GeoPoint3::from_lat_lon_alt( 41.6, 0.62, 200.0)]);
///             });
///         });
///     });
///
///     println!("{}", w.as_str());
/// ```
/// Note that writing to a `String` cannot fail, hence we ignore the `fmt::Result` values
pub struct KmlWriter {
    buf: String,
    level: usize
}

impl KmlWriter {
    pub fn new()->Self {
        KmlWriter { buf: String::with_capacity(1024), level: 0 }
    }

    pub fn clear (&mut self) {
        self.buf.clear();
        self.level = 0;
    }

    /// the outer frame of each KML file: xml prolog and the `<kml>` root element
    pub fn write_document (&mut self, f: impl FnOnce(&mut KmlWriter)) {
        self.buf.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        self.write_element_attrs( "kml", &[("xmlns", KML_NS), ("xmlns:gx", GX_NS)], f);
    }

    pub fn write_element (&mut self, tag: &str, f: impl FnOnce(&mut KmlWriter)) {
        self.write_element_attrs( tag, &[], f)
    }

    pub fn write_element_attrs (&mut self, tag: &str, attrs: &[(&str,&str)], f: impl FnOnce(&mut KmlWriter)) {
        self.indent();
        let _ = write!( self.buf, "<{tag}");
        for (k,v) in attrs {
            let _ = write!( self.buf, " {k}=\"{}\"", escape(v));
        }
        self.buf.push_str(">\n");

        self.level += 1;
        f(self);
        self.level -= 1;

        self.indent();
        let _ = writeln!( self.buf, "</{tag}>");
    }

    /// leaf element with escaped text content
    pub fn write_text_element (&mut self, tag: &str, text: &str) {
        self.indent();
        let _ = writeln!( self.buf, "<{tag}>{}</{tag}>", escape(text));
    }

    /// leaf element with a (numeric or enum) value that does not need escaping
    pub fn write_value_element<T: Display> (&mut self, tag: &str, value: T) {
        self.indent();
        let _ = writeln!( self.buf, "<{tag}>{value}</{tag}>");
    }

    /// leaf element with unescaped (CDATA wrapped) html content, e.g. for balloon descriptions
    pub fn write_cdata_element (&mut self, tag: &str, html: &str) {
        self.indent();
        let _ = writeln!( self.buf, "<{tag}><![CDATA[{}]]></{tag}>", html.replace("]]>", "]]&gt;"));
    }

    /// a `<coordinates>` element. Single points are written inline, multiple points one per line.
    /// Note that KML uses lon,lat,alt order
    pub fn write_coordinates (&mut self, points: &[GeoPoint3]) {
        self.indent();
        if points.len() == 1 {
            let _ = writeln!( self.buf, "<coordinates>{}</coordinates>", coordinate(&points[0]));
        } else {
            self.buf.push_str("<coordinates>\n");
            self.level += 1;
            for p in points {
                self.indent();
                let _ = writeln!( self.buf, "{}", coordinate(p));
            }
            self.level -= 1;
            self.indent();
            self.buf.push_str("</coordinates>\n");
        }
    }

    pub fn as_str (&self)->&str { self.buf.as_str() }

    pub fn into_string (self)->String { self.buf }

    fn indent (&mut self) {
        for _ in 0..self.level { self.buf.push('\t') }
    }
}

impl Default for KmlWriter {
    fn default()->Self { KmlWriter::new() }
}

/// KML coordinate tuple "lon,lat,alt"
pub fn coordinate (p: &GeoPoint3)->String {
    format!("{},{},{}", p.lon, p.lat, p.alt)
}

/// XML text/attribute escaping
pub fn escape (s: &str)->String {
    let mut out = String::with_capacity( s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c)
        }
    }
    out
}
