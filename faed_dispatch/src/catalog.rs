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

//! the catalog of KML artifacts the display should load. Each entry is a file in the KML dir that is
//! served under `<server_url>/<kml_url_path>/<name>`. Only the catalog lists (URLs of visible and hidden
//! entries) get published, the display then retrieves the artifacts themselves

use std::{path::{Path,PathBuf},sync::Arc};
use serde::{Serialize,Deserialize};
use tokio::sync::Mutex;
use tracing::{debug,trace};
use faed_common::fs::{set_filepath_contents,remove_file_if_exists};
use crate::FaedConfig;
use crate::errors::Result;

#[derive(Serialize,Deserialize,Debug,Clone,PartialEq,Eq)]
pub struct KmlEntry {
    pub name: String,
    pub url: String,
    pub visibility: bool,
}

/// what gets published: absolute URLs of visible and of hidden catalog entries, in registration order
#[derive(Serialize,Deserialize,Debug,Clone,Default,PartialEq,Eq)]
pub struct CatalogLists {
    pub visible: Vec<String>,
    pub hidden: Vec<String>,
}

impl CatalogLists {
    /// newline terminated URL list as the display expects it
    pub fn to_list_text (urls: &[String])->String {
        let mut s = String::with_capacity( urls.len() * 64);
        for url in urls {
            s.push_str( url);
            s.push('\n');
        }
        s
    }
}

pub type SharedCatalog = Arc<Mutex<KmlCatalog>>;

#[derive(Debug)]
pub struct KmlCatalog {
    base_url: String,
    kml_dir: PathBuf,
    entries: Vec<KmlEntry>,
}

impl KmlCatalog {
    pub fn new (server_url: &str, kml_url_path: &str, kml_dir: impl AsRef<Path>)->Self {
        let server_url = server_url.trim_end_matches('/');
        let kml_url_path = kml_url_path.trim_matches('/');
        let base_url = if kml_url_path.is_empty() { server_url.to_string() } else { format!("{server_url}/{kml_url_path}") };

        KmlCatalog { base_url, kml_dir: kml_dir.as_ref().to_path_buf(), entries: Vec::new() }
    }

    pub fn from_config (config: &FaedConfig)->Self {
        KmlCatalog::new( &config.server_url, &config.kml_url_path, &config.kml_dir)
    }

    pub fn into_shared (self)->SharedCatalog { Arc::new( Mutex::new(self)) }

    pub fn kml_dir (&self)->&Path { &self.kml_dir }

    pub fn url_for (&self, name: &str)->String { format!("{}/{}", self.base_url, name) }

    /// add an entry or replace the visibility of an existing one with the same name. Entries keep their
    /// original position in the catalog when replaced
    pub fn register (&mut self, name: &str, visibility: bool)->&KmlEntry {
        let idx = match self.entries.iter().position( |e| e.name == name) {
            Some(idx) => {
                self.entries[idx].visibility = visibility;
                idx
            }
            None => {
                let url = self.url_for( name);
                self.entries.push( KmlEntry { name: name.to_string(), url, visibility });
                self.entries.len() - 1
            }
        };
        &self.entries[idx]
    }

    pub fn set_visibility (&mut self, name: &str, visibility: bool)->bool {
        if let Some(e) = self.entries.iter_mut().find( |e| e.name == name) {
            e.visibility = visibility;
            true
        } else {
            false
        }
    }

    pub fn remove (&mut self, name: &str)->Option<KmlEntry> {
        let idx = self.entries.iter().position( |e| e.name == name)?;
        Some( self.entries.remove(idx))
    }

    pub fn contains (&self, name: &str)->bool { self.entries.iter().any( |e| e.name == name) }

    pub fn get (&self, name: &str)->Option<&KmlEntry> { self.entries.iter().find( |e| e.name == name) }

    pub fn len (&self)->usize { self.entries.len() }

    pub fn is_empty (&self)->bool { self.entries.is_empty() }

    pub fn iter (&self)->impl Iterator<Item=&KmlEntry> { self.entries.iter() }

    pub fn url_lists (&self)->CatalogLists {
        let mut lists = CatalogLists::default();
        for e in &self.entries {
            if e.visibility { lists.visible.push( e.url.clone()) } else { lists.hidden.push( e.url.clone()) }
        }
        lists
    }

    pub fn artifact_path (&self, name: &str)->PathBuf { self.kml_dir.join( name) }

    /// (over)write the artifact file `name` and make sure it is registered
    pub fn write_artifact (&mut self, name: &str, kml: &str, visibility: bool)->Result<PathBuf> {
        let path = set_filepath_contents( &self.kml_dir, name, kml.as_bytes())?;
        trace!("wrote {path:?}");
        self.register( name, visibility);
        Ok(path)
    }

    /// remove both the catalog entry and the artifact file. Returns true if there was an entry
    pub fn remove_artifact (&mut self, name: &str)->Result<bool> {
        let had_entry = self.remove( name).is_some();
        if remove_file_if_exists( self.artifact_path( name))? {
            debug!("removed artifact {name}");
        }
        Ok(had_entry)
    }
}
