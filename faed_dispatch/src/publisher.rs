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

use std::{future::{Future,ready},path::{Path,PathBuf}};
use serde::{Serialize,Deserialize};
use tokio::process::Command;
use tracing::{debug,info,trace};
use faed_common::fs::set_filepath_contents;
use crate::catalog::CatalogLists;
use crate::errors::{Result,publish_error};

/// list file with the URLs of visible catalog entries
pub const VISIBLE_LIST: &str = "kmls.txt";

/// list file with the URLs of hidden catalog entries
pub const HIDDEN_LIST: &str = "kmls_4.txt";

#[derive(Serialize,Deserialize,Debug,Clone)]
pub enum PublisherConfig {
    /// don't publish (catalog is only kept in memory)
    None,

    /// write list files to a local directory that is served to the display
    Local { list_dir: PathBuf },

    /// write list files and copy them to a remote display host with scp
    Remote {
        list_dir: PathBuf,
        user: String,
        host: String,
        remote_dir: String,

        #[serde(default="default_scp_cmd")]
        scp_cmd: String,
    },
}

fn default_scp_cmd()->String { "scp".to_string() }

/// something that makes the current catalog lists available to the display.
/// Failures are returned to the caller, there is no retry
pub trait CatalogPublisher: Send + Sync {
    fn publish (&self, lists: &CatalogLists)->impl Future<Output=Result<()>> + Send;
}

pub struct NoPublisher;

impl CatalogPublisher for NoPublisher {
    fn publish (&self, _lists: &CatalogLists)->impl Future<Output=Result<()>> + Send { ready(Ok(())) }
}

pub struct ListFilePublisher {
    list_dir: PathBuf,
}

impl ListFilePublisher {
    pub fn new (list_dir: impl AsRef<Path>)->Self { ListFilePublisher { list_dir: list_dir.as_ref().to_path_buf() } }

    pub fn list_dir (&self)->&Path { &self.list_dir }

    fn write_lists (&self, lists: &CatalogLists)->Result<(PathBuf,PathBuf)> {
        let visible = set_filepath_contents( &self.list_dir, VISIBLE_LIST, CatalogLists::to_list_text( &lists.visible).as_bytes())?;
        let hidden = set_filepath_contents( &self.list_dir, HIDDEN_LIST, CatalogLists::to_list_text( &lists.hidden).as_bytes())?;
        trace!("wrote {} visible and {} hidden catalog entries", lists.visible.len(), lists.hidden.len());
        Ok((visible,hidden))
    }
}

impl CatalogPublisher for ListFilePublisher {
    async fn publish (&self, lists: &CatalogLists)->Result<()> {
        self.write_lists( lists)?;
        Ok(())
    }
}

pub struct ScpPublisher {
    lists: ListFilePublisher,
    target: String,
    scp_cmd: String,
}

impl ScpPublisher {
    pub fn new (list_dir: impl AsRef<Path>, user: &str, host: &str, remote_dir: &str, scp_cmd: &str)->Self {
        ScpPublisher {
            lists: ListFilePublisher::new( list_dir),
            target: format!("{user}@{host}:{remote_dir}"),
            scp_cmd: scp_cmd.to_string()
        }
    }

    pub fn target (&self)->&str { &self.target }
}

impl CatalogPublisher for ScpPublisher {
    async fn publish (&self, lists: &CatalogLists)->Result<()> {
        let (visible,hidden) = self.lists.write_lists( lists)?;

        let mut cmd = Command::new( &self.scp_cmd);
        cmd.arg("-q").arg( visible.as_os_str()).arg( hidden.as_os_str()).arg( &self.target);
        debug!("executing {cmd:?}");

        let status = cmd.status().await.map_err( |e| publish_error!("failed to run {}: {}", self.scp_cmd, e))?;
        if status.success() {
            Ok(())
        } else {
            Err( publish_error!("{} to {} failed with {}", self.scp_cmd, self.target, status))
        }
    }
}

/// the publisher selected by [`PublisherConfig`]
pub enum ConfiguredPublisher {
    None(NoPublisher),
    Local(ListFilePublisher),
    Remote(ScpPublisher),
}

impl ConfiguredPublisher {
    pub fn from_config (config: &PublisherConfig)->Self {
        match config {
            PublisherConfig::None => ConfiguredPublisher::None( NoPublisher),
            PublisherConfig::Local { list_dir } => ConfiguredPublisher::Local( ListFilePublisher::new( list_dir)),
            PublisherConfig::Remote { list_dir, user, host, remote_dir, scp_cmd } => {
                info!("publishing catalog to {user}@{host}:{remote_dir}");
                ConfiguredPublisher::Remote( ScpPublisher::new( list_dir, user, host, remote_dir, scp_cmd))
            }
        }
    }
}

impl CatalogPublisher for ConfiguredPublisher {
    async fn publish (&self, lists: &CatalogLists)->Result<()> {
        match self {
            ConfiguredPublisher::None(p) => p.publish( lists).await,
            ConfiguredPublisher::Local(p) => p.publish( lists).await,
            ConfiguredPublisher::Remote(p) => p.publish( lists).await,
        }
    }
}
