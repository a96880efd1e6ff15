// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

use crate::constants::backend;

/// Provisioner configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Stack reference of the cluster stack that exports the kubeconfig
    pub cluster_stack_ref: String,
    /// Root directory of the local stack outputs backend
    pub backend_dir: PathBuf,
    /// Our own stack identity; when set, outputs are exported after provisioning
    pub self_stack_ref: Option<String>,
    /// Also provision the sample deployment and service
    pub deploy_sample_app: bool,
    pub testing_mode: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let cluster_stack_ref = env::var("CLUSTER_STACK_REF")
            .context("CLUSTER_STACK_REF environment variable not set")?;

        let backend_dir = env::var("STACK_BACKEND_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_backend_dir());

        let self_stack_ref = env::var("SELF_STACK_REF").ok();

        let deploy_sample_app: bool = env::var("DEPLOY_SAMPLE_APP")
            .unwrap_or("false".to_string())
            .parse()
            .unwrap_or(false);
        // For testing, uses the KUBECONFIG env var to create the cluster client instead of the stack output
        let testing_mode: bool = env::var("TESTING_MODE")
            .unwrap_or("false".to_string())
            .parse()
            .unwrap_or(false);

        Ok(Config {
            cluster_stack_ref,
            backend_dir,
            self_stack_ref,
            deploy_sample_app,
            testing_mode,
        })
    }
}

fn default_backend_dir() -> PathBuf {
    match env::var("HOME") {
        Ok(home) => PathBuf::from(home).join(backend::DEFAULT_DIR),
        Err(_) => PathBuf::from(backend::DEFAULT_DIR),
    }
}
