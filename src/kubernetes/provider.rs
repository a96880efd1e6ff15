// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster-access provider built from a kubeconfig string

use crate::error::{Result, StacklinkError};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config as KConfig};
use tracing::{debug, instrument};

/// A credential bundle for talking to the target cluster. Resources are
/// provisioned through the client it wraps.
#[derive(Clone)]
pub struct Provider {
    client: Client,
    origin: &'static str,
}

impl std::fmt::Debug for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // kube::Client does not implement Debug, so it is omitted here
        f.debug_struct("Provider")
            .field("origin", &self.origin)
            .finish_non_exhaustive()
    }
}

impl Provider {
    /// Wrap an existing client
    pub fn new(client: Client) -> Self {
        Provider {
            client,
            origin: "client",
        }
    }

    /// Build a provider from a kubeconfig document
    #[instrument(skip(kubeconfig))]
    pub async fn from_kubeconfig(kubeconfig: &str) -> Result<Self> {
        let parsed: Kubeconfig = serde_yaml::from_str(kubeconfig).map_err(|e| {
            StacklinkError::KubeconfigError(format!("Failed to parse kubeconfig: {}", e))
        })?;

        let client_config = KConfig::from_custom_kubeconfig(parsed, &KubeConfigOptions::default())
            .await
            .map_err(|e| {
                StacklinkError::KubeconfigError(format!("Failed to create config: {}", e))
            })?;

        debug!("Provider targets {}", client_config.cluster_url);

        let client = Client::try_from(client_config).map_err(|e| {
            StacklinkError::KubeconfigError(format!("Failed to create client: {}", e))
        })?;

        Ok(Provider {
            client,
            origin: "kubeconfig",
        })
    }

    /// Build a provider from the ambient environment (KUBECONFIG or
    /// in-cluster config). Used in testing mode.
    pub async fn from_env() -> Result<Self> {
        let client_config = KConfig::infer().await.map_err(|e| {
            StacklinkError::KubeconfigError(format!("Failed to infer config: {}", e))
        })?;

        let client = Client::try_from(client_config).map_err(|e| {
            StacklinkError::KubeconfigError(format!("Failed to create client: {}", e))
        })?;

        Ok(Provider {
            client,
            origin: "environment",
        })
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Where this provider's credentials came from, for logging
    pub fn origin(&self) -> &'static str {
        self.origin
    }
}
