// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use tracing::{info, warn};

use stacklink::config::Config;
use stacklink::constants::{outputs, APP_NAMESPACE};
use stacklink::kubernetes::{
    ensure_deployment, ensure_namespace_exists, ensure_service, sample_app_url, Provider,
};
use stacklink::stack::{StackBackend, StackOutputs, StackReference};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting stacklink provisioner");

    // Load configuration
    let config = Config::from_env()?;
    info!(
        "Configuration loaded: cluster_stack_ref={}",
        config.cluster_stack_ref
    );

    let backend = StackBackend::new(config.backend_dir.clone());
    let cluster_ref: StackReference = config.cluster_stack_ref.parse()?;

    // Resolve the cluster stack's published outputs
    let cluster_outputs = backend.read_outputs(&cluster_ref).await?;
    let kubeconfig = cluster_outputs.require_str(outputs::KUBECONFIG)?;

    // Build the provider for the target cluster
    let provider = if config.testing_mode {
        Provider::from_env().await?
    } else {
        Provider::from_kubeconfig(kubeconfig).await?
    };
    info!(
        "Provider created from {} for cluster stack {}",
        provider.origin(),
        cluster_ref
    );

    // Provision the namespace
    ensure_namespace_exists(provider.client(), APP_NAMESPACE).await?;

    let mut own_outputs = StackOutputs::new();
    own_outputs.insert(outputs::NAMESPACE, APP_NAMESPACE);

    // Optionally provision the sample workload into the namespace
    if config.deploy_sample_app {
        ensure_deployment(provider.client(), APP_NAMESPACE).await?;
        let service = ensure_service(provider.client(), APP_NAMESPACE).await?;
        match sample_app_url(&service) {
            Some(url) => {
                info!("Sample app reachable at {}", url);
                own_outputs.insert(outputs::URL, url);
            }
            None => warn!("Sample app load balancer has no address yet"),
        }
    }

    // Export our own outputs for downstream stacks
    if let Some(self_ref) = &config.self_stack_ref {
        let self_ref: StackReference = self_ref.parse()?;
        backend.write_outputs(&self_ref, &own_outputs).await?;
        info!("Exported outputs for stack {}", self_ref);
    }

    info!("Provisioning complete");
    Ok(())
}
