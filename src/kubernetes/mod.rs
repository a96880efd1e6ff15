// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes utilities for provider creation, namespace and workload provisioning.

pub mod namespaces;
pub mod provider;
pub mod workload;

pub use namespaces::ensure_namespace_exists;
pub use provider::Provider;
pub use workload::{ensure_deployment, ensure_service, sample_app_url};
