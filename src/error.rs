// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StacklinkError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Invalid stack reference: {0}")]
    StackRefError(String),

    #[error("Stack output error: {0}")]
    OutputError(String),

    #[error("Stack backend error: {0}")]
    BackendError(String),

    #[error("Failed to parse kubeconfig: {0}")]
    KubeconfigError(String),

    #[error("Namespace creation failed: {0}")]
    NamespaceError(String),

    #[error("Workload creation failed: {0}")]
    WorkloadError(String),
}

pub type Result<T> = std::result::Result<T, StacklinkError>;
