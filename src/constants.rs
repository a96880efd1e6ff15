// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// The provisioner name, used for the managed-by label and logging
pub const PROVISIONER_NAME: &str = "stacklink";

/// Stack output keys consumed or published by the provisioner
pub mod outputs {
    /// Kubeconfig exported by the cluster stack
    pub const KUBECONFIG: &str = "kubeconfig";
    /// Namespace name we publish for downstream stacks
    pub const NAMESPACE: &str = "namespace";
    /// Sample app URL, published once the load balancer has an address
    pub const URL: &str = "url";
}

/// Stack backend layout
pub mod backend {
    /// Directory under $HOME holding the default outputs store
    pub const DEFAULT_DIR: &str = ".stacklink/stacks";
    /// File name of a stack's published outputs document
    pub const OUTPUTS_FILE: &str = "outputs.json";
}

/// The namespace provisioned into the target cluster
pub const APP_NAMESPACE: &str = "joe-duffy";

/// Sample application shape
pub mod sample_app {
    /// Label selector shared by the deployment and the service
    pub const LABEL_KEY: &str = "app";
    pub const LABEL_VALUE: &str = "iac-workshop";
    pub const DEPLOYMENT_NAME: &str = "app-dep";
    pub const SERVICE_NAME: &str = "app-svc";
    pub const IMAGE: &str = "gcr.io/google-samples/kubernetes-bootcamp:v1";
    pub const SERVICE_PORT: i32 = 80;
    pub const CONTAINER_PORT: i32 = 8080;
}
