// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Sample application provisioning: one deployment and one load-balanced
//! service in the provisioned namespace.

use crate::constants::sample_app;
use crate::error::{Result, StacklinkError};
use k8s_openapi::api::apps::v1::{Deployment, DeploymentSpec};
use k8s_openapi::api::core::v1::{
    Container, PodSpec, PodTemplateSpec, Service, ServicePort, ServiceSpec,
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::LabelSelector;
use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;
use kube::{
    api::{ObjectMeta, PostParams},
    Api, Client,
};
use std::collections::BTreeMap;
use tracing::{debug, info, instrument};

fn app_labels() -> BTreeMap<String, String> {
    BTreeMap::from([(
        sample_app::LABEL_KEY.to_string(),
        sample_app::LABEL_VALUE.to_string(),
    )])
}

/// Build the sample app deployment manifest
pub fn build_deployment(namespace: &str) -> Deployment {
    Deployment {
        metadata: ObjectMeta {
            name: Some(sample_app::DEPLOYMENT_NAME.to_string()),
            namespace: Some(namespace.to_string()),
            ..Default::default()
        },
        spec: Some(DeploymentSpec {
            replicas: Some(1),
            selector: LabelSelector {
                match_labels: Some(app_labels()),
                ..Default::default()
            },
            template: PodTemplateSpec {
                metadata: Some(ObjectMeta {
                    labels: Some(app_labels()),
                    ..Default::default()
                }),
                spec: Some(PodSpec {
                    containers: vec![Container {
                        name: sample_app::LABEL_VALUE.to_string(),
                        image: Some(sample_app::IMAGE.to_string()),
                        ..Default::default()
                    }],
                    ..Default::default()
                }),
            },
            ..Default::default()
        }),
        ..Default::default()
    }
}

/// Build the sample app service manifest
pub fn build_service(namespace: &str) -> Service {
    Service {
        metadata: ObjectMeta {
            name: Some(sample_app::SERVICE_NAME.to_string()),
            namespace: Some(namespace.to_string()),
            ..Default::default()
        },
        spec: Some(ServiceSpec {
            selector: Some(app_labels()),
            type_: Some("LoadBalancer".to_string()),
            ports: Some(vec![ServicePort {
                port: sample_app::SERVICE_PORT,
                target_port: Some(IntOrString::Int(sample_app::CONTAINER_PORT)),
                ..Default::default()
            }]),
            ..Default::default()
        }),
        ..Default::default()
    }
}

/// Ensure the sample deployment exists, create if it doesn't
#[instrument(skip(client))]
pub async fn ensure_deployment(client: &Client, namespace: &str) -> Result<()> {
    let deployments: Api<Deployment> = Api::namespaced(client.clone(), namespace);

    match deployments.get(sample_app::DEPLOYMENT_NAME).await {
        Ok(_) => {
            debug!("Deployment {} already exists", sample_app::DEPLOYMENT_NAME);
            Ok(())
        }
        Err(kube::Error::Api(err)) if err.code == 404 => {
            info!("Creating deployment {}", sample_app::DEPLOYMENT_NAME);
            let dep = build_deployment(namespace);
            deployments.create(&PostParams::default(), &dep).await?;
            Ok(())
        }
        Err(e) => Err(StacklinkError::WorkloadError(format!(
            "Failed to check/create deployment {}: {}",
            sample_app::DEPLOYMENT_NAME,
            e
        ))),
    }
}

/// Ensure the sample service exists and return it, create if it doesn't
#[instrument(skip(client))]
pub async fn ensure_service(client: &Client, namespace: &str) -> Result<Service> {
    let services: Api<Service> = Api::namespaced(client.clone(), namespace);

    match services.get(sample_app::SERVICE_NAME).await {
        Ok(svc) => {
            debug!("Service {} already exists", sample_app::SERVICE_NAME);
            Ok(svc)
        }
        Err(kube::Error::Api(err)) if err.code == 404 => {
            info!("Creating service {}", sample_app::SERVICE_NAME);
            let svc = build_service(namespace);
            let created = services.create(&PostParams::default(), &svc).await?;
            Ok(created)
        }
        Err(e) => Err(StacklinkError::WorkloadError(format!(
            "Failed to check/create service {}: {}",
            sample_app::SERVICE_NAME,
            e
        ))),
    }
}

/// Project the app URL from the service's load balancer status. None until
/// the load balancer has published an address.
pub fn sample_app_url(service: &Service) -> Option<String> {
    let ingress = service
        .status
        .as_ref()?
        .load_balancer
        .as_ref()?
        .ingress
        .as_ref()?
        .first()?;

    let host = ingress.hostname.as_ref().or(ingress.ip.as_ref())?;

    let port = service
        .spec
        .as_ref()?
        .ports
        .as_ref()?
        .first()
        .map(|p| p.port)?;

    Some(format!("http://{}:{}", host, port))
}
