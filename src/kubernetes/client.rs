// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster client creation from a kubeconfig file

use crate::config::Config;
use crate::error::{NetpolError, Result};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config as KConfig};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Create a Kubernetes client for the cluster selected by the configuration.
///
/// Only the kubeconfig is read here; the first request goes out when the client is used.
#[instrument(skip(config))]
pub async fn create_client(config: &Config) -> Result<Client> {
    let client_config = load_kube_config(config).await?;
    info!("Using Kubernetes API server {}", client_config.cluster_url);

    Client::try_from(client_config).map_err(|e| NetpolError::ClientInitError(e.to_string()))
}

/// Build the connection configuration, from the kubeconfig file or the in-cluster environment
pub async fn load_kube_config(config: &Config) -> Result<KConfig> {
    match config.kubeconfig.as_deref() {
        Some(path) => load_from_file(path).await,
        None => {
            debug!("No kubeconfig path available, using in-cluster configuration");
            KConfig::incluster().map_err(|e| {
                NetpolError::ConfigError(format!("Failed to load in-cluster config: {}", e))
            })
        }
    }
}

async fn load_from_file(path: &Path) -> Result<KConfig> {
    debug!("Reading kubeconfig from {}", path.display());

    let contents = tokio::fs::read_to_string(path).await.map_err(|e| {
        NetpolError::ConfigError(format!("Failed to read {}: {}", path.display(), e))
    })?;

    let kubeconfig: Kubeconfig = serde_yaml::from_str(&contents).map_err(|e| {
        NetpolError::ConfigError(format!("Failed to parse {}: {}", path.display(), e))
    })?;

    KConfig::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
        .await
        .map_err(|e| NetpolError::ConfigError(format!("Failed to create config: {}", e)))
}
