// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! NetworkPolicy create, list and delete operations

use crate::error::{NetpolError, Result};
use k8s_openapi::api::networking::v1::NetworkPolicy;
use kube::{
    api::{DeleteParams, ListParams, PostParams},
    Api, Client, ResourceExt,
};
use tracing::{debug, info, instrument};

/// Manages network policies within the cluster.
#[derive(Clone)]
pub struct PolicyManager {
    client: Client,
}

impl PolicyManager {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    fn api(&self, namespace: &str) -> Api<NetworkPolicy> {
        Api::namespaced(self.client.clone(), namespace)
    }

    /// List all network policies in the namespace
    #[instrument(skip(self))]
    pub async fn list(&self, namespace: &str) -> Result<Vec<NetworkPolicy>> {
        let list = self
            .api(namespace)
            .list(&ListParams::default())
            .await
            .map_err(NetpolError::ListError)?;

        debug!(
            "Found {} network policies in namespace {}",
            list.items.len(),
            namespace
        );
        Ok(list.items)
    }

    /// Create a new network policy in the namespace, failing if the name is taken
    #[instrument(skip(self, policy), fields(policy = %policy.name_any()))]
    pub async fn create(&self, namespace: &str, policy: &NetworkPolicy) -> Result<NetworkPolicy> {
        let created = self
            .api(namespace)
            .create(&PostParams::default(), policy)
            .await
            .map_err(NetpolError::CreateError)?;

        info!(
            "Network policy {}/{} created successfully",
            namespace,
            created.name_any()
        );
        Ok(created)
    }

    /// Delete a network policy by name
    #[instrument(skip(self))]
    pub async fn delete(&self, namespace: &str, name: &str) -> Result<()> {
        self.api(namespace)
            .delete(name, &DeleteParams::default())
            .await
            .map_err(NetpolError::DeleteError)?;

        info!("Network policy {}/{} deleted successfully", namespace, name);
        Ok(())
    }
}
