// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NetpolError {
    #[error("Failed to load kubeconfig: {0}")]
    ConfigError(String),

    #[error("Failed to create Kubernetes client: {0}")]
    ClientInitError(String),

    #[error("Failed to list network policies: {0}")]
    ListError(#[source] kube::Error),

    #[error("Failed to create network policy: {0}")]
    CreateError(#[source] kube::Error),

    #[error("Failed to delete network policy: {0}")]
    DeleteError(#[source] kube::Error),
}

impl NetpolError {
    /// HTTP status code of the API server rejection wrapped by this error, if any.
    ///
    /// Create and delete failures are not split by cause; callers that need to
    /// tell a name conflict (409) or a missing policy (404) apart check this.
    pub fn api_status_code(&self) -> Option<u16> {
        match self {
            NetpolError::ListError(kube::Error::Api(resp))
            | NetpolError::CreateError(kube::Error::Api(resp))
            | NetpolError::DeleteError(kube::Error::Api(resp)) => Some(resp.code),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, NetpolError>;
