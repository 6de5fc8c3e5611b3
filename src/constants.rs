// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Default location of the kubeconfig, relative to the user's home directory
pub mod kubeconfig {
    pub const DIR: &str = ".kube";
    pub const FILE: &str = "config";
}

/// Defaults for the policy managed by the CLI
pub mod defaults {
    pub const NAMESPACE: &str = "default";
    pub const POLICY_NAME: &str = "allow-http";
    pub const PORT: i32 = 80;
}

/// Policy type set on every ingress policy we build
pub const POLICY_TYPE_INGRESS: &str = "Ingress";
