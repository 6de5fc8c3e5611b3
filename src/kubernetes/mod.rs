// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes connection utilities.

pub mod client;

pub use client::{create_client, load_kube_config};
