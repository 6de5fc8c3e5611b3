// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! NetworkPolicy management.

pub mod builder;
pub mod manager;

pub use builder::{ingress_policy, parse_selector, summarize, IngressPort, PolicySummary, Protocol};
pub use manager::PolicyManager;
