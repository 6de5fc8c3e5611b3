// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Building NetworkPolicy definitions and summarising listed ones

use crate::constants::POLICY_TYPE_INGRESS;
use k8s_openapi::api::networking::v1::{
    NetworkPolicy, NetworkPolicyIngressRule, NetworkPolicyPort, NetworkPolicySpec,
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{LabelSelector, ObjectMeta};
use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;
use kube::ResourceExt;
use serde::Serialize;
use std::collections::BTreeMap;
use std::str::FromStr;

/// Transport protocol of an allowed ingress port
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    Tcp,
    Udp,
    Sctp,
}

impl Protocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Tcp => "TCP",
            Protocol::Udp => "UDP",
            Protocol::Sctp => "SCTP",
        }
    }
}

impl FromStr for Protocol {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "TCP" => Ok(Protocol::Tcp),
            "UDP" => Ok(Protocol::Udp),
            "SCTP" => Ok(Protocol::Sctp),
            other => Err(format!(
                "unknown protocol '{}', expected TCP, UDP or SCTP",
                other
            )),
        }
    }
}

/// A port opened by an ingress rule. Without a protocol the server default (TCP) applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngressPort {
    pub port: i32,
    pub protocol: Option<Protocol>,
}

/// Parse a `key=value` pod selector label
pub fn parse_selector(s: &str) -> Result<(String, String), String> {
    let Some((key, value)) = s.split_once('=') else {
        return Err(format!("invalid selector '{}', expected key=value", s));
    };
    if key.is_empty() {
        return Err(format!("invalid selector '{}', key is empty", s));
    }
    Ok((key.to_string(), value.to_string()))
}

/// Build a policy that admits ingress on the given ports to the pods matched by the selector.
///
/// An empty selector matches every pod in the namespace.
pub fn ingress_policy(
    name: &str,
    pod_selector: &BTreeMap<String, String>,
    ports: &[IngressPort],
) -> NetworkPolicy {
    let ports = ports
        .iter()
        .map(|p| NetworkPolicyPort {
            port: Some(IntOrString::Int(p.port)),
            protocol: p.protocol.map(|proto| proto.as_str().to_string()),
            end_port: None,
        })
        .collect();

    NetworkPolicy {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            ..Default::default()
        },
        spec: Some(NetworkPolicySpec {
            pod_selector: LabelSelector {
                match_labels: if pod_selector.is_empty() {
                    None
                } else {
                    Some(pod_selector.clone())
                },
                match_expressions: None,
            },
            policy_types: Some(vec![POLICY_TYPE_INGRESS.to_string()]),
            ingress: Some(vec![NetworkPolicyIngressRule {
                from: None,
                ports: Some(ports),
            }]),
            egress: None,
        }),
        ..Default::default()
    }
}

/// Printable view of a listed policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicySummary {
    pub name: String,
    pub namespace: String,
    pub pod_selector: BTreeMap<String, String>,
    pub ingress_rules: usize,
    pub ingress_ports: Vec<String>,
}

pub fn summarize(policy: &NetworkPolicy) -> PolicySummary {
    let spec = policy.spec.clone().unwrap_or_default();
    let ingress = spec.ingress.unwrap_or_default();

    let ingress_ports = ingress
        .iter()
        .flat_map(|rule| rule.ports.iter().flatten())
        .map(|p| {
            let port = match &p.port {
                Some(IntOrString::Int(n)) => n.to_string(),
                Some(IntOrString::String(s)) => s.clone(),
                None => "*".to_string(),
            };
            format!("{}/{}", port, p.protocol.as_deref().unwrap_or("TCP"))
        })
        .collect();

    PolicySummary {
        name: policy.name_any(),
        namespace: policy.namespace().unwrap_or_default(),
        pod_selector: spec.pod_selector.match_labels.unwrap_or_default(),
        ingress_rules: ingress.len(),
        ingress_ports,
    }
}
