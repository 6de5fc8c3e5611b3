// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{defaults, kubeconfig};
use crate::policies::{parse_selector, IngressPort, Protocol};
use anyhow::{ensure, Result};
use clap::{Parser, ValueEnum};
use std::collections::BTreeMap;
use std::path::PathBuf;

const KUBECONFIG_HELP: &str = "(optional) absolute path to the kubeconfig file [default: ~/.kube/config]; \
     only the double-dash form is accepted, not the single-dash -kubeconfig";

/// Create, list and delete Kubernetes NetworkPolicies in a namespace
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[arg(long, help = KUBECONFIG_HELP)]
    pub kubeconfig: Option<PathBuf>,

    /// Namespace to operate in
    #[arg(short, long, default_value = defaults::NAMESPACE)]
    pub namespace: String,

    /// Name of the network policy to create
    #[arg(long, default_value = defaults::POLICY_NAME)]
    pub name: String,

    /// Ingress port to allow (repeatable)
    #[arg(
        long = "port",
        default_values_t = [defaults::PORT],
        value_parser = clap::value_parser!(i32).range(1..=65535)
    )]
    pub ports: Vec<i32>,

    /// Protocol for the allowed ports (TCP, UDP or SCTP) [default: server side TCP]
    #[arg(long)]
    pub protocol: Option<Protocol>,

    /// Pod selector label as key=value (repeatable), empty selects all pods
    #[arg(long = "selector", value_parser = parse_selector)]
    pub selectors: Vec<(String, String)>,

    /// Delete the policy again after creating it
    #[arg(long)]
    pub delete: bool,

    /// Format used when printing listed policies
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Names)]
    pub output: OutputFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Names,
    Json,
    Yaml,
}

/// Runtime configuration, built once from the command line and passed down explicitly
#[derive(Debug, Clone)]
pub struct Config {
    /// Kubeconfig to load; `None` falls back to the in-cluster service account
    pub kubeconfig: Option<PathBuf>,
    pub namespace: String,
    pub policy_name: String,
    pub pod_selector: BTreeMap<String, String>,
    pub ports: Vec<IngressPort>,
    pub delete: bool,
    pub output: OutputFormat,
}

impl Config {
    /// Build configuration from parsed command line arguments
    pub fn from_cli(cli: Cli) -> Result<Self> {
        Self::from_cli_with_home(cli, dirs::home_dir())
    }

    fn from_cli_with_home(cli: Cli, home: Option<PathBuf>) -> Result<Self> {
        let mut pod_selector = BTreeMap::new();
        for (key, value) in cli.selectors {
            ensure!(
                !pod_selector.contains_key(&key),
                "selector key '{}' given more than once",
                key
            );
            pod_selector.insert(key, value);
        }

        let ports = cli
            .ports
            .into_iter()
            .map(|port| IngressPort {
                port,
                protocol: cli.protocol,
            })
            .collect();

        Ok(Config {
            kubeconfig: resolve_kubeconfig(cli.kubeconfig, home),
            namespace: cli.namespace,
            policy_name: cli.name,
            pod_selector,
            ports,
            delete: cli.delete,
            output: cli.output,
        })
    }
}

/// Pick the kubeconfig path: an explicit flag wins, otherwise `<home>/.kube/config`.
/// An explicitly empty path, or no home directory, yields `None`.
pub fn resolve_kubeconfig(explicit: Option<PathBuf>, home: Option<PathBuf>) -> Option<PathBuf> {
    match explicit {
        Some(path) if path.as_os_str().is_empty() => None,
        Some(path) => Some(path),
        None => home.map(|h| h.join(kubeconfig::DIR).join(kubeconfig::FILE)),
    }
}
