// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use netpolctl::config::{Cli, Config, OutputFormat};
use netpolctl::kubernetes::create_client;
use netpolctl::policies::{ingress_policy, summarize, PolicyManager, PolicySummary};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run(Cli::parse()).await {
        error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::from_cli(cli)?;
    match &config.kubeconfig {
        Some(path) => info!("Configuration loaded: kubeconfig={}", path.display()),
        None => info!("Configuration loaded: in-cluster"),
    }

    let client = create_client(&config).await?;
    println!("Connected to Kubernetes cluster");

    let manager = PolicyManager::new(client);

    let policies = manager.list(&config.namespace).await?;
    let summaries: Vec<PolicySummary> = policies.iter().map(summarize).collect();
    print!(
        "{}",
        render_policies(&config.namespace, config.output, &summaries)?
    );

    let policy = ingress_policy(&config.policy_name, &config.pod_selector, &config.ports);
    manager.create(&config.namespace, &policy).await?;

    if config.delete {
        manager
            .delete(&config.namespace, &config.policy_name)
            .await?;
    }

    Ok(())
}

/// Render listed policies in the requested output format
fn render_policies(
    namespace: &str,
    format: OutputFormat,
    summaries: &[PolicySummary],
) -> Result<String> {
    let out = match format {
        OutputFormat::Names => {
            let mut out = format!("Network Policies in '{}' namespace:\n", namespace);
            for summary in summaries {
                out.push_str(&format!(" - {}\n", summary.name));
            }
            out
        }
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(summaries)
                .context("Failed to serialize network policies as JSON")?;
            out.push('\n');
            out
        }
        OutputFormat::Yaml => serde_yaml::to_string(summaries)
            .context("Failed to serialize network policies as YAML")?,
    };
    Ok(out)
}
