//! Operator CLI: run one registered process outside the hosting framework.
//!
//! Useful for smoke-testing a container image against a deployment's
//! configuration without going through the web-processing layer.

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use serde_json::{Map, Value};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use aquainfra_core::config::RuntimeConfig;
use aquainfra_processes::{registry, Processor};

/// Execute one registered process against the configured container runtime.
#[derive(Debug, Parser)]
#[command(name = "aquainfra-cli", version)]
struct Cli {
    /// Process identifier, e.g. "trend-analysis-mk". Omit to list all
    /// registered processes.
    process: Option<String>,

    /// Job identifier namespacing the output artifacts. A random one is
    /// generated when omitted.
    #[arg(long)]
    job_id: Option<String>,

    /// Process inputs as a JSON object, or @path to a JSON file.
    #[arg(long, default_value = "{}")]
    inputs: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "aquainfra=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config =
        Arc::new(RuntimeConfig::resolve().context("resolving runtime configuration")?);
    let processors = registry(&config);

    let Some(process_id) = cli.process else {
        for id in processors.keys() {
            println!("{id}");
        }
        return Ok(());
    };

    let processor = processors
        .get(process_id.as_str())
        .with_context(|| format!("unknown process {process_id:?}"))?;

    let raw_inputs = match cli.inputs.strip_prefix('@') {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading inputs file {path}"))?,
        None => cli.inputs,
    };
    let inputs: Map<String, Value> =
        serde_json::from_str(&raw_inputs).context("inputs must be a JSON object")?;

    let job_id = cli
        .job_id
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
    tracing::info!(process = %process_id, job_id = %job_id, "executing process");

    let outputs = processor.execute(&job_id, &inputs).await?;
    println!("{}", serde_json::to_string_pretty(&outputs)?);
    Ok(())
}
