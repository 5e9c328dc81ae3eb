/*
[INPUT]:  CLI arguments, optional YAML configuration file, ALLCOIN_* environment
[OUTPUT]: Pretty-printed JSON response of one Allcoin endpoint
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or startup flow
*/

mod commands;
mod config;

use allcoin_api::{AllcoinClient, DiagnosticHook, RequestDiagnostics, StatusCode};
use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, trace};
use tracing_subscriber::EnvFilter;

use crate::commands::Command;
use crate::config::CliConfig;

#[derive(Parser, Debug)]
#[command(name = "allcoin-cli", version, about = "Allcoin REST API command line client")]
struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
    #[arg(long = "dry-run")]
    dry_run: bool,
    #[command(subcommand)]
    command: Command,
}

/// Logs every outgoing request at trace level
struct TraceHook;

impl DiagnosticHook for TraceHook {
    fn on_request(&self, request: &RequestDiagnostics<'_>) {
        trace!(
            method = %request.method,
            url = %request.url,
            params = ?request.params.iter().map(|(name, _)| name.as_str()).collect::<Vec<_>>(),
            timeout_ms = request.timeout.as_millis() as u64,
            "request"
        );
    }

    fn on_response(&self, status: StatusCode, body: &str) {
        trace!(status = status.as_u16(), body_len = body.len(), "response");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let config = load_config(args.config_path.as_ref())?;
    let credentials = if args.command.is_signed() {
        config.require_credentials()?
    } else {
        config.credentials()
    };

    let client = AllcoinClient::with_config(credentials, config.client.clone())
        .context("build allcoin client")?
        .with_diagnostic_hook(TraceHook);
    info!(
        base_url = %config.client.base_url,
        signed = args.command.is_signed(),
        dry_run = args.dry_run,
        "client ready"
    );

    if args.dry_run {
        info!("dry-run requested; configuration validated");
        return Ok(());
    }

    let response = args.command.run(&client).await?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

fn load_config(path: Option<&PathBuf>) -> Result<CliConfig> {
    let mut config = match path {
        Some(path) => CliConfig::from_file(path).context("load config")?,
        None => CliConfig::default(),
    };
    config.apply_env();
    Ok(config)
}
