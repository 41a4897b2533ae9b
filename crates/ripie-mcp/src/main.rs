mod mcp;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use ripie::config::log::DEFAULT_FILTER;
use ripie::graphql::RipIeClient;

/// rip.ie death-notice tools over line-delimited JSON on stdio
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Log filter for stderr diagnostics (overridden by RUST_LOG)
    #[arg(long, default_value = DEFAULT_FILTER)]
    log_level: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // stdout carries replies only; all diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .init();

    let client = match RipIeClient::new() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("Failed to initialize HTTP client: {e}");
            return ExitCode::FAILURE;
        }
    };

    let tools: Vec<_> = ripie::operations::tool_names().collect();
    tracing::debug!(endpoint = client.endpoint(), ?tools, "ready");
    match mcp::server::run(&client) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("stdio failure: {e}");
            ExitCode::FAILURE
        }
    }
}
