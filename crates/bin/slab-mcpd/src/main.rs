//! Daemon entry point for the Slab MCP server.
//!
//! Loads configuration from the environment, builds the Slab GraphQL client,
//! and serves the MCP protocol over stdio.

mod config;
mod logging;

use std::process::ExitCode;
use std::sync::Arc;

use slab_core::client::SlabClient;
use slab_core::control::SlabControlPlane;
use slab_mcp::server::serve_stdio;
use tracing::{error, info};

use crate::config::SlabConfig;

#[tokio::main]
async fn main() -> ExitCode {
    let config = match SlabConfig::from_args() {
        Ok(config) => config,
        Err(err) => {
            logging::init(logging::DEFAULT_LOG_FILTER);
            error!("{err}");
            return ExitCode::FAILURE;
        }
    };
    logging::init(&config.log_filter);

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("[MCP Error] {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: SlabConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    info!(endpoint = %config.api_url, "starting slab-mcpd");
    let client = SlabClient::new(config.into_client_config())?;
    serve_stdio(Arc::new(SlabControlPlane::new(client))).await
}
