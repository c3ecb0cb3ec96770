//! MCP server runner for slab-mcp.

use std::sync::Arc;

use rmcp::serve_server;
use rmcp::transport::io::stdio;
use slab_core::control::SlabControlPlane;
use tracing::{error, info};

use crate::SlabMcp;

/// Serves the MCP server over stdio until the peer disconnects or the
/// process receives an interrupt.
///
/// # Errors
/// Returns any transport or server error.
pub async fn serve_stdio(
    control: Arc<SlabControlPlane>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let service = SlabMcp::with_control(control);
    let (stdin, stdout) = stdio();
    let running = serve_server(service, (stdin, stdout))
        .await
        .inspect_err(|err| error!("failed to start MCP service: {err}"))?;
    info!("Slab MCP server running on stdio");

    // Dropping the running service on interrupt cancels it.
    tokio::select! {
        quit = running.waiting() => {
            let reason = quit?;
            info!(?reason, "MCP session closed");
        }
        signal = tokio::signal::ctrl_c() => {
            signal?;
            info!("interrupt received, shutting down");
        }
    }
    Ok(())
}
