use std::sync::Arc;

use clap::Parser;
use landreg_core::{ErrorKind, Request, Response};
use landreg_server::cli::Cli;
use landreg_server::logging::init_tracing;
use landreg_server::service::{LandRegistryService, RegistryGateway};
use landreg_server::storage::HashMapStore;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Cli::parse().into_config();
    init_tracing(&config)?;

    let store = Arc::new(HashMapStore::new());
    let land = Arc::new(LandRegistryService::new(store.clone()));
    let mut gateway = RegistryGateway::new(land);

    tracing::info!(node_id = %config.node_id, "reading requests from stdin");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let response = match serde_json::from_str::<Request>(&line) {
            Ok(request) => gateway.invoke(request).await,
            Err(e) => Response::error(ErrorKind::InvalidArgument, format!("malformed request: {e}")),
        };
        let mut out = serde_json::to_vec(&render(&response))?;
        out.push(b'\n');
        stdout.write_all(&out).await?;
        stdout.flush().await?;
    }

    tracing::info!(parcels = store.len(), "stdin closed, shutting down");
    Ok(())
}

/// Text view of a response: the payload is the stored JSON, so it is shown
/// as a string rather than a byte array.
fn render(response: &Response) -> serde_json::Value {
    serde_json::json!({
        "status": response.status,
        "message": response.message,
        "payload": String::from_utf8_lossy(&response.payload),
        "error_kind": response.error_kind,
    })
}
