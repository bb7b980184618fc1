//! Command-line and environment configuration for the `landreg-server` binary.

use clap::Parser;

use crate::service::config::{LogFormat, ServerConfig};

/// Land registry driver: reads JSON requests from stdin, one per line, and
/// writes one JSON response per line to stdout.
#[derive(Debug, Parser)]
#[command(name = "landreg-server", version, about)]
pub struct Cli {
    /// Identifier for this node.
    #[arg(long, env = "LANDREG_NODE_ID", default_value = "landreg-local")]
    pub node_id: String,

    /// Log filter directive used when `RUST_LOG` is unset.
    #[arg(long, env = "LANDREG_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    #[arg(long, env = "LANDREG_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

impl Cli {
    #[must_use]
    pub fn into_config(self) -> ServerConfig {
        ServerConfig {
            node_id: self.node_id,
            log_level: self.log_level,
            log_format: self.log_format,
        }
    }
}
