//! `tracing` subscriber setup.

use tracing_subscriber::EnvFilter;

use crate::service::config::{LogFormat, ServerConfig};

/// Installs the global subscriber. Logs go to stderr so stdout stays free
/// for responses.
///
/// `RUST_LOG` takes precedence over `config.log_level`.
///
/// # Errors
///
/// Fails if the filter directive is invalid or a subscriber is already set.
pub fn init_tracing(config: &ServerConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let installed = match config.log_format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    };
    installed.map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
}
