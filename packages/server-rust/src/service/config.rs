/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Human-readable single-line text.
    Text,
    /// One JSON object per event.
    Json,
}

/// Server-level configuration for the registry process: node identity and
/// log output.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Identifier for this node, attached to startup log lines.
    pub node_id: String,
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            node_id: "landreg-local".to_string(),
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_config_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.node_id, "landreg-local");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, LogFormat::Text);
    }
}
