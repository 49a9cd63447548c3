//! Server configuration from the environment

use std::env;

pub const DEFAULT_PROTOCOL_VERSION: &str = "2025-11-25";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// `tracing` filter directive, e.g. "info" or "measure_mcp=debug"
    pub log_filter: String,
    /// Protocol version announced when the client does not send one
    pub protocol_version: String,
}

impl ServerConfig {
    /// Read `MEASURE_LOG` (falling back to `RUST_LOG`) and `MEASURE_PROTOCOL_VERSION`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            log_filter: non_empty("MEASURE_LOG")
                .or_else(|| non_empty("RUST_LOG"))
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            protocol_version: non_empty("MEASURE_PROTOCOL_VERSION")
                .unwrap_or_else(|| DEFAULT_PROTOCOL_VERSION.to_string()),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_with(vars: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<String, String> = vars.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.log_filter, "info");
        assert_eq!(config.protocol_version, DEFAULT_PROTOCOL_VERSION);
    }

    #[test]
    fn test_measure_log_wins_over_rust_log() {
        let config = config_with(&[("MEASURE_LOG", "debug"), ("RUST_LOG", "warn")]);
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_rust_log_fallback() {
        let config = config_with(&[("RUST_LOG", "warn")]);
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_blank_values_ignored() {
        let config = config_with(&[("MEASURE_LOG", "  "), ("MEASURE_PROTOCOL_VERSION", "")]);
        assert_eq!(config.log_filter, "info");
        assert_eq!(config.protocol_version, DEFAULT_PROTOCOL_VERSION);
    }

    #[test]
    fn test_protocol_override() {
        let config = config_with(&[("MEASURE_PROTOCOL_VERSION", "2024-11-05")]);
        assert_eq!(config.protocol_version, "2024-11-05");
    }
}
