//! Configuration management for the qrelay gateway.
//!
//! Supports loading configuration from:
//! 1. Configuration files (YAML)
//! 2. Environment variables (with QRELAY_ prefix)
//! 3. .env files
//!
//! Configuration precedence (highest to lowest):
//! 1. Environment variables
//! 2. Configuration file
//! 3. Default values

use std::net::SocketAddr;
use std::path::Path;

use qrelay_adapter_ibm::{DEFAULT_BACKEND, DEFAULT_ENDPOINT, Instance};
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

/// Complete gateway configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Address to bind the HTTP server to.
    pub bind_address: SocketAddr,

    /// IBM Quantum Runtime base URL.
    pub endpoint: String,

    /// Backend every job is submitted to and reported as.
    pub backend: String,

    /// IBM Quantum instance (hub/group/project).
    pub instance: Instance,

    /// Shots per submitted job; also the expansion factor for results.
    pub shots: u32,

    /// Queue estimate advertised to clients after submission.
    pub estimated_wait: String,

    /// Comma-separated allowed CORS origins, or `*`.
    pub cors_origins: String,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log filter: a level ("info") or `EnvFilter` directives ("qrelay_gateway=debug")
    pub level: String,

    /// Log format: "console" or "json"
    pub format: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            bind_address: ([127, 0, 0, 1], 3000).into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            backend: DEFAULT_BACKEND.to_string(),
            instance: Instance::default(),
            shots: 1000,
            estimated_wait: "5-30 minutes".to_string(),
            cors_origins: "*".to_string(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "console".to_string(),
        }
    }
}

impl GatewayConfig {
    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::IoError(e.to_string()))?;

        Self::from_yaml(&contents)
    }

    /// Parse configuration from YAML text. Missing fields take defaults.
    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        let config: GatewayConfig = serde_yaml_ng::from_str(contents)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration with the following precedence:
    /// 1. Load .env file if it exists
    /// 2. Load from file if provided, otherwise defaults
    /// 3. Apply environment variable overrides
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        let config = config.merge_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from an environment lookup.
    ///
    /// Only variables that are present override the current values.
    pub fn merge_env<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("QRELAY_BIND") {
            self.bind_address = v.parse().map_err(|_| {
                ConfigError::ValidationError(format!("Invalid QRELAY_BIND address: {v}"))
            })?;
        }
        if let Some(v) = lookup("QRELAY_IBM_ENDPOINT") {
            self.endpoint = v;
        }
        if let Some(v) = lookup("QRELAY_BACKEND") {
            self.backend = v;
        }
        if let Some(v) = lookup("QRELAY_SHOTS") {
            self.shots = v.parse().map_err(|_| {
                ConfigError::ValidationError(format!("Invalid QRELAY_SHOTS value: {v}"))
            })?;
        }
        if let Some(v) = lookup("QRELAY_ESTIMATED_WAIT") {
            self.estimated_wait = v;
        }

        // Instance
        if let Some(v) = lookup("QRELAY_HUB") {
            self.instance.hub = v;
        }
        if let Some(v) = lookup("QRELAY_GROUP") {
            self.instance.group = v;
        }
        if let Some(v) = lookup("QRELAY_PROJECT") {
            self.instance.project = v;
        }

        if let Some(v) = lookup("QRELAY_CORS_ORIGINS") {
            self.cors_origins = v;
        }

        // Logging
        if let Some(v) = lookup("QRELAY_LOG_LEVEL") {
            self.logging.level = v;
        }
        if let Some(v) = lookup("QRELAY_LOG_FORMAT") {
            self.logging.format = v;
        }

        Ok(self)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            return Err(ConfigError::ValidationError(format!(
                "Endpoint must be an http(s) URL: {}",
                self.endpoint
            )));
        }

        if self.backend.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "backend must not be empty".to_string(),
            ));
        }

        if self.shots == 0 {
            return Err(ConfigError::ValidationError(
                "shots must be greater than 0".to_string(),
            ));
        }

        if let Err(e) = EnvFilter::try_new(&self.logging.level) {
            return Err(ConfigError::ValidationError(format!(
                "Invalid log level {:?}: {e}",
                self.logging.level
            )));
        }

        match self.logging.format.as_str() {
            "console" | "json" => {}
            other => {
                return Err(ConfigError::ValidationError(format!(
                    "Invalid log format: {other}"
                )));
            }
        }

        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = GatewayConfig::default();
        assert_eq!(config.bind_address.to_string(), "127.0.0.1:3000");
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.backend, "ibm_brisbane");
        assert_eq!(config.shots, 1000);
        assert_eq!(config.estimated_wait, "5-30 minutes");
        assert_eq!(config.instance.hub, "ibm-q");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_yaml_partial_uses_defaults() {
        let config = GatewayConfig::from_yaml(
            "backend: ibm_kyiv\nshots: 4096\ninstance:\n  hub: my-hub\n  group: g\n  project: p\n",
        )
        .unwrap();
        assert_eq!(config.backend, "ibm_kyiv");
        assert_eq!(config.shots, 4096);
        assert_eq!(config.instance.hub, "my-hub");
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_yaml_parse_error() {
        let err = GatewayConfig::from_yaml("shots: [not, a, number]").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_env_overrides() {
        let config = GatewayConfig::default()
            .merge_env(env(&[
                ("QRELAY_BIND", "0.0.0.0:8080"),
                ("QRELAY_BACKEND", "ibm_sherbrooke"),
                ("QRELAY_SHOTS", "2000"),
                ("QRELAY_HUB", "research"),
                ("QRELAY_LOG_FORMAT", "json"),
            ]))
            .unwrap();
        assert_eq!(config.bind_address.to_string(), "0.0.0.0:8080");
        assert_eq!(config.backend, "ibm_sherbrooke");
        assert_eq!(config.shots, 2000);
        assert_eq!(config.instance.hub, "research");
        assert_eq!(config.instance.group, "open");
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_env_absent_leaves_values() {
        let base = GatewayConfig {
            backend: "ibm_osaka".to_string(),
            ..GatewayConfig::default()
        };
        let merged = base.clone().merge_env(env(&[])).unwrap();
        assert_eq!(merged, base);
    }

    #[test]
    fn test_env_invalid_values() {
        let err = GatewayConfig::default()
            .merge_env(env(&[("QRELAY_SHOTS", "many")]))
            .unwrap_err();
        assert!(err.to_string().contains("QRELAY_SHOTS"));

        let err = GatewayConfig::default()
            .merge_env(env(&[("QRELAY_BIND", "localhost")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = GatewayConfig {
            shots: 0,
            ..GatewayConfig::default()
        };
        assert!(config.validate().is_err());

        let config = GatewayConfig {
            endpoint: "ftp://example.com".to_string(),
            ..GatewayConfig::default()
        };
        assert!(config.validate().is_err());

        let config = GatewayConfig {
            backend: "  ".to_string(),
            ..GatewayConfig::default()
        };
        assert!(config.validate().is_err());

        let mut config = GatewayConfig::default();
        config.logging.level = "qrelay_gateway=verbose".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_filter_directives() {
        for level in ["debug", "qrelay_gateway=debug", "info,tower_http=trace"] {
            let config = GatewayConfig::default()
                .merge_env(env(&[("QRELAY_LOG_LEVEL", level)]))
                .unwrap();
            assert_eq!(config.logging.level, level);
            assert!(config.validate().is_ok(), "{level} rejected");
        }
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = GatewayConfig::from_file("/nonexistent/qrelay.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }
}
