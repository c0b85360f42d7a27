//! TOML-based service configuration.

use std::fmt;
use std::fs;
use std::net::IpAddr;
use std::path::Path;

use serde::Deserialize;

/// Top-level service configuration parsed from TOML.
///
/// All fields have defaults matching the built-in service settings. Load
/// from TOML with [`ServiceConfig::from_toml_file`] or use
/// [`ServiceConfig::default`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    /// Listener address and port.
    #[serde(default)]
    pub server: ServerConfig,
    /// Log filtering and output format.
    #[serde(default)]
    pub log: LogConfig,
}

/// Listener address and port.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Bind address (IPv4 or IPv6 literal).
    pub host: String,
    /// Listener port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8888,
        }
    }
}

/// Log filtering and output format.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    /// Default tracing filter directive (overridden by `RUST_LOG`).
    pub filter: String,
    /// Output format: `"pretty"` or `"json"`.
    pub format: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug)]
pub struct ConfigError {
    /// Dotted field path (e.g., `"server.host"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {} — {}", self.field, self.message)
    }
}

impl ServiceConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: path.display().to_string(),
            message: format!("cannot read file: {e}"),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Checks all constraints and returns every violation found.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.server.host.parse::<IpAddr>().is_err() {
            errors.push(ConfigError {
                field: "server.host".to_string(),
                message: format!("\"{}\" is not a valid IP address", self.server.host),
            });
        }
        if self.log.filter.is_empty() {
            errors.push(ConfigError {
                field: "log.filter".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.log.format != "pretty" && self.log.format != "json" {
            errors.push(ConfigError {
                field: "log.format".to_string(),
                message: format!("must be \"pretty\" or \"json\", got \"{}\"", self.log.format),
            });
        }

        errors
    }
}
