//! Configuration loading and constants.
//!
//! The service runs with built-in defaults when no configuration file is given.
//! An optional TOML file can override the listen address and the log format.
//! The `VERSION` stamp is not part of the file: it is read from the process
//! environment on every request through a [`VersionSource`].

use const_format::formatcp;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::Path;

// =============================================================================
// Response Bodies
// =============================================================================

/// Body returned by the root handler
pub const ROOT_BODY: &str = "Hello World\n";

/// Body returned by the liveness probe
pub const HEALTH_BODY: &str = "200\n";

// =============================================================================
// Paths and Header Names
// =============================================================================

/// Path of the echo handler
pub const ROOT_PATH: &str = "/";

/// Path of the liveness probe
pub const HEALTH_PATH: &str = "/healthz";

/// Environment variable holding the version stamp
pub const VERSION_ENV_VAR: &str = "VERSION";

/// Response header carrying the version stamp.
///
/// Header names are case-insensitive and go out lowercase on HTTP/1.1.
pub const VERSION_HEADER: &str = "version";

// =============================================================================
// Listener Defaults
// =============================================================================

/// Listen on all interfaces
pub const DEFAULT_HTTP_HOST: &str = "0.0.0.0";

pub const DEFAULT_HTTP_PORT: u16 = 80;

pub const DEFAULT_BIND_ADDR: &str = formatcp!("{}:{}", DEFAULT_HTTP_HOST, DEFAULT_HTTP_PORT);

// =============================================================================
// Logging Defaults
// =============================================================================

/// Default log filter when neither `--log-level` nor RUST_LOG is set
pub const DEFAULT_LOG_FILTER: &str = "httpecho=info";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP listener configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP listener configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        DEFAULT_HTTP_HOST.to_string()
    }

    fn default_port() -> u16 {
        DEFAULT_HTTP_PORT
    }

    /// Socket address the listener binds to.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| {
                ConfigError::Validation(format!(
                    "Invalid http.host or http.port '{}:{}': {}",
                    self.host, self.port, e
                ))
            })
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default)]
    pub format: LogFormat,
}

impl AppConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(contents)?;
        config.http.bind_addr()?;
        Ok(config)
    }

    /// Load from `path` when given, otherwise fall back to built-in defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}

/// Read-only accessor for the version stamp.
///
/// Resolved once per request, never cached.
pub trait VersionSource: Send + Sync {
    fn version(&self) -> String;
}

/// Reads `VERSION` from the process environment.
///
/// An unset variable yields an empty string; there is no default version.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvVersion;

impl VersionSource for EnvVersion {
    fn version(&self) -> String {
        std::env::var_os(VERSION_ENV_VAR)
            .map(|v| v.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Fixed version stamp, used where the environment should not be consulted.
#[derive(Debug, Clone, Default)]
pub struct StaticVersion(pub String);

impl VersionSource for StaticVersion {
    fn version(&self) -> String {
        self.0.clone()
    }
}
