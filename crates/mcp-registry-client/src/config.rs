//! Client configuration
//!
//! Connection settings for the registry service. A config is moved into a
//! [`RegistryClient`](crate::RegistryClient) at construction and is read-only
//! from then on.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::url::{build_api_url, EXTENSION_API_VERSION, REGISTRY_API_VERSION};

/// Default registry service host
pub const DEFAULT_HOST: &str = "localhost";

/// Default registry service port
pub const DEFAULT_PORT: u16 = 8888;

/// Default path prefix of the registry sub-API
pub const REGISTRY_PATH: &str = "registry";

/// Default path prefix of the extension sub-API
pub const EXTENSIONS_PATH: &str = "extension";

/// Environment variables read by [`ClientConfig::from_env`]
pub const ENV_HOST: &str = "MCP_REGISTRY_HOST";
pub const ENV_PORT: &str = "MCP_REGISTRY_PORT";
pub const ENV_REGISTRY_PATH: &str = "MCP_REGISTRY_PATH";
pub const ENV_EXTENSIONS_PATH: &str = "MCP_EXTENSIONS_PATH";

/// Registry service connection settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Service hostname
    pub host: String,

    /// Service port
    pub port: u16,

    /// Path prefix of the registry sub-API (server listings)
    pub registry_path: String,

    /// Path prefix of the extension sub-API (registry listings)
    pub extensions_path: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            registry_path: REGISTRY_PATH.to_string(),
            extensions_path: EXTENSIONS_PATH.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read settings from `MCP_REGISTRY_*` environment variables.
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build a config from an arbitrary variable lookup (environment, .env map, ...)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup(ENV_HOST) {
            config.host = host;
        }
        if let Some(value) = lookup(ENV_PORT) {
            config.port = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort {
                    var: ENV_PORT,
                    value,
                })?;
        }
        if let Some(path) = lookup(ENV_REGISTRY_PATH) {
            config.registry_path = path;
        }
        if let Some(path) = lookup(ENV_EXTENSIONS_PATH) {
            config.extensions_path = path;
        }

        Ok(config)
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_registry_path(mut self, path: impl Into<String>) -> Self {
        self.registry_path = path.into();
        self
    }

    pub fn with_extensions_path(mut self, path: impl Into<String>) -> Self {
        self.extensions_path = path.into();
        self
    }

    /// URL on the registry sub-API (`v0.1`)
    pub fn registry_api_url(&self, registry: Option<&str>, resource: &str) -> String {
        build_api_url(
            &self.host,
            self.port,
            &self.registry_path,
            REGISTRY_API_VERSION,
            registry,
            resource,
        )
    }

    /// URL on the extension sub-API (`v0`)
    pub fn extension_api_url(&self, registry: Option<&str>, resource: &str) -> String {
        build_api_url(
            &self.host,
            self.port,
            &self.extensions_path,
            EXTENSION_API_VERSION,
            registry,
            resource,
        )
    }
}
