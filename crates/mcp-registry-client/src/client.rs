//! HTTP client for the MCP registry service.
//!
//! Each query is a single GET: no retries, no backoff, no caching. Failures
//! are logged once and handed back to the caller unchanged.

use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, info};

use crate::config::ClientConfig;
use crate::error::{RegistryError, Result};

/// Timeout applied to every registry request
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for querying the registry and extension APIs
pub struct RegistryClient {
    config: ClientConfig,
    http_client: reqwest::Client,
}

impl RegistryClient {
    /// Create a new client with the default request timeout
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|source| RegistryError::Transport {
                url: format!("http://{}:{}", config.host, config.port),
                source,
            })?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Create with a custom HTTP client (useful for testing)
    pub fn with_client(config: ClientConfig, http_client: reqwest::Client) -> Self {
        Self {
            config,
            http_client,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// List MCP servers from the registry API.
    ///
    /// `None` (or an empty name) queries the aggregated registry.
    pub async fn list_servers(&self, registry: Option<&str>) -> Result<Value> {
        let url = self.config.registry_api_url(registry, "servers");
        debug!("Fetching servers from {}", url);

        self.get_json(&url).await.map_err(|e| {
            error!("Error fetching servers: {}", e);
            e
        })
    }

    /// List registries from the extension API (aggregated view only)
    pub async fn list_registries(&self) -> Result<Value> {
        let url = self.config.extension_api_url(None, "registries");
        info!("{}", url);

        self.get_json(&url).await.map_err(|e| {
            error!("Error fetching registries: {}", e);
            e
        })
    }

    async fn get_json(&self, url: &str) -> Result<Value> {
        let transport = |source: reqwest::Error| RegistryError::Transport {
            url: url.to_string(),
            source,
        };

        let response = self.http_client.get(url).send().await.map_err(transport)?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            return Err(RegistryError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response.bytes().await.map_err(transport)?;

        serde_json::from_slice(&body).map_err(|source| RegistryError::Parse {
            url: url.to_string(),
            source,
        })
    }
}
