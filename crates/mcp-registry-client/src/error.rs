//! Error types for registry queries, configuration and display.

use thiserror::Error;

/// Result type for registry queries
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Failure of a single registry query.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Connection refused, DNS failure, timeout or a broken body stream
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a 4xx/5xx status
    #[error("{url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The response body is not valid JSON
    #[error("invalid JSON from {url}: {source}")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl RegistryError {
    /// URL of the request that failed
    pub fn url(&self) -> &str {
        match self {
            RegistryError::Transport { url, .. }
            | RegistryError::Status { url, .. }
            | RegistryError::Parse { url, .. } => url,
        }
    }

    /// HTTP status code, for status failures only
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            RegistryError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, RegistryError::Transport { source, .. } if source.is_timeout())
    }
}

/// Invalid client configuration read from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be a port number, got '{value}'")]
    InvalidPort { var: &'static str, value: String },
}

/// Failure while rendering server listings.
#[derive(Debug, Error)]
pub enum DisplayError {
    /// A required key is absent from a server item
    #[error("server item is missing required field '{0}'")]
    MissingField(&'static str),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}
