//! # MCP Registry Client
//!
//! Thin client for the MCP registry service REST API.
//!
//! ## Modules
//!
//! - `config` - Connection settings (host, port, path prefixes)
//! - `url` - URL construction for the registry and extension sub-APIs
//! - `client` - HTTP queries returning raw JSON
//! - `display` - Human-readable rendering of server listings
//! - `error` - Error types

pub mod client;
pub mod config;
pub mod display;
pub mod error;
pub mod url;

pub use client::{RegistryClient, REQUEST_TIMEOUT};
pub use config::{
    ClientConfig, DEFAULT_HOST, DEFAULT_PORT, ENV_EXTENSIONS_PATH, ENV_HOST, ENV_PORT,
    ENV_REGISTRY_PATH, EXTENSIONS_PATH, REGISTRY_PATH,
};
pub use display::{
    print_server_cards, print_server_details, server_items, write_server_cards,
    write_server_details,
};
pub use error::{ConfigError, DisplayError, RegistryError, Result};
pub use url::{build_api_url, EXTENSION_API_VERSION, REGISTRY_API_VERSION};
