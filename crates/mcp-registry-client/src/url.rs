//! URL construction for the registry service.
//!
//! Path segments are interpolated verbatim. Registry names and resource
//! paths are neither escaped nor validated, so the produced URL matches the
//! inputs byte for byte.

/// API version segment of the registry sub-API
pub const REGISTRY_API_VERSION: &str = "v0.1";

/// API version segment of the extension sub-API
pub const EXTENSION_API_VERSION: &str = "v0";

/// Build a fully qualified API URL.
///
/// `None` or an empty registry name selects the aggregated view:
/// `http://{host}:{port}/{prefix}/{version}/{resource}`.
/// Otherwise the registry name is inserted before the version:
/// `http://{host}:{port}/{prefix}/{registry}/{version}/{resource}`.
pub fn build_api_url(
    host: &str,
    port: u16,
    path_prefix: &str,
    api_version: &str,
    registry: Option<&str>,
    resource: &str,
) -> String {
    match registry.filter(|name| !name.is_empty()) {
        Some(name) => format!(
            "http://{}:{}/{}/{}/{}/{}",
            host, port, path_prefix, name, api_version, resource
        ),
        None => format!(
            "http://{}:{}/{}/{}/{}",
            host, port, path_prefix, api_version, resource
        ),
    }
}
