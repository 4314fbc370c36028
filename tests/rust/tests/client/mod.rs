//! Registry client integration tests with mock HTTP server

use mcp_registry_client::{ClientConfig, RegistryClient, RegistryError};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::time::Duration;
use tests::fixtures::{client_for, config_for, server_item, servers_response, unused_port};
use tests::logs::LogCapture;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// =============================================================================
// list_servers
// =============================================================================

#[tokio::test]
async fn test_list_servers_returns_body_unmodified() {
    let mock_server = MockServer::start().await;
    let body = servers_response(vec![
        server_item("io.github.example/files", "npm", "@example/files", "stdio"),
        server_item("io.github.example/search", "pypi", "example-search", "stdio"),
    ]);

    Mock::given(method("GET"))
        .and(path("/registry/v0.1/servers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server.uri());
    let servers = client.list_servers(None).await.unwrap();

    assert_eq!(servers, body);
}

#[tokio::test]
async fn test_list_servers_empty_name_is_aggregated() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/registry/v0.1/servers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server.uri());
    let servers = client.list_servers(Some("")).await.unwrap();

    assert_eq!(servers, json!([]));
}

#[tokio::test]
async fn test_list_servers_for_named_registry() {
    let mock_server = MockServer::start().await;
    let body = json!([server_item("team-a/tool", "oci", "ghcr.io/team-a/tool", "http")]);

    Mock::given(method("GET"))
        .and(path("/registry/teamA/v0.1/servers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server.uri());
    let servers = client.list_servers(Some("teamA")).await.unwrap();

    assert_eq!(servers, body);
}

#[tokio::test]
async fn test_list_servers_custom_registry_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/mcp/v0.1/servers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"servers": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = config_for(&mock_server.uri()).with_registry_path("mcp");
    let client = RegistryClient::new(config).unwrap();

    assert_eq!(
        client.list_servers(None).await.unwrap(),
        json!({"servers": []})
    );
}

#[tokio::test]
async fn test_list_servers_server_error_propagates() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/registry/v0.1/servers"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (logs, _guard) = LogCapture::install();
    let client = client_for(&mock_server.uri());

    let err = client.list_servers(None).await.unwrap_err();

    assert!(matches!(err, RegistryError::Status { .. }));
    assert_eq!(err.status(), Some(reqwest::StatusCode::INTERNAL_SERVER_ERROR));
    assert_eq!(
        err.url(),
        format!("{}/registry/v0.1/servers", mock_server.uri())
    );
    assert_eq!(logs.lines_containing("Error fetching servers").len(), 1);
}

#[tokio::test]
async fn test_list_servers_not_found_propagates() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/registry/missing/v0.1/servers"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server.uri());
    let err = client.list_servers(Some("missing")).await.unwrap_err();

    assert_eq!(err.status(), Some(reqwest::StatusCode::NOT_FOUND));
}

#[tokio::test]
async fn test_list_servers_invalid_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/registry/v0.1/servers"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&mock_server)
        .await;

    let (logs, _guard) = LogCapture::install();
    let client = client_for(&mock_server.uri());

    let err = client.list_servers(None).await.unwrap_err();

    assert!(matches!(err, RegistryError::Parse { .. }));
    assert_eq!(err.status(), None);
    assert_eq!(logs.lines_containing("Error fetching servers").len(), 1);
}

#[tokio::test]
async fn test_list_servers_connection_refused() {
    let config = ClientConfig::default()
        .with_host("127.0.0.1")
        .with_port(unused_port());
    let client = RegistryClient::new(config).unwrap();

    let (logs, _guard) = LogCapture::install();
    let err = client.list_servers(None).await.unwrap_err();

    assert!(matches!(err, RegistryError::Transport { .. }));
    assert!(!err.is_timeout());
    assert_eq!(logs.lines_containing("Error fetching servers").len(), 1);
}

#[tokio::test]
async fn test_list_servers_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/registry/v0.1/servers"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&mock_server)
        .await;

    let http_client = reqwest::Client::builder()
        .timeout(Duration::from_millis(100))
        .build()
        .unwrap();
    let client = RegistryClient::with_client(config_for(&mock_server.uri()), http_client);

    let err = client.list_servers(None).await.unwrap_err();

    assert!(err.is_timeout());
}

#[tokio::test]
async fn test_list_servers_is_single_shot() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/registry/v0.1/servers"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server.uri());
    assert!(client.list_servers(None).await.is_err());

    // Dropping the server verifies the request count
    drop(mock_server);
}

// =============================================================================
// list_registries
// =============================================================================

#[tokio::test]
async fn test_list_registries_logs_url_and_returns_body() {
    let mock_server = MockServer::start().await;
    let body = json!({
        "registries": [
            {"name": "default", "url": "https://registry.modelcontextprotocol.io"},
            {"name": "teamA"}
        ]
    });

    Mock::given(method("GET"))
        .and(path("/extension/v0/registries"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (logs, _guard) = LogCapture::install();
    let client = client_for(&mock_server.uri());

    let registries = client.list_registries().await.unwrap();

    assert_eq!(registries, body);
    let url = format!("{}/extension/v0/registries", mock_server.uri());
    assert_eq!(logs.lines_containing(&url).len(), 1);
    assert!(logs.lines_containing("Error fetching").is_empty());
}

#[tokio::test]
async fn test_list_registries_custom_extensions_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ext/v0/registries"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = config_for(&mock_server.uri()).with_extensions_path("ext");
    let client = RegistryClient::new(config).unwrap();

    assert_eq!(client.list_registries().await.unwrap(), json!([]));
}

#[tokio::test]
async fn test_list_registries_error_propagates() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/extension/v0/registries"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&mock_server)
        .await;

    let (logs, _guard) = LogCapture::install();
    let client = client_for(&mock_server.uri());

    let err = client.list_registries().await.unwrap_err();

    assert_eq!(err.status(), Some(reqwest::StatusCode::BAD_GATEWAY));
    assert_eq!(logs.lines_containing("Error fetching registries").len(), 1);
    assert!(logs.lines_containing("Error fetching servers").is_empty());
}
