mod common;

use common::create_test_config;
use mockito::Matcher;
use serde_json::json;
use spin_client::config::Config;
use spin_client::{ReqwestTransport, SpinApiClient, Transport};

fn config_for(server_url: &str) -> Config {
    let mut config = create_test_config();
    config.spin.base_url = format!("{server_url}/api");
    config
}

#[tokio::test]
async fn test_posts_json_to_configured_endpoint() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api")
        .match_header("content-type", "application/json")
        .match_body(Matcher::PartialJson(json!({
            "api_login": "test_login",
            "api_password": "test_api_password",
            "method": "playerExists",
            "user_username": "example",
            "currency": "USD"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "error": 0,
                "response": {
                    "id": 1042,
                    "username": "example",
                    "balance": "12.50",
                    "currencycode": "USD",
                    "created": "2024-03-01 10:12:44",
                    "agent_balance": "100.00"
                }
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let client = SpinApiClient::new(config_for(&server.url()));
    let player = client.player_exists("example", "USD").await.unwrap();

    assert_eq!(player.balance, "12.50");
    assert_eq!(player.agent_balance.as_deref(), Some("100.00"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_api_error_over_http() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api")
        .with_status(200)
        .with_body(r#"{"error":5,"message":"bad user"}"#)
        .create_async()
        .await;

    let client = SpinApiClient::new(config_for(&server.url()));
    let err = client.create_player("example", "password", "USD").await.unwrap_err();

    assert_eq!(err.api_message(), Some("bad user"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_error_status_with_json_body_reads_envelope() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/api")
        .with_status(400)
        .with_body(r#"{"error":2,"message":"invalid currency"}"#)
        .create_async()
        .await;

    let client = SpinApiClient::new(config_for(&server.url()));
    let err = client.player_exists("example", "XXX").await.unwrap_err();

    assert_eq!(err.api_message(), Some("invalid currency"));
}

#[tokio::test]
async fn test_transport_reports_status_and_body() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/api")
        .with_status(503)
        .with_body("unavailable")
        .create_async()
        .await;

    let transport = ReqwestTransport::new();
    let response = transport
        .post_json(&format!("{}/api", server.url()), "{}".to_string())
        .await
        .unwrap();

    assert_eq!(response.status, 503);
    assert_eq!(response.body, "unavailable");
    assert!(!response.is_success());
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let mut config = create_test_config();
    // Nothing listens on the discard port
    config.spin.base_url = "http://127.0.0.1:9/api".to_string();

    let client = SpinApiClient::new(config);
    let err = client.player_exists("example", "USD").await.unwrap_err();

    assert!(err.is_transport());
}
