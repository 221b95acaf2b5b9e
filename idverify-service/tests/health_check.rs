//! Spawned-server smoke tests.
//!
//! Run with: cargo test -p idverify-service --test health_check

use idverify_service::config::IdverifyConfig;
use idverify_service::startup::Application;
use reqwest::Client;
use std::time::Duration;

/// Spawn the application on a random port and return the port number.
async fn spawn_app() -> u16 {
    // Set test environment variables
    std::env::set_var("ENVIRONMENT", "test");
    std::env::set_var("APP__HOST", "127.0.0.1");
    std::env::set_var("APP__PORT", "0"); // Random port
    std::env::set_var("GOOGLE_CLOUD_PROJECT", "test-project");
    std::env::set_var("GOOGLE_API_KEY", "test-api-key");

    let config = IdverifyConfig::load().expect("Failed to load config");
    let app = Application::build(config)
        .await
        .expect("Failed to build application");

    let port = app.port();

    // Spawn the server in the background
    tokio::spawn(async move {
        let _ = app.run_until_stopped().await;
    });

    // Wait for server to start
    tokio::time::sleep(Duration::from_millis(100)).await;

    port
}

#[tokio::test]
async fn health_check_returns_ok() {
    let port = spawn_app().await;
    let client = Client::new();

    let response = client
        .get(format!("http://127.0.0.1:{}/health", port))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "idverify-service");
}

#[tokio::test]
async fn pages_are_served() {
    let port = spawn_app().await;
    let client = Client::new();

    for path in ["/", "/id_extractor", "/liveness"] {
        let response = client
            .get(format!("http://127.0.0.1:{}{}", port, path))
            .timeout(Duration::from_secs(5))
            .send()
            .await
            .expect("Failed to send request");

        assert!(response.status().is_success(), "GET {} failed", path);
    }
}
