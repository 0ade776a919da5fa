//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use postdeck::api::PostsClient;
use postdeck::config::ApiConfig;
use postdeck::posts::PostsStore;
use std::net::TcpListener;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// API config pointing at `base_url` with short timeouts.
pub fn api_config(base_url: &str) -> ApiConfig {
    ApiConfig {
        base_url: base_url.to_string(),
        timeout_seconds: 5,
        connect_timeout_seconds: 1,
        ..ApiConfig::default()
    }
}

/// Store backed by a real HTTP client talking to `base_url`.
pub fn http_store(base_url: &str) -> PostsStore {
    let client = PostsClient::new(&api_config(base_url)).expect("Failed to build client");
    PostsStore::new(Arc::new(client))
}

/// Create a temporary config file pointing at `base_url`.
pub fn temp_config(base_url: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");

    let content = format!(
        r#"[api]
base_url = "{}"
timeout_seconds = 5
connect_timeout_seconds = 1
"#,
        base_url
    );

    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
