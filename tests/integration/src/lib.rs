//! Integration test library - common utilities

use std::net::SocketAddr;
use std::time::Duration;

use dashboard_server::{create_router, AppState, Config};
use reqwest::Client;
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

/// Test configuration
pub struct TestConfig {
    pub base_url: String,
    pub api_prefix: String,
    pub client: Client,
}

impl TestConfig {
    /// Target `DASHBOARD_TEST_URL` when set, otherwise a server started in
    /// this process on an ephemeral port
    pub async fn new() -> anyhow::Result<Self> {
        init_tracing();

        let base_url = match std::env::var("DASHBOARD_TEST_URL") {
            Ok(url) => url,
            Err(_) => spawn_server(Config::default()).await?,
        };

        Self::with_base_url(base_url, Config::default().api_prefix)
    }

    /// Start an in-process server with the given configuration
    pub async fn with_config(config: Config) -> anyhow::Result<Self> {
        init_tracing();
        let api_prefix = config.api_prefix.clone();
        let base_url = spawn_server(config).await?;
        Self::with_base_url(base_url, api_prefix)
    }

    fn with_base_url(base_url: String, api_prefix: String) -> anyhow::Result<Self> {
        let timeout_secs: u64 = std::env::var("DASHBOARD_TEST_TIMEOUT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(30);

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            base_url,
            api_prefix,
            client,
        })
    }

    /// URL of an API path under the server's prefix; a `/` prefix mounts
    /// routes at the root
    pub fn api_url(&self, path: &str) -> String {
        let prefix = self.api_prefix.trim_end_matches('/');
        format!("{}{}{}", self.base_url, prefix, path)
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

async fn spawn_server(mut config: Config) -> anyhow::Result<String> {
    config.http_host = "127.0.0.1".to_string();
    config.http_port = 0;

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr: SocketAddr = listener.local_addr()?;
    let app = create_router(AppState::new(config));

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app.into_make_service()).await {
            tracing::error!("Test server error: {}", e);
        }
    });

    Ok(format!("http://{}", addr))
}

/// Health response
#[derive(Debug, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// List document kinds response
#[derive(Debug, Deserialize)]
pub struct ListKindsResponse {
    pub kinds: Vec<String>,
    pub total: usize,
}

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub code: u32,
    pub message: String,
}
