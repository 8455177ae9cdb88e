//! Common test utilities for E2E tests

use dailyquote::{AppState, config};
use tempfile::TempDir;
use tokio::net::TcpListener;

/// Test server instance
pub struct TestServer {
    pub addr: String,
    pub state: AppState,
    pub _temp_dir: TempDir,
    pub client: reqwest::Client,
}

impl TestServer {
    /// Test server over a seeded database with a bootstrapped daily quote
    pub async fn new() -> Self {
        Self::with_seed(true).await
    }

    /// Test server over an empty database
    pub async fn empty() -> Self {
        Self::with_seed(false).await
    }

    async fn with_seed(seed: bool) -> Self {
        // Create temporary directory for test database
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.db");

        // Create test configuration
        let config = config::AppConfig {
            server: config::ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0, // Let OS assign port
            },
            database: config::DatabaseConfig { path: db_path },
            rotation: config::RotationConfig {
                enabled: false,
                time_of_day: "00:00".to_string(),
                bootstrap_on_start: seed,
            },
            seed: config::SeedConfig { enabled: seed },
            logging: config::LoggingConfig {
                level: "info".to_string(),
                format: "pretty".to_string(),
            },
        };

        // Initialize app state
        let state = AppState::new(&config).await.unwrap();

        // Create HTTP client
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .unwrap();

        // Bind to random port
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let addr_str = format!("http://{}", addr);

        let app = dailyquote::build_router(state.clone());

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr: addr_str,
            state,
            _temp_dir: temp_dir,
            client,
        }
    }

    /// Get base URL for API requests
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.addr, path)
    }

    /// Create a quote through the API and return its JSON
    pub async fn create_quote(&self, text: &str, author: &str) -> serde_json::Value {
        let response = self
            .client
            .post(self.url("/api/v1/quotes"))
            .json(&serde_json::json!({ "text": text, "author": author }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 201);
        response.json().await.unwrap()
    }
}
