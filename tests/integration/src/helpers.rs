//! Test helpers for integration tests
//!
//! Provides a stand-in generation backend, a test server bound to an
//! ephemeral port, and response assertions.

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::{
    extract::State,
    http::{header, StatusCode as AxumStatus},
    response::{IntoResponse, Response as AxumResponse},
    routing::{get, post},
    Json, Router,
};
use emoji_api::{create_app, create_app_state};
use emoji_common::AppConfig;
use parking_lot::Mutex;
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::fixtures::{PNG_BYTES, STORAGE_KEY};

#[derive(Clone)]
struct BackendState {
    reply: Arc<Mutex<(u16, String)>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

/// Stand-in for the generation backend and the image host
pub struct StubBackend {
    pub addr: SocketAddr,
    state: BackendState,
    _handle: JoinHandle<()>,
}

impl StubBackend {
    /// Start a backend that answers 200 with an empty image list
    pub async fn start() -> Result<Self> {
        let state = BackendState {
            reply: Arc::new(Mutex::new((200, r#"{"images":[]}"#.to_string()))),
            prompts: Arc::new(Mutex::new(Vec::new())),
        };

        let app = Router::new()
            .route("/api/generate", post(backend_generate))
            .route("/images/:name", get(backend_image))
            .with_state(state.clone());

        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Ok(Self {
            addr,
            state,
            _handle: handle,
        })
    }

    /// Endpoint the API should call for generation
    pub fn generate_url(&self) -> String {
        format!("http://{}/api/generate", self.addr)
    }

    /// URL of a served image
    pub fn image_url(&self, name: &str) -> String {
        format!("http://{}/images/{name}", self.addr)
    }

    /// Set the next JSON reply
    pub fn reply_json(&self, status: u16, body: &Value) {
        *self.state.reply.lock() = (status, body.to_string());
    }

    /// Set the next reply to a raw body
    pub fn reply_raw(&self, status: u16, body: &str) {
        *self.state.reply.lock() = (status, body.to_string());
    }

    /// Prompts received so far
    pub fn prompts(&self) -> Vec<String> {
        self.state.prompts.lock().clone()
    }
}

async fn backend_generate(
    State(state): State<BackendState>,
    Json(body): Json<Value>,
) -> AxumResponse {
    if let Some(prompt) = body.get("prompt").and_then(Value::as_str) {
        state.prompts.lock().push(prompt.to_string());
    }
    let (status, body) = state.reply.lock().clone();
    let status = AxumStatus::from_u16(status).unwrap_or(AxumStatus::INTERNAL_SERVER_ERROR);
    (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
}

async fn backend_image() -> AxumResponse {
    ([(header::CONTENT_TYPE, "image/png")], PNG_BYTES).into_response()
}

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a server persisting into `storage_dir` and generating via `backend`
    pub async fn start(backend: &StubBackend, storage_dir: &Path) -> Result<Self> {
        Self::start_with_config(test_config(&backend.generate_url(), storage_dir)?).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        let state = create_app_state(config)?;
        let app = create_app(state);

        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            handle,
        })
    }

    /// Stop serving; the storage directory is left for a later server
    pub fn shutdown(self) {
        self.handle.abort();
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).json(body).send().await?)
    }

    /// Make a POST request without a body
    pub async fn post_empty(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).send().await?)
    }
}

/// Create a test configuration pointing at a backend and storage directory
pub fn test_config(generator_url: &str, storage_dir: &Path) -> Result<AppConfig> {
    let dir = storage_dir.display().to_string();
    let config = AppConfig::from_lookup(|key| match key {
        "APP_ENV" => Some("development".to_string()),
        "API_HOST" => Some("127.0.0.1".to_string()),
        "API_PORT" => Some("0".to_string()),
        "GENERATOR_URL" => Some(generator_url.to_string()),
        "GENERATOR_TIMEOUT_SECS" => Some("5".to_string()),
        "STORAGE_DIR" => Some(dir.clone()),
        "STORAGE_KEY" => Some(STORAGE_KEY.to_string()),
        _ => None,
    })
    .map_err(|e| anyhow::anyhow!("Config error: {}", e))?;

    Ok(config)
}

/// Path of the persisted gallery blob inside a storage directory
pub fn blob_path(storage_dir: &Path) -> std::path::PathBuf {
    storage_dir.join(format!("{STORAGE_KEY}.json"))
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(response: Response, expected_status: StatusCode) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}
