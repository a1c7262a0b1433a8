use std::time::Duration;

use async_trait::async_trait;
use emoji_common::GeneratorConfig;
use emoji_core::{
    DomainError, FetchedImage, GenerationReply, ImageFetcher, ImageGenerator, ImageUrl,
};
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use url::Url;

#[derive(Serialize)]
struct GenerateBody<'a> {
    prompt: &'a str,
}

fn generator_err(e: impl std::fmt::Display) -> DomainError {
    DomainError::GeneratorError(e.to_string())
}

fn fetch_err(e: impl std::fmt::Display) -> DomainError {
    DomainError::FetchError(e.to_string())
}

/// reqwest-backed client for the generation backend and image downloads
#[derive(Debug, Clone)]
pub struct HttpImageClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl HttpImageClient {
    /// Create a client POSTing prompts to `endpoint`
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, DomainError> {
        let endpoint = Url::parse(endpoint).map_err(|e| {
            DomainError::ValidationError(format!("invalid generator url {endpoint:?}: {e}"))
        })?;

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::InternalError(format!("failed to build http client: {e}")))?;

        Ok(Self { http, endpoint })
    }

    pub fn from_config(config: &GeneratorConfig) -> Result<Self, DomainError> {
        Self::new(&config.url, config.timeout())
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ImageGenerator for HttpImageClient {
    async fn generate(&self, prompt: &str) -> Result<GenerationReply, DomainError> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&GenerateBody { prompt })
            .send()
            .await
            .map_err(generator_err)?;

        let status = response.status().as_u16();
        let bytes = response.bytes().await.map_err(generator_err)?;
        let body = serde_json::from_slice(&bytes).ok();

        tracing::debug!(status, bytes = bytes.len(), json = body.is_some(), "Generation reply received");

        Ok(GenerationReply::new(status, body))
    }
}

#[async_trait]
impl ImageFetcher for HttpImageClient {
    async fn fetch(&self, url: &ImageUrl) -> Result<FetchedImage, DomainError> {
        let response = self
            .http
            .get(url.as_str())
            .send()
            .await
            .map_err(fetch_err)?
            .error_for_status()
            .map_err(fetch_err)?;

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(String::from);
        let bytes = response.bytes().await.map_err(fetch_err)?;

        Ok(FetchedImage {
            bytes: bytes.to_vec(),
            content_type,
        })
    }
}
