//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` with camelCase field names.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// One gallery item as rendered
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmojiResponse {
    pub id: String,
    pub url: String,
    pub prompt: String,
    pub like_count: u32,
    pub created_at: DateTime<Utc>,
    pub liked: bool,
}

/// Gallery snapshot
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryResponse {
    pub items: Vec<EmojiResponse>,
    pub is_loading: bool,
}

/// Items added by a generation request
#[derive(Debug, Clone, Serialize)]
pub struct GenerateResponse {
    pub items: Vec<EmojiResponse>,
    pub message: String,
}

/// Result of a like toggle
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeResponse {
    pub id: String,
    pub liked: bool,
    pub like_count: u32,
    pub message: String,
}

/// Liked state of one item
#[derive(Debug, Clone, Serialize)]
pub struct LikedResponse {
    pub id: String,
    pub liked: bool,
}

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: Utc::now(),
        }
    }
}
