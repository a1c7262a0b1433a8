//! Test fixtures and response shapes
//!
//! Mirrors the JSON the API produces so tests can deserialize bodies.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Bytes served by the stand-in image host
pub const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\nstub-image";

/// Storage key used by every test server
pub const STORAGE_KEY: &str = "emoji-storage";

/// Generate request
#[derive(Debug, Serialize)]
pub struct GenerateRequest {
    pub prompt: String,
}

impl GenerateRequest {
    pub fn new(prompt: &str) -> Self {
        Self {
            prompt: prompt.to_string(),
        }
    }
}

/// Backend body listing the given image URLs
pub fn images_body(urls: &[String]) -> Value {
    json!({ "images": urls })
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmojiDto {
    pub id: String,
    pub url: String,
    pub prompt: String,
    pub like_count: u32,
    pub created_at: String,
    pub liked: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryDto {
    pub items: Vec<EmojiDto>,
    pub is_loading: bool,
}

#[derive(Debug, Deserialize)]
pub struct GenerateDto {
    pub items: Vec<EmojiDto>,
    pub message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeDto {
    pub id: String,
    pub liked: bool,
    pub like_count: u32,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct LikedDto {
    pub id: String,
    pub liked: bool,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDto {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

/// A version 0 blob with one item carrying legacy field names
pub fn legacy_v0_blob(id: &str, url: &str) -> String {
    json!({
        "version": 0,
        "state": {
            "emojis": [{
                "id": id,
                "url": url,
                "prompt": "old cat",
                "likes": 3,
                "createdAt": "2024-01-01T00:00:00Z"
            }]
        }
    })
    .to_string()
}
