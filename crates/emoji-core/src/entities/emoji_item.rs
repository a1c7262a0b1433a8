//! Emoji item entity - one generated emoji result

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{ImageUrl, ItemId};

/// A single generated emoji
///
/// `id`, `url`, `prompt` and `created_at` are fixed at creation. `like_count`
/// only moves through [`GalleryState::toggle_like`](crate::GalleryState::toggle_like).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmojiItem {
    pub id: ItemId,
    pub url: ImageUrl,
    pub prompt: String,
    pub like_count: u32,
    pub created_at: DateTime<Utc>,
}

impl EmojiItem {
    /// Create a new item with a fresh ID and no likes
    pub fn new(url: ImageUrl, prompt: impl Into<String>) -> Self {
        Self {
            id: ItemId::generate(),
            url,
            prompt: prompt.into(),
            like_count: 0,
            created_at: Utc::now(),
        }
    }
}
