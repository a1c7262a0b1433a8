//! Gallery type to DTO mappers
//!
//! Implements `From` conversions from store and domain types to response DTOs.

use emoji_core::{EmojiItem, LikeStatus};

use super::responses::{EmojiResponse, GalleryResponse, LikeResponse};
use crate::services::messages;
use crate::store::GallerySnapshot;

impl EmojiResponse {
    /// Render an item with an explicit liked flag
    pub fn from_item(item: &EmojiItem, liked: bool) -> Self {
        Self {
            id: item.id.to_string(),
            url: item.url.to_string(),
            prompt: item.prompt.clone(),
            like_count: item.like_count,
            created_at: item.created_at,
            liked,
        }
    }

    /// Render a freshly generated item
    pub fn unliked(item: &EmojiItem) -> Self {
        Self::from_item(item, false)
    }
}

impl From<&GallerySnapshot> for GalleryResponse {
    fn from(snapshot: &GallerySnapshot) -> Self {
        Self {
            items: snapshot
                .items
                .iter()
                .map(|item| EmojiResponse::from_item(item, snapshot.is_liked(&item.id)))
                .collect(),
            is_loading: snapshot.is_loading,
        }
    }
}

impl From<LikeStatus> for LikeResponse {
    fn from(status: LikeStatus) -> Self {
        Self {
            id: status.id.to_string(),
            liked: status.liked,
            like_count: status.like_count,
            message: if status.liked {
                messages::LIKED
            } else {
                messages::UNLIKED
            }
            .to_string(),
        }
    }
}
