//! Gallery service
//!
//! Read access to the gallery and like toggling.

use emoji_core::ItemId;
use tracing::{debug, instrument, warn};

use crate::dto::{GalleryResponse, LikeResponse, LikedResponse};
use crate::store::GalleryStore;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Gallery service
pub struct GalleryService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> GalleryService<'a> {
    /// Create a new GalleryService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Current gallery for rendering
    pub fn get_gallery(&self) -> ServiceResult<GalleryResponse> {
        let snapshot = self.ctx.gallery().lock().snapshot();
        Ok(GalleryResponse::from(&snapshot))
    }

    /// Toggle the like on an item
    ///
    /// Unknown or malformed IDs are ignored and yield `None`.
    #[instrument(skip(self))]
    pub fn toggle_like(&self, raw_id: &str) -> ServiceResult<Option<LikeResponse>> {
        let Ok(id) = ItemId::parse(raw_id) else {
            debug!(raw_id, "Ignoring like for malformed id");
            return Ok(None);
        };

        let mut store = self.ctx.gallery().lock();
        let Some(status) = store.toggle_like(&id) else {
            debug!(item_id = %id, "Ignoring like for unknown item");
            return Ok(None);
        };
        commit_or_warn(&mut store, "toggle_like");

        Ok(Some(LikeResponse::from(status)))
    }

    /// Whether an item is liked; unknown IDs are not
    pub fn is_liked(&self, raw_id: &str) -> ServiceResult<LikedResponse> {
        let liked = ItemId::parse(raw_id)
            .map(|id| self.ctx.gallery().lock().is_liked(&id))
            .unwrap_or(false);

        Ok(LikedResponse {
            id: raw_id.to_string(),
            liked,
        })
    }
}

/// Commit after a mutation, logging instead of propagating a failure
///
/// The in-memory gallery stays authoritative; the next successful commit
/// writes the accumulated changes.
pub(crate) fn commit_or_warn(store: &mut GalleryStore, operation: &'static str) {
    if let Err(err) = store.commit() {
        warn!(
            operation,
            key = store.key(),
            error = %err,
            code = err.code(),
            "Failed to persist gallery"
        );
    }
}
