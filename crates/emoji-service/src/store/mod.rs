//! Gallery store - the in-memory gallery plus its persistence lifecycle
//!
//! The store is constructed empty and unhydrated. Callers decide when
//! persisted data becomes visible by calling [`GalleryStore::hydrate`], and
//! when mutations become durable by calling [`GalleryStore::commit`].

use std::collections::BTreeSet;
use std::sync::Arc;

use emoji_core::{
    DomainError, EmojiItem, GalleryState, ImageUrl, ItemId, LikeStatus, StateStorage,
};
use emoji_storage::{schema, DiscardReason};
use parking_lot::Mutex;
use serde_json::Value;
use tracing::{debug, info, warn};

/// Store shared between request handlers
///
/// The lock is only ever held for synchronous store calls.
pub type SharedGallery = Arc<Mutex<GalleryStore>>;

/// What [`GalleryStore::hydrate`] found in storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HydrationOutcome {
    /// No blob stored under the key
    Empty,
    /// A blob was decoded, migrated from `from_version` if older
    Loaded { from_version: u32, repairs: usize },
    /// The blob could not be restored and was deleted
    Discarded { reason: DiscardReason },
}

/// Read-only view of the gallery for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GallerySnapshot {
    pub items: Vec<EmojiItem>,
    pub liked_ids: BTreeSet<ItemId>,
    pub is_loading: bool,
}

impl GallerySnapshot {
    #[inline]
    pub fn is_liked(&self, id: &ItemId) -> bool {
        self.liked_ids.contains(id)
    }
}

/// Gallery state bound to one storage key
pub struct GalleryStore {
    storage: Arc<dyn StateStorage>,
    key: String,
    state: GalleryState,
    is_loading: bool,
    hydrated: bool,
    dirty: bool,
}

impl GalleryStore {
    /// Create an empty, unhydrated store
    pub fn new(storage: Arc<dyn StateStorage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            state: GalleryState::new(),
            is_loading: false,
            hydrated: false,
            dirty: false,
        }
    }

    /// Wrap the store for sharing across tasks
    pub fn into_shared(self) -> SharedGallery {
        Arc::new(Mutex::new(self))
    }

    /// Load the stored blob into memory, replacing the in-memory gallery
    ///
    /// Blobs that cannot be restored are deleted and the store starts empty.
    /// The loading flag is never restored from storage.
    pub fn hydrate(&mut self) -> Result<HydrationOutcome, DomainError> {
        let outcome = match self.storage.read(&self.key)? {
            None => {
                self.state = GalleryState::new();
                HydrationOutcome::Empty
            }
            Some(raw) => match schema::decode(&raw) {
                Ok(decoded) => {
                    let outcome = HydrationOutcome::Loaded {
                        from_version: decoded.from_version,
                        repairs: decoded.report.total(),
                    };
                    self.state = decoded.state;
                    outcome
                }
                Err(reason) => {
                    warn!(
                        key = %self.key,
                        reason = reason.code(),
                        error = %reason,
                        "Discarding stored gallery"
                    );
                    self.storage.remove(&self.key)?;
                    self.state = GalleryState::new();
                    HydrationOutcome::Discarded { reason }
                }
            },
        };

        self.is_loading = false;
        self.hydrated = true;
        self.dirty = false;

        info!(
            key = %self.key,
            items = self.state.len(),
            liked = self.state.liked_ids().len(),
            outcome = ?outcome,
            "Gallery hydrated"
        );

        Ok(outcome)
    }

    /// Validate candidate URLs and prepend the survivors as new items
    ///
    /// Candidates that are not non-empty absolute URL strings are skipped.
    /// Returns the inserted items; an empty result leaves the gallery as is.
    pub fn add_items(&mut self, candidates: &[Value], prompt: &str) -> Vec<EmojiItem> {
        let batch: Vec<EmojiItem> = candidates
            .iter()
            .filter_map(ImageUrl::from_candidate)
            .map(|url| EmojiItem::new(url, prompt))
            .collect();

        let skipped = candidates.len() - batch.len();
        if skipped > 0 {
            debug!(skipped, "Skipped invalid image candidates");
        }

        if batch.is_empty() {
            return batch;
        }

        self.state.prepend_batch(batch.clone());
        self.dirty = true;

        info!(added = batch.len(), total = self.state.len(), "Items added to gallery");

        batch
    }

    /// Flip the liked state of an item; unknown IDs change nothing
    pub fn toggle_like(&mut self, id: &ItemId) -> Option<LikeStatus> {
        let status = self.state.toggle_like(id)?;
        self.dirty = true;

        info!(
            item_id = %status.id,
            liked = status.liked,
            like_count = status.like_count,
            "Like toggled"
        );

        Some(status)
    }

    #[inline]
    pub fn is_liked(&self, id: &ItemId) -> bool {
        self.state.is_liked(id)
    }

    /// Set the transient in-flight flag
    pub fn set_is_loading(&mut self, flag: bool) {
        self.is_loading = flag;
    }

    #[inline]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Items, newest batch first
    #[inline]
    pub fn items(&self) -> &[EmojiItem] {
        self.state.items()
    }

    pub fn find(&self, id: &ItemId) -> Option<&EmojiItem> {
        self.state.find(id)
    }

    pub fn state(&self) -> &GalleryState {
        &self.state
    }

    pub fn snapshot(&self) -> GallerySnapshot {
        GallerySnapshot {
            items: self.state.items().to_vec(),
            liked_ids: self.state.liked_ids().clone(),
            is_loading: self.is_loading,
        }
    }

    #[inline]
    pub fn is_hydrated(&self) -> bool {
        self.hydrated
    }

    /// Check for mutations not yet committed
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Persist the gallery if it changed since the last commit
    ///
    /// Returns whether a write happened. Fails with
    /// [`DomainError::NotHydrated`] before the first successful hydrate.
    pub fn commit(&mut self) -> Result<bool, DomainError> {
        if !self.hydrated {
            return Err(DomainError::NotHydrated);
        }
        if !self.dirty {
            return Ok(false);
        }

        let blob = schema::encode(&self.state, self.is_loading)?;
        self.storage.write(&self.key, &blob)?;
        self.dirty = false;

        debug!(key = %self.key, bytes = blob.len(), "Gallery committed");

        Ok(true)
    }
}

impl std::fmt::Debug for GalleryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GalleryStore")
            .field("key", &self.key)
            .field("items", &self.state.len())
            .field("is_loading", &self.is_loading)
            .field("hydrated", &self.hydrated)
            .field("dirty", &self.dirty)
            .finish()
    }
}
