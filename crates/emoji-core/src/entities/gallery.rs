//! Gallery aggregate - ordered items plus the liked-id set
//!
//! Invariants held by every `GalleryState`:
//! - item IDs are unique
//! - every liked ID refers to an item in `items`
//! - `like_count` of an item is 1 when its ID is liked and 0 otherwise
//! - `items` is newest batch first; order within a batch is preserved

use std::collections::{BTreeSet, HashSet};

use super::emoji_item::EmojiItem;
use crate::value_objects::ItemId;

/// Persisted gallery aggregate
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryState {
    items: Vec<EmojiItem>,
    liked_ids: BTreeSet<ItemId>,
}

/// Outcome of an applied like toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeStatus {
    pub id: ItemId,
    pub liked: bool,
    pub like_count: u32,
}

/// Repairs applied while restoring a gallery from untrusted parts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RestoreReport {
    /// Items dropped because an earlier item had the same ID
    pub duplicate_items: usize,
    /// Liked IDs dropped because no item carries them
    pub orphaned_likes: usize,
    /// Items whose like count disagreed with the liked set
    pub adjusted_counts: usize,
}

impl RestoreReport {
    /// Total number of repairs
    #[must_use]
    pub fn total(&self) -> usize {
        self.duplicate_items + self.orphaned_likes + self.adjusted_counts
    }

    /// Check if nothing had to be repaired
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.total() == 0
    }
}

impl GalleryState {
    /// Create an empty gallery
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a gallery from parts read out of storage
    ///
    /// Duplicate IDs keep their first occurrence, liked IDs without an item
    /// are dropped, and like counts are re-derived from the liked set.
    pub fn restore(
        items: Vec<EmojiItem>,
        liked_ids: impl IntoIterator<Item = ItemId>,
    ) -> (Self, RestoreReport) {
        let mut report = RestoreReport::default();

        let mut seen = HashSet::with_capacity(items.len());
        let mut unique = Vec::with_capacity(items.len());
        for item in items {
            if seen.insert(item.id) {
                unique.push(item);
            } else {
                report.duplicate_items += 1;
            }
        }

        let mut liked = BTreeSet::new();
        for id in liked_ids {
            if seen.contains(&id) {
                liked.insert(id);
            } else {
                report.orphaned_likes += 1;
            }
        }

        for item in &mut unique {
            let expected = u32::from(liked.contains(&item.id));
            if item.like_count != expected {
                item.like_count = expected;
                report.adjusted_counts += 1;
            }
        }

        (
            Self {
                items: unique,
                liked_ids: liked,
            },
            report,
        )
    }

    /// Items, newest batch first
    #[inline]
    pub fn items(&self) -> &[EmojiItem] {
        &self.items
    }

    /// IDs currently marked liked
    #[inline]
    pub fn liked_ids(&self) -> &BTreeSet<ItemId> {
        &self.liked_ids
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Find an item by ID
    pub fn find(&self, id: &ItemId) -> Option<&EmojiItem> {
        self.items.iter().find(|item| item.id == *id)
    }

    /// Check if an item with this ID exists
    pub fn contains(&self, id: &ItemId) -> bool {
        self.find(id).is_some()
    }

    /// Check if an ID is in the liked set
    #[inline]
    pub fn is_liked(&self, id: &ItemId) -> bool {
        self.liked_ids.contains(id)
    }

    /// Put a batch in front of the existing items, keeping the batch order
    pub fn prepend_batch(&mut self, batch: Vec<EmojiItem>) {
        if batch.is_empty() {
            return;
        }
        self.items.splice(0..0, batch);
    }

    /// Flip the liked state of an item
    ///
    /// Returns `None` (and changes nothing) if no item has this ID.
    pub fn toggle_like(&mut self, id: &ItemId) -> Option<LikeStatus> {
        let item = self.items.iter_mut().find(|item| item.id == *id)?;

        let liked = if self.liked_ids.remove(id) {
            item.like_count = item.like_count.saturating_sub(1);
            false
        } else {
            self.liked_ids.insert(*id);
            item.like_count = item.like_count.saturating_add(1);
            true
        };

        Some(LikeStatus {
            id: *id,
            liked,
            like_count: item.like_count,
        })
    }
}
