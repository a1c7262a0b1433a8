//! Type-checked defaults for a current-shape state payload

use chrono::{DateTime, Utc};
use emoji_core::{EmojiItem, GalleryState, ImageUrl, ItemId, RestoreReport};
use serde_json::{Map, Value};

/// Repairs made while normalizing a decoded payload
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeReport {
    /// Fields replaced by their default (`items`, `likedIds`, `prompt`, `createdAt`, `likeCount`)
    pub replaced_fields: usize,
    /// Items dropped for lacking a usable `id` or `url`
    pub dropped_items: usize,
    /// Liked IDs dropped for not being UUIDs
    pub dropped_liked_ids: usize,
    /// Repairs made while enforcing the gallery invariants
    pub restore: RestoreReport,
}

impl NormalizeReport {
    /// Total number of repairs
    #[must_use]
    pub fn total(&self) -> usize {
        self.replaced_fields + self.dropped_items + self.dropped_liked_ids + self.restore.total()
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.total() == 0
    }
}

/// Turn a migrated payload into a valid gallery
pub(crate) fn normalize(state: Value) -> (GalleryState, NormalizeReport) {
    let mut report = NormalizeReport::default();

    let mut obj = match state {
        Value::Object(obj) => obj,
        _ => {
            report.replaced_fields += 1;
            Map::new()
        }
    };

    let raw_items = take_array(&mut obj, "items", &mut report);
    let raw_liked = take_array(&mut obj, "likedIds", &mut report);

    let items: Vec<EmojiItem> = raw_items
        .iter()
        .filter_map(|raw| {
            let item = normalize_item(raw, &mut report);
            if item.is_none() {
                report.dropped_items += 1;
            }
            item
        })
        .collect();

    let liked: Vec<ItemId> = raw_liked
        .iter()
        .filter_map(|raw| {
            let id = raw.as_str().and_then(|s| ItemId::parse(s).ok());
            if id.is_none() {
                report.dropped_liked_ids += 1;
            }
            id
        })
        .collect();

    let (gallery, restore) = GalleryState::restore(items, liked);
    report.restore = restore;

    (gallery, report)
}

fn take_array(obj: &mut Map<String, Value>, key: &str, report: &mut NormalizeReport) -> Vec<Value> {
    match obj.remove(key) {
        Some(Value::Array(values)) => values,
        _ => {
            report.replaced_fields += 1;
            Vec::new()
        }
    }
}

fn normalize_item(raw: &Value, report: &mut NormalizeReport) -> Option<EmojiItem> {
    let obj = raw.as_object()?;

    let id = obj
        .get("id")
        .and_then(Value::as_str)
        .and_then(|s| ItemId::parse(s).ok())?;
    let url = obj.get("url").and_then(ImageUrl::from_candidate)?;

    let prompt = match obj.get("prompt").and_then(Value::as_str) {
        Some(prompt) => prompt.to_string(),
        None => {
            report.replaced_fields += 1;
            String::new()
        }
    };

    let created_at = match obj
        .get("createdAt")
        .and_then(Value::as_str)
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
    {
        Some(ts) => ts.with_timezone(&Utc),
        None => {
            report.replaced_fields += 1;
            DateTime::<Utc>::default()
        }
    };

    // Reconciled against the liked set afterwards; only the type is checked here
    let like_count = match obj
        .get("likeCount")
        .and_then(Value::as_u64)
        .and_then(|n| u32::try_from(n).ok())
    {
        Some(count) => count,
        None => {
            report.replaced_fields += 1;
            0
        }
    };

    Some(EmojiItem {
        id,
        url,
        prompt,
        like_count,
        created_at,
    })
}
