//! Persisted envelope: `{ "version": N, "state": { ... } }`

use std::collections::BTreeSet;

use emoji_core::{DomainError, EmojiItem, GalleryState, ItemId};
use serde::Serialize;
use serde_json::{Map, Value};

use super::DiscardReason;

/// Schema version written by this build
pub const CURRENT_VERSION: u32 = 2;

#[derive(Serialize)]
struct Envelope<'a> {
    version: u32,
    state: PersistedState<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PersistedState<'a> {
    items: &'a [EmojiItem],
    liked_ids: &'a BTreeSet<ItemId>,
    is_loading: bool,
}

/// Serialize a gallery as a current-version blob
pub fn encode(state: &GalleryState, is_loading: bool) -> Result<String, DomainError> {
    let envelope = Envelope {
        version: CURRENT_VERSION,
        state: PersistedState {
            items: state.items(),
            liked_ids: state.liked_ids(),
            is_loading,
        },
    };
    Ok(serde_json::to_string(&envelope)?)
}

/// Parse a raw blob into its stored version and `state` payload
///
/// A missing `version` is read as 0. A missing `state` becomes an empty
/// object and is left for normalization to fill in.
pub(crate) fn split_envelope(raw: &str) -> Result<(u32, Value), DiscardReason> {
    let parsed: Value = serde_json::from_str(raw)
        .map_err(|err| DiscardReason::Corrupt(format!("not JSON: {err}")))?;

    let Value::Object(mut root) = parsed else {
        return Err(DiscardReason::Corrupt("envelope is not an object".to_string()));
    };

    let version = match root.get("version") {
        None | Some(Value::Null) => 0,
        Some(raw_version) => raw_version
            .as_u64()
            .and_then(|v| u32::try_from(v).ok())
            .ok_or_else(|| DiscardReason::Corrupt(format!("invalid version: {raw_version}")))?,
    };

    let state = root
        .remove("state")
        .unwrap_or_else(|| Value::Object(Map::new()));

    Ok((version, state))
}
