//! Ordered migration table
//!
//! Each entry upgrades the `state` payload from version `from` to `from + 1`.
//! A [`MigrationKind::Discard`] step marks a breaking bump: blobs stored at
//! that version are dropped instead of guessed at.

use serde_json::Value;

use super::DiscardReason;

/// What a single version step does
#[derive(Debug, Clone, Copy)]
pub enum MigrationKind {
    /// Pure rewrite of the state payload
    Transform(fn(Value) -> Value),
    /// No safe merge exists; the blob is discarded
    Discard,
}

/// One step of the migration chain
#[derive(Debug, Clone, Copy)]
pub struct Migration {
    pub from: u32,
    pub kind: MigrationKind,
}

/// Steps applied by [`migrate`], in version order
pub const MIGRATIONS: &[Migration] = &[
    Migration {
        from: 0,
        kind: MigrationKind::Transform(v0_to_v1),
    },
    Migration {
        from: 1,
        kind: MigrationKind::Transform(v1_to_v2),
    },
];

/// Upgrade a state payload from `version` to `target` using [`MIGRATIONS`]
pub fn migrate(version: u32, target: u32, state: Value) -> Result<Value, DiscardReason> {
    migrate_with(MIGRATIONS, version, target, state)
}

/// Upgrade a state payload using an explicit step table
pub fn migrate_with(
    steps: &[Migration],
    version: u32,
    target: u32,
    mut state: Value,
) -> Result<Value, DiscardReason> {
    let mut current = version;
    while current < target {
        let step = steps
            .iter()
            .find(|step| step.from == current)
            .ok_or(DiscardReason::NoMigrationPath { from: current })?;

        match step.kind {
            MigrationKind::Transform(apply) => state = apply(state),
            MigrationKind::Discard => return Err(DiscardReason::BreakingChange { from: current }),
        }

        tracing::debug!(from = current, to = current + 1, "Applied gallery migration");
        current += 1;
    }
    Ok(state)
}

/// v0 kept `emojis[]` with a `likes` counter per entry
///
/// v0 had a single user, so any positive counter means that user liked the
/// item. Those ids are carried into `likedIds` so the like survives the
/// later count reconciliation.
fn v0_to_v1(mut state: Value) -> Value {
    let Some(obj) = state.as_object_mut() else {
        return state;
    };

    if !obj.contains_key("items") {
        if let Some(emojis) = obj.remove("emojis") {
            obj.insert("items".to_string(), emojis);
        }
    }

    let mut liked = Vec::new();
    if let Some(Value::Array(items)) = obj.get_mut("items") {
        for item in items.iter_mut().filter_map(Value::as_object_mut) {
            if !item.contains_key("likeCount") {
                if let Some(likes) = item.remove("likes") {
                    item.insert("likeCount".to_string(), likes);
                }
            }
            let has_likes = item
                .get("likeCount")
                .and_then(Value::as_f64)
                .is_some_and(|count| count > 0.0);
            if let (true, Some(Value::String(id))) = (has_likes, item.get("id")) {
                liked.push(Value::String(id.clone()));
            }
        }
    }

    if !obj.contains_key("likedIds") {
        obj.insert("likedIds".to_string(), Value::Array(liked));
    }

    state
}

/// v2 added the explicit liked-id set
fn v1_to_v2(mut state: Value) -> Value {
    if let Some(obj) = state.as_object_mut() {
        obj.entry("likedIds")
            .or_insert_with(|| Value::Array(Vec::new()));
    }
    state
}
