//! Versioned gallery schema
//!
//! Decoding a stored blob runs three stages: split the envelope, walk the
//! migration chain up to [`CURRENT_VERSION`], then normalize every field.
//! Any stage may reject the blob with a [`DiscardReason`]; the caller is
//! expected to delete it and start from an empty gallery.

mod envelope;
mod migrations;
mod normalize;

pub use envelope::{encode, CURRENT_VERSION};
pub use migrations::{migrate, migrate_with, Migration, MigrationKind, MIGRATIONS};
pub use normalize::NormalizeReport;

use emoji_core::GalleryState;

/// Why a stored blob could not be restored
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiscardReason {
    #[error("corrupt blob: {0}")]
    Corrupt(String),

    #[error("stored version {found} is newer than supported version {current}")]
    UnsupportedVersion { found: u32, current: u32 },

    #[error("breaking schema change at version {from}")]
    BreakingChange { from: u32 },

    #[error("no migration from version {from}")]
    NoMigrationPath { from: u32 },
}

impl DiscardReason {
    /// Short machine-readable label for logs
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Corrupt(_) => "corrupt",
            Self::UnsupportedVersion { .. } => "unsupported_version",
            Self::BreakingChange { .. } => "breaking_change",
            Self::NoMigrationPath { .. } => "no_migration_path",
        }
    }
}

/// A successfully restored blob
#[derive(Debug, Clone)]
pub struct DecodedGallery {
    /// Version the blob was stored at
    pub from_version: u32,
    pub state: GalleryState,
    pub report: NormalizeReport,
}

impl DecodedGallery {
    /// Check if the blob was upgraded from an older schema
    #[must_use]
    pub fn was_migrated(&self) -> bool {
        self.from_version < CURRENT_VERSION
    }
}

/// Decode a stored blob with the built-in migration table
pub fn decode(raw: &str) -> Result<DecodedGallery, DiscardReason> {
    decode_with(MIGRATIONS, raw)
}

/// Decode a stored blob with an explicit migration table
pub fn decode_with(steps: &[Migration], raw: &str) -> Result<DecodedGallery, DiscardReason> {
    let (from_version, payload) = envelope::split_envelope(raw)?;

    if from_version > CURRENT_VERSION {
        return Err(DiscardReason::UnsupportedVersion {
            found: from_version,
            current: CURRENT_VERSION,
        });
    }

    let payload = migrate_with(steps, from_version, CURRENT_VERSION, payload)?;
    let (state, report) = normalize::normalize(payload);

    if !report.is_clean() {
        tracing::warn!(
            from_version,
            replaced_fields = report.replaced_fields,
            dropped_items = report.dropped_items,
            dropped_liked_ids = report.dropped_liked_ids,
            duplicate_items = report.restore.duplicate_items,
            orphaned_likes = report.restore.orphaned_likes,
            adjusted_counts = report.restore.adjusted_counts,
            "Repaired stored gallery"
        );
    }

    Ok(DecodedGallery {
        from_version,
        state,
        report,
    })
}
