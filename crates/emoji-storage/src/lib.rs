//! # emoji-storage
//!
//! Persistence layer for the emoji gallery.
//!
//! ## Features
//!
//! - **Blob Backends**: [`MemoryStorage`] and [`FileStorage`] implement the
//!   `StateStorage` port from `emoji-core`
//! - **Versioned Schema**: the persisted envelope plus an ordered migration
//!   table that upgrades old blobs or discards them
//! - **Normalization**: type-checked field defaults applied to every decoded
//!   blob before it becomes a `GalleryState`
//!
//! ## Example
//!
//! ```ignore
//! use emoji_storage::{schema, FileStorage};
//! use emoji_core::StateStorage;
//!
//! let storage = FileStorage::new("./data")?;
//! if let Some(raw) = storage.read("emoji-storage")? {
//!     match schema::decode(&raw) {
//!         Ok(decoded) => println!("{} items", decoded.state.len()),
//!         Err(reason) => eprintln!("discarding blob: {reason}"),
//!     }
//! }
//! ```

pub mod file;
pub mod memory;
pub mod schema;

pub use file::FileStorage;
pub use memory::MemoryStorage;

// Re-export schema types
pub use schema::{
    decode, encode, DecodedGallery, DiscardReason, Migration, MigrationKind, NormalizeReport,
    CURRENT_VERSION, MIGRATIONS,
};
