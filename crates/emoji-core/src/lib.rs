//! # emoji-core
//!
//! Domain layer containing the gallery entities, value objects, ports, and domain errors.
//! This crate has zero dependencies on infrastructure (storage backends, HTTP, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{EmojiItem, GalleryState, LikeStatus, RestoreReport};
pub use error::DomainError;
pub use traits::{
    FetchedImage, GenerationReply, ImageFetcher, ImageGenerator, StateStorage, StorageResult,
};
pub use value_objects::{ImageUrl, ImageUrlError, ItemId, ItemIdParseError};
