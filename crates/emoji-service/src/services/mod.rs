//! Business logic services
//!
//! This module contains the service layer implementations that orchestrate
//! the gallery store and the generation and download ports.

pub mod context;
pub mod download;
pub mod error;
pub mod gallery;
pub mod generation;
pub mod messages;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export all services for convenience
pub use context::{ServiceContext, ServiceContextBuilder};
pub use download::{DownloadService, EmojiDownload, DOWNLOAD_FILENAME};
pub use error::{ServiceError, ServiceResult};
pub use gallery::GalleryService;
pub use generation::GenerationService;
