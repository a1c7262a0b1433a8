//! # emoji-service
//!
//! Application layer containing the gallery store, services, HTTP clients, and DTOs.

pub mod clients;
pub mod dto;
pub mod services;
pub mod store;

pub use clients::HttpImageClient;
pub use services::{
    DownloadService, EmojiDownload, GalleryService, GenerationService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult,
};
pub use store::{GallerySnapshot, GalleryStore, HydrationOutcome, SharedGallery};
