//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting gallery types to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::GenerateRequest;

pub use responses::{
    EmojiResponse, GalleryResponse, GenerateResponse, HealthResponse, LikeResponse, LikedResponse,
};
