//! Generation and image-fetch ports
//!
//! These are the network boundaries. Implementations report transport
//! failures as `DomainError`; the shape of a backend reply is left to the
//! caller to validate.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::DomainError;
use crate::value_objects::ImageUrl;

/// Raw reply from the generation backend
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationReply {
    /// HTTP status code
    pub status: u16,
    /// Parsed JSON body, `None` when the body was not JSON
    pub body: Option<Value>,
}

impl GenerationReply {
    /// Create a reply from a status and optional JSON body
    pub fn new(status: u16, body: Option<Value>) -> Self {
        Self { status, body }
    }

    /// Check for a 2xx status
    #[inline]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The backend's `error` message, if it sent a non-empty one
    pub fn error_message(&self) -> Option<&str> {
        self.body
            .as_ref()?
            .get("error")?
            .as_str()
            .filter(|msg| !msg.trim().is_empty())
    }

    /// The `images` list, if present and list-shaped
    pub fn images(&self) -> Option<&[Value]> {
        self.body
            .as_ref()?
            .get("images")?
            .as_array()
            .map(Vec::as_slice)
    }
}

/// Image bytes fetched for download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedImage {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
}

// ============================================================================
// Image Generator
// ============================================================================

#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Request images for a prompt
    async fn generate(&self, prompt: &str) -> Result<GenerationReply, DomainError>;
}

// ============================================================================
// Image Fetcher
// ============================================================================

#[async_trait]
pub trait ImageFetcher: Send + Sync {
    /// Download the image behind a URL
    async fn fetch(&self, url: &ImageUrl) -> Result<FetchedImage, DomainError>;
}
