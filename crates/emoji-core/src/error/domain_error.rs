//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::ItemId;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Item not found: {0}")]
    ItemNotFound(ItemId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid item id: {0}")]
    InvalidItemId(String),

    #[error("Invalid image url: {0}")]
    InvalidImageUrl(String),

    // =========================================================================
    // Lifecycle Errors
    // =========================================================================
    #[error("Gallery has not been hydrated from storage yet")]
    NotHydrated,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Generator error: {0}")]
    GeneratorError(String),

    #[error("Image fetch error: {0}")]
    FetchError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::ItemNotFound(_) => "UNKNOWN_ITEM",

            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidItemId(_) => "INVALID_ITEM_ID",
            Self::InvalidImageUrl(_) => "INVALID_IMAGE_URL",

            Self::NotHydrated => "NOT_HYDRATED",

            Self::StorageError(_) => "STORAGE_ERROR",
            Self::SerializationError(_) => "SERIALIZATION_ERROR",
            Self::GeneratorError(_) => "GENERATOR_ERROR",
            Self::FetchError(_) => "FETCH_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ItemNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::InvalidItemId(_) | Self::InvalidImageUrl(_)
        )
    }

    /// Check if this error came from an external collaborator (storage, network)
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            Self::StorageError(_) | Self::GeneratorError(_) | Self::FetchError(_)
        )
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}
