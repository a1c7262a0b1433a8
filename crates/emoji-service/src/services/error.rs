//! Service layer error types
//!
//! Provides a unified error type for all service operations.

use emoji_common::AppError;
use emoji_core::DomainError;
use std::fmt;

use super::messages;

/// Service layer error type
#[derive(Debug)]
pub enum ServiceError {
    /// Domain rule violation
    Domain(DomainError),

    /// Application error (config, storage, etc.)
    App(AppError),

    /// Resource not found
    NotFound { resource: &'static str, id: String },

    /// Validation error
    Validation(String),

    /// Generation backend refused or failed the request
    Generation { status: Option<u16>, message: String },

    /// Generation succeeded but yielded no usable image
    NoImages,

    /// Image download failed upstream
    Download(String),

    /// Internal error
    Internal(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain(e) => write!(f, "{e}"),
            Self::App(e) => write!(f, "{e}"),
            Self::NotFound { resource, id } => write!(f, "{resource} not found: {id}"),
            Self::Validation(msg) => write!(f, "Validation error: {msg}"),
            Self::Generation {
                status: Some(status),
                message,
            } => write!(f, "Generation failed ({status}): {message}"),
            Self::Generation {
                status: None,
                message,
            } => write!(f, "Generation failed: {message}"),
            Self::NoImages => write!(f, "Generation returned no usable images"),
            Self::Download(msg) => write!(f, "Download failed: {msg}"),
            Self::Internal(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Domain(e) => Some(e),
            Self::App(e) => Some(e),
            _ => None,
        }
    }
}

impl ServiceError {
    /// Create a not found error
    pub fn not_found(resource: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource,
            id: id.into(),
        }
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a generation error
    pub fn generation(status: Option<u16>, message: impl Into<String>) -> Self {
        Self::Generation {
            status,
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// HTTP status code for a bare domain error
    pub fn status_code_for(err: &DomainError) -> u16 {
        AppError::domain_status(err)
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Domain(e) => Self::status_code_for(e),
            Self::App(e) => e.status_code(),
            Self::NotFound { .. } => 404,
            Self::Validation(_) => 400,
            Self::Generation { .. } | Self::Download(_) => 502,
            Self::NoImages => 422,
            Self::Internal(_) => 500,
        }
    }

    /// Get the error code for API responses
    pub fn error_code(&self) -> &str {
        match self {
            Self::Domain(e) => e.code(),
            Self::App(e) => e.error_code(),
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Generation { .. } => "GENERATION_FAILED",
            Self::NoImages => "NO_IMAGES",
            Self::Download(_) => "DOWNLOAD_FAILED",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Message safe to show the user
    pub fn user_message(&self) -> String {
        match self {
            Self::Generation { message, .. } => message.clone(),
            Self::NoImages => messages::NO_IMAGES.to_string(),
            Self::Download(_) => messages::DOWNLOAD_FAILED.to_string(),
            Self::Validation(msg) => msg.clone(),
            Self::NotFound { .. } => messages::NOT_FOUND.to_string(),
            _ => messages::UNEXPECTED.to_string(),
        }
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl From<AppError> for ServiceError {
    fn from(err: AppError) -> Self {
        Self::App(err)
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Domain(e) => AppError::Domain(e),
            ServiceError::App(e) => e,
            ServiceError::NotFound { resource, id } => {
                AppError::NotFound(format!("{resource} {id}"))
            }
            ServiceError::Validation(msg) => AppError::Validation(msg),
            ServiceError::Generation { message, .. } => AppError::ExternalService(message),
            ServiceError::NoImages => AppError::Unprocessable(messages::NO_IMAGES.to_string()),
            ServiceError::Download(msg) => AppError::ExternalService(msg),
            ServiceError::Internal(msg) => AppError::Internal(anyhow::anyhow!(msg)),
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
