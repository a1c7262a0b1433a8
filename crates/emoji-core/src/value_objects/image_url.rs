//! Image URL - a validated absolute URL pointing at a generated image

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Validated absolute image URL
///
/// The original string is kept verbatim; validation only decides whether it
/// is accepted. A value is accepted when its trimmed form is non-empty and it
/// parses as an absolute URL (scheme required).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ImageUrl(String);

impl ImageUrl {
    /// Validate and wrap a URL string
    pub fn parse(raw: &str) -> Result<Self, ImageUrlError> {
        if raw.trim().is_empty() {
            return Err(ImageUrlError::Empty);
        }
        url::Url::parse(raw).map_err(|e| ImageUrlError::Invalid(e.to_string()))?;
        Ok(Self(raw.to_string()))
    }

    /// Accept an untyped candidate (e.g. one entry of a backend response)
    ///
    /// Anything that is not a JSON string holding a valid URL yields `None`.
    pub fn from_candidate(value: &Value) -> Option<Self> {
        value.as_str().and_then(|s| Self::parse(s).ok())
    }

    /// Borrow the URL string
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Error when validating an image URL
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImageUrlError {
    #[error("image url is empty")]
    Empty,

    #[error("invalid image url: {0}")]
    Invalid(String),
}

impl fmt::Display for ImageUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ImageUrl {
    type Error = ImageUrlError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ImageUrl> for String {
    fn from(url: ImageUrl) -> Self {
        url.0
    }
}

impl AsRef<str> for ImageUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
