//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use validator::Validate;

/// Generate emojis for a prompt
///
/// Whitespace-only prompts pass validation here and are rejected by the
/// generation service after trimming.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateRequest {
    #[validate(length(min = 1, max = 500, message = "Prompt must be 1-500 characters"))]
    pub prompt: String,
}
