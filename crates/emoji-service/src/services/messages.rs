//! User-facing notification texts

pub const GENERATED: &str = "Emoji generated successfully!";
pub const LIKED: &str = "Emoji liked!";
pub const UNLIKED: &str = "Emoji unliked";

/// Non-2xx reply without an `error` message
pub const GENERATION_FAILED: &str = "Failed to generate emoji";
/// Transport failure or a reply body that is not JSON
pub const GENERATION_RETRY: &str = "Failed to generate emoji. Please try again.";
pub const NO_IMAGES: &str = "No emoji was generated. Please try a different prompt.";
pub const PROMPT_REQUIRED: &str = "Please enter a prompt";

pub const DOWNLOAD_FAILED: &str = "Failed to download emoji. Please try again.";
pub const NOT_FOUND: &str = "Emoji not found";
pub const UNEXPECTED: &str = "Something went wrong. Please try again.";
