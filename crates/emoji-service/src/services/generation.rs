//! Generation service
//!
//! Sends a prompt to the generation backend and feeds the returned image
//! URLs into the gallery. The gallery's loading flag is raised for the
//! duration of the request and lowered on every exit path.

use tracing::{info, instrument, warn};

use crate::dto::{EmojiResponse, GenerateResponse};
use crate::store::SharedGallery;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::gallery::commit_or_warn;
use super::messages;

/// Lowers the loading flag when dropped
struct LoadingGuard {
    gallery: SharedGallery,
}

impl LoadingGuard {
    fn engage(gallery: &SharedGallery) -> Self {
        gallery.lock().set_is_loading(true);
        Self {
            gallery: gallery.clone(),
        }
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.gallery.lock().set_is_loading(false);
    }
}

/// Generation service
pub struct GenerationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> GenerationService<'a> {
    /// Create a new GenerationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Generate emojis for a prompt and add them to the gallery
    #[instrument(skip(self))]
    pub async fn generate(&self, prompt: &str) -> ServiceResult<GenerateResponse> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(ServiceError::validation(messages::PROMPT_REQUIRED));
        }

        let _loading = LoadingGuard::engage(self.ctx.gallery());

        let reply = match self.ctx.generator().generate(prompt).await {
            Ok(reply) => reply,
            Err(err) => {
                warn!(error = %err, "Generation request failed");
                return Err(ServiceError::generation(None, messages::GENERATION_RETRY));
            }
        };

        if !reply.is_success() {
            let message = reply
                .error_message()
                .unwrap_or(messages::GENERATION_FAILED)
                .to_string();
            warn!(status = reply.status, message = %message, "Generation backend returned an error");
            return Err(ServiceError::generation(Some(reply.status), message));
        }

        if reply.body.is_none() {
            warn!(status = reply.status, "Generation backend returned a non-JSON body");
            return Err(ServiceError::generation(
                Some(reply.status),
                messages::GENERATION_RETRY,
            ));
        }

        let images = match reply.images() {
            Some(images) if !images.is_empty() => images,
            _ => {
                warn!("Generation backend returned no images");
                return Err(ServiceError::NoImages);
            }
        };

        let inserted = {
            let mut store = self.ctx.gallery().lock();
            let inserted = store.add_items(images, prompt);
            if !inserted.is_empty() {
                commit_or_warn(&mut store, "generate");
            }
            inserted
        };

        if inserted.is_empty() {
            warn!(candidates = images.len(), "No generated image had a valid URL");
            return Err(ServiceError::NoImages);
        }

        info!(count = inserted.len(), "Emoji generated");

        Ok(GenerateResponse {
            items: inserted.iter().map(EmojiResponse::unliked).collect(),
            message: messages::GENERATED.to_string(),
        })
    }
}
