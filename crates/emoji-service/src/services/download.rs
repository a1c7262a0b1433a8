//! Download service
//!
//! Fetches the image behind a gallery item so it can be saved locally.

use emoji_core::ItemId;
use tracing::{info, instrument, warn};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// File name offered to the browser
pub const DOWNLOAD_FILENAME: &str = "emoji.png";

const DEFAULT_CONTENT_TYPE: &str = "image/png";

/// Image ready to be served as an attachment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiDownload {
    pub bytes: Vec<u8>,
    pub content_type: String,
    pub filename: &'static str,
}

/// Download service
pub struct DownloadService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> DownloadService<'a> {
    /// Create a new DownloadService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Fetch the image of a gallery item
    #[instrument(skip(self))]
    pub async fn download(&self, raw_id: &str) -> ServiceResult<EmojiDownload> {
        let id = ItemId::parse(raw_id).map_err(|_| ServiceError::not_found("Emoji", raw_id))?;

        let url = self
            .ctx
            .gallery()
            .lock()
            .find(&id)
            .map(|item| item.url.clone())
            .ok_or_else(|| ServiceError::not_found("Emoji", raw_id))?;

        let image = self.ctx.fetcher().fetch(&url).await.map_err(|err| {
            warn!(item_id = %id, url = %url, error = %err, "Image download failed");
            ServiceError::Download(err.to_string())
        })?;

        info!(item_id = %id, bytes = image.bytes.len(), "Emoji downloaded");

        Ok(EmojiDownload {
            bytes: image.bytes,
            content_type: image
                .content_type
                .filter(|ct| !ct.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string()),
            filename: DOWNLOAD_FILENAME,
        })
    }
}
