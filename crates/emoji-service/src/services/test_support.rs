//! Stub ports shared by service tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use emoji_core::{
    DomainError, FetchedImage, GenerationReply, ImageFetcher, ImageGenerator, ImageUrl,
};
use emoji_storage::MemoryStorage;
use parking_lot::Mutex;
use serde_json::Value;

use super::context::{ServiceContext, ServiceContextBuilder};
use crate::store::{GalleryStore, SharedGallery};

pub const KEY: &str = "emoji-storage";

/// Generator returning a canned reply, or a transport failure when none is set
#[derive(Default)]
pub struct StubGenerator {
    reply: Option<GenerationReply>,
    watch: Option<SharedGallery>,
    pub calls: AtomicUsize,
    pub loading_during_call: Mutex<Option<bool>>,
}

impl StubGenerator {
    pub fn replying(status: u16, body: Value) -> Self {
        Self {
            reply: Some(GenerationReply::new(status, Some(body))),
            ..Self::default()
        }
    }

    pub fn replying_non_json(status: u16) -> Self {
        Self {
            reply: Some(GenerationReply::new(status, None)),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self::default()
    }

    /// Record the gallery's loading flag at call time
    pub fn watching(mut self, gallery: SharedGallery) -> Self {
        self.watch = Some(gallery);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ImageGenerator for StubGenerator {
    async fn generate(&self, _prompt: &str) -> Result<GenerationReply, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gallery) = &self.watch {
            *self.loading_during_call.lock() = Some(gallery.lock().is_loading());
        }
        self.reply
            .clone()
            .ok_or_else(|| DomainError::GeneratorError("connection refused".to_string()))
    }
}

/// Fetcher returning canned bytes, or an upstream failure when none are set
#[derive(Default)]
pub struct StubFetcher {
    image: Option<FetchedImage>,
    pub fetched: Mutex<Vec<String>>,
}

impl StubFetcher {
    pub fn serving(bytes: &[u8], content_type: Option<&str>) -> Self {
        Self {
            image: Some(FetchedImage {
                bytes: bytes.to_vec(),
                content_type: content_type.map(String::from),
            }),
            ..Self::default()
        }
    }
}

#[async_trait]
impl ImageFetcher for StubFetcher {
    async fn fetch(&self, url: &ImageUrl) -> Result<FetchedImage, DomainError> {
        self.fetched.lock().push(url.to_string());
        self.image
            .clone()
            .ok_or_else(|| DomainError::FetchError("upstream returned 404".to_string()))
    }
}

pub fn hydrated_gallery(storage: &MemoryStorage) -> SharedGallery {
    let mut store = GalleryStore::new(Arc::new(storage.clone()), KEY);
    store.hydrate().unwrap();
    store.into_shared()
}

pub fn context(
    gallery: SharedGallery,
    generator: Arc<StubGenerator>,
    fetcher: Arc<StubFetcher>,
) -> ServiceContext {
    ServiceContextBuilder::new()
        .gallery(gallery)
        .generator(generator)
        .fetcher(fetcher)
        .build()
        .unwrap()
}
