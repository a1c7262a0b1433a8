//! Service context - dependency container for services
//!
//! Holds the shared gallery store and the network ports used by services.

use std::sync::Arc;

use emoji_core::{ImageFetcher, ImageGenerator};

use crate::store::SharedGallery;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// This is the dependency container that gets passed to all services.
/// It provides access to:
/// - The hydrated gallery store
/// - The generation backend
/// - The image fetcher used for downloads
#[derive(Clone)]
pub struct ServiceContext {
    gallery: SharedGallery,
    generator: Arc<dyn ImageGenerator>,
    fetcher: Arc<dyn ImageFetcher>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        gallery: SharedGallery,
        generator: Arc<dyn ImageGenerator>,
        fetcher: Arc<dyn ImageFetcher>,
    ) -> Self {
        Self {
            gallery,
            generator,
            fetcher,
        }
    }

    /// Get the shared gallery store
    pub fn gallery(&self) -> &SharedGallery {
        &self.gallery
    }

    /// Get the generation backend
    pub fn generator(&self) -> &dyn ImageGenerator {
        self.generator.as_ref()
    }

    /// Get the image fetcher
    pub fn fetcher(&self) -> &dyn ImageFetcher {
        self.fetcher.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut out = f.debug_struct("ServiceContext");
        // Never block: the caller may be holding the gallery guard
        match self.gallery.try_lock() {
            Some(store) => out.field("gallery", &*store),
            None => out.field("gallery", &"<locked>"),
        };
        out.field("generator", &"ImageGenerator")
            .field("fetcher", &"ImageFetcher")
            .finish()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    gallery: Option<SharedGallery>,
    generator: Option<Arc<dyn ImageGenerator>>,
    fetcher: Option<Arc<dyn ImageFetcher>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gallery(mut self, gallery: SharedGallery) -> Self {
        self.gallery = Some(gallery);
        self
    }

    pub fn generator(mut self, generator: Arc<dyn ImageGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    pub fn fetcher(mut self, fetcher: Arc<dyn ImageFetcher>) -> Self {
        self.fetcher = Some(fetcher);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.gallery
                .ok_or_else(|| ServiceError::validation("gallery is required"))?,
            self.generator
                .ok_or_else(|| ServiceError::validation("generator is required"))?,
            self.fetcher
                .ok_or_else(|| ServiceError::validation("fetcher is required"))?,
        ))
    }
}
