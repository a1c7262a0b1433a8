//! Ports - interfaces the domain needs from the outside world
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

mod generation;
mod storage;

pub use generation::{FetchedImage, GenerationReply, ImageFetcher, ImageGenerator};
pub use storage::{StateStorage, StorageResult};
