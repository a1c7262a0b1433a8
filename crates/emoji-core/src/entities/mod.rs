//! Domain entities - core business objects

mod emoji_item;
mod gallery;

pub use emoji_item::EmojiItem;
pub use gallery::{GalleryState, LikeStatus, RestoreReport};
