//! Value objects - immutable types identified by their value

mod image_url;
mod item_id;

pub use image_url::{ImageUrl, ImageUrlError};
pub use item_id::{ItemId, ItemIdParseError};
