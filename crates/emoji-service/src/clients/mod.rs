//! Network adapters for the generation and image-fetch ports

mod http;

pub use http::HttpImageClient;
