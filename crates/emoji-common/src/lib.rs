//! # emoji-common
//!
//! Configuration, the application error type, and log setup shared by the
//! emoji crates.

pub mod config;
pub mod error;
pub mod telemetry;

pub use config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, Environment, GeneratorConfig, ServerConfig,
    StorageConfig,
};
pub use error::{AppError, AppResult, ErrorResponse};
pub use telemetry::{try_init_tracing, LogFormat, TracingConfig, TracingError};
