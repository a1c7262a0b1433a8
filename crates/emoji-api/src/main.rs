//! Emoji API Server entry point
//!
//! Run with:
//! ```bash
//! GENERATOR_URL=http://localhost:3001/api/generate cargo run -p emoji-api
//! ```
//!
//! Configuration is loaded from environment variables or a `.env` file.

use emoji_common::{try_init_tracing, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Load configuration first so the log format can follow APP_ENV
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = try_init_tracing(&TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        app = %config.app.name,
        env = ?config.app.env,
        address = %config.api.address(),
        generator = %config.generator.url,
        storage_dir = %config.storage.dir.display(),
        "Configuration loaded"
    );

    if let Err(e) = emoji_api::run(config).await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}
