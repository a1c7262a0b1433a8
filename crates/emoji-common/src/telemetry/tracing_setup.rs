//! Log subscriber setup
//!
//! Development gets readable multi-line output with span timings; production
//! writes one JSON object per event so logs can be shipped as-is.

use tracing::{Level, Subscriber};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::config::Environment;

/// Noisy dependencies held at a fixed level unless `RUST_LOG` says otherwise
const DEPENDENCY_DIRECTIVES: &[&str] = &["hyper=warn", "reqwest=warn", "tower_http=info"];

/// Output encoding of log events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable, multi-line
    Pretty,
    /// One JSON object per line
    Json,
}

/// Subscriber options
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// Level for the workspace's own crates
    pub level: Level,
    pub format: LogFormat,
    /// Log span open/close with durations
    pub span_timings: bool,
    /// Include source file and line
    pub source_location: bool,
}

impl TracingConfig {
    /// Debug-level pretty output with span timings
    #[must_use]
    pub fn development() -> Self {
        Self {
            level: Level::DEBUG,
            format: LogFormat::Pretty,
            span_timings: true,
            source_location: true,
        }
    }

    /// Info-level JSON output
    #[must_use]
    pub fn production() -> Self {
        Self {
            level: Level::INFO,
            format: LogFormat::Json,
            span_timings: false,
            source_location: false,
        }
    }

    /// Preset for a deployment environment; staging logs like production
    /// but stays readable
    #[must_use]
    pub fn for_environment(env: Environment) -> Self {
        match env {
            Environment::Development => Self::development(),
            Environment::Staging => Self {
                format: LogFormat::Pretty,
                ..Self::production()
            },
            Environment::Production => Self::production(),
        }
    }

    /// Filter used when `RUST_LOG` is unset
    pub fn default_directives(&self) -> String {
        let level = self.level.as_str().to_ascii_lowercase();
        std::iter::once(level.as_str())
            .chain(DEPENDENCY_DIRECTIVES.iter().copied())
            .collect::<Vec<_>>()
            .join(",")
    }

    fn build_subscriber(&self) -> impl Subscriber + Send + Sync + 'static {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.default_directives()));

        let spans = if self.span_timings {
            FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };

        let json = (self.format == LogFormat::Json).then(|| {
            fmt::layer()
                .json()
                .with_current_span(true)
                .with_file(self.source_location)
                .with_line_number(self.source_location)
                .with_span_events(spans.clone())
        });
        let pretty = (self.format == LogFormat::Pretty).then(|| {
            fmt::layer()
                .pretty()
                .with_file(self.source_location)
                .with_line_number(self.source_location)
                .with_span_events(spans)
        });

        tracing_subscriber::registry()
            .with(filter)
            .with(json)
            .with(pretty)
    }
}

/// Install the global subscriber
///
/// Fails instead of panicking when a subscriber is already set, which
/// happens when tests share a process.
pub fn try_init_tracing(config: &TracingConfig) -> Result<(), TracingError> {
    config
        .build_subscriber()
        .try_init()
        .map_err(|_| TracingError::AlreadyInitialized)
}

/// Tracing initialization errors
#[derive(Debug, thiserror::Error)]
pub enum TracingError {
    #[error("Tracing subscriber already initialized")]
    AlreadyInitialized,
}
