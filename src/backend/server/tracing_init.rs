//! Tracing/logging initialization.
//!
//! `RUST_LOG` overrides the default filter; `LOG_FORMAT=json` switches to
//! structured JSON lines.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::backend::server::config::LogFormat;

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "snake_arena=info,tower_http=info";

/// Install the global tracing subscriber
///
/// Fails if a subscriber is already installed.
pub fn init_tracing(
    default_filter: &str,
    format: LogFormat,
) -> Result<(), tracing_subscriber::util::TryInitError> {
    let env_filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.into()),
    );

    match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .try_init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .try_init(),
    }
}
