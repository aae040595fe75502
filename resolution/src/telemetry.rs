//! Console logging setup.
//!
//! [`Telemetry`] installs a `tracing` subscriber writing to stderr so that
//! command output on stdout stays machine-readable.

use std::env;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Log level used when neither `RUST_LOG` nor an explicit level is given.
const DEFAULT_LOG_LEVEL: &str = "info";

/// Logging configuration builder.
#[derive(Debug, Default)]
pub struct Telemetry {
    log_level: Option<String>,
}

impl Telemetry {
    /// Creates a new, empty [`Telemetry`] instance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the log level filter used when `RUST_LOG` is not set.
    ///
    /// Accepts any valid [`EnvFilter`] directive string (e.g. `"debug"`,
    /// `"resolution=debug"`).
    #[must_use]
    pub fn with_log_level(mut self, level: Option<impl Into<String>>) -> Self {
        self.log_level = level.map(Into::into);
        self
    }

    /// Resolves the filter directive: `RUST_LOG`, then the configured level, then `info`.
    fn directive(&self) -> String {
        env::var(EnvFilter::DEFAULT_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .or_else(|| self.log_level.clone())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_owned())
    }

    /// Installs the global subscriber. Later calls are ignored.
    pub fn register(self) {
        let filter = EnvFilter::try_new(self.directive())
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false),
            )
            .try_init();
    }
}
