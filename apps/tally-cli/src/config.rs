//! CLI configuration module.
//!
//! The only setting is the log filter, read from `RUST_LOG` with a quiet
//! default. Pricing is fixed: the binary always uses
//! `PricingPolicy::default()`, and no other variable is consulted.

use std::env;

use tracing_subscriber::EnvFilter;

/// Variable holding the tracing filter directives.
pub const LOG_FILTER_VAR: &str = EnvFilter::DEFAULT_ENV;

/// Filter used when `RUST_LOG` is unset or unparsable. Keeps stderr quiet
/// on a normal run.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Raw `RUST_LOG` directives.
    pub log_filter: String,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// `load` passes the process environment; tests pass a closure over a
    /// fixed table.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_filter = lookup(LOG_FILTER_VAR)
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        AppConfig { log_filter }
    }

    /// Builds the tracing filter, falling back to the default on bad directives.
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.log_filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}
