//! Tracing setup: structured logging and named event helpers.

pub mod events;

use semgov_core::config::ObservabilityConfig;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV_VAR: &str = "SEMGOV_LOG";

/// Filter directive in effect: a non-blank `SEMGOV_LOG` wins over the
/// configured level.
pub fn filter_directive(config: &ObservabilityConfig) -> String {
    std::env::var(LOG_ENV_VAR)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| config.log_level.clone())
}

/// Install the global subscriber with `filter`, JSON or compact, on stderr
/// so stdout stays free for results.
///
/// Returns `false` when a global subscriber is already installed.
pub fn init_tracing_with_filter(filter: &str, json: bool) -> bool {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(true)
        .with_writer(std::io::stderr);

    if json {
        builder.json().try_init().is_ok()
    } else {
        builder.compact().try_init().is_ok()
    }
}

/// Initialize tracing from config.
pub fn init_from_config(config: &ObservabilityConfig) -> bool {
    init_tracing_with_filter(&filter_directive(config), config.json_logs)
}
