//! Diagnostic logging for the `memberscan` binary.
//!
//! Logs go to stderr so stdout carries nothing but the check results.

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (`EnvFilter` syntax).
pub const LOG_ENV_VAR: &str = "MEMBERSCAN_LOG";

/// Filter used when [`LOG_ENV_VAR`] is unset or unparsable.
pub const DEFAULT_FILTER: &str = "warn";

/// Build the log filter from the environment, falling back to [`DEFAULT_FILTER`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global stderr subscriber.
pub fn setup_logger() -> Result<(), tracing_subscriber::util::TryInitError> {
    use tracing_subscriber::prelude::*;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(true),
        )
        .with(env_filter())
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_parses() {
        let filter = EnvFilter::try_new(DEFAULT_FILTER).unwrap();
        assert_eq!(filter.to_string(), "warn");
    }
}
