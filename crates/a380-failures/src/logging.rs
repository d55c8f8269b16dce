//! Logging setup for a380-failures.
//!
//! Registry construction reports its results through `tracing`; the binary
//! installs a `tracing-subscriber` formatter controlled by `-v`/`-q` and
//! `RUST_LOG`.

use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// How much the binary logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Errors only.
    Quiet,
    /// Info and above.
    #[default]
    Normal,
    /// Debug and above; shows registry construction details.
    Verbose,
    /// Everything.
    Trace,
}

impl Verbosity {
    /// The most detailed level emitted at this verbosity.
    #[must_use]
    pub fn to_level_filter(&self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::INFO,
            Self::Verbose => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    fn directive(self) -> String {
        format!("{}={}", env!("CARGO_CRATE_NAME"), self.to_level_filter())
    }
}

/// Install the global `tracing` subscriber.
///
/// Logs go to stderr so that catalog output on stdout stays clean. A
/// `RUST_LOG` value overrides `verbosity`. Calling this more than once is
/// harmless; only the first call installs anything.
///
/// # Examples
///
/// ```no_run
/// use a380_failures::{init_logging, logging::Verbosity};
///
/// init_logging(Verbosity::Verbose);
/// ```
pub fn init_logging(verbosity: Verbosity) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.directive()));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time(),
    );

    let _ = subscriber.try_init();
}

/// Route crate logs at debug level into the test harness output.
#[cfg(test)]
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(Verbosity::Verbose.directive())
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_to_level() {
        assert_eq!(Verbosity::Quiet.to_level_filter(), Level::ERROR);
        assert_eq!(Verbosity::Normal.to_level_filter(), Level::INFO);
        assert_eq!(Verbosity::Verbose.to_level_filter(), Level::DEBUG);
        assert_eq!(Verbosity::Trace.to_level_filter(), Level::TRACE);
    }

    #[test]
    fn test_directive_names_this_crate() {
        assert_eq!(Verbosity::Verbose.directive(), "a380_failures=DEBUG");
        assert_eq!(Verbosity::Quiet.directive(), "a380_failures=ERROR");
    }

    #[test]
    fn test_verbosity_default() {
        assert_eq!(Verbosity::default(), Verbosity::Normal);
    }

    #[test]
    fn test_init_logging_is_idempotent() {
        // Only the first call installs a subscriber; later calls are no-ops.
        init_logging(Verbosity::Quiet);
        init_logging(Verbosity::Trace);
    }

    #[test]
    fn test_registry_build_with_test_logging() {
        init_test_logging();
        assert!(crate::a380::try_registry().is_ok());
    }
}
