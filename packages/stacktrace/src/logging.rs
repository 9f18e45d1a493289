//! Logging integration
//!
//! Traces are reported through the standard `log` facade; `env_logger` is
//! wired up for binaries and tests that do not install their own logger.

use crate::render;
use log::{error, info, warn};
use std::error::Error;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Logging entry points for traced errors
pub struct TraceLogger;

impl TraceLogger {
    /// Initialize logging system (should be called once at application startup)
    ///
    /// Configure logging levels via `RUST_LOG` environment variable:
    /// - `RUST_LOG=debug` - Include capture degradations and toggle flips
    /// - `RUST_LOG=error` - Only reported traces
    /// - `RUST_LOG=cryypt_stacktrace=debug` - Module-specific levels
    pub fn init() {
        INIT_LOGGER.call_once(|| {
            env_logger::Builder::from_default_env()
                .format_timestamp_micros()
                .init();

            info!("Structured logging initialized");
        });
    }

    /// Initialize logging for test environments
    ///
    /// Safe to call from every test; later calls are ignored.
    pub fn init_test() {
        let _ = env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init();
    }

    /// Log the full rendered trace of `err` at error level
    pub fn log_error_trace(err: &(dyn Error + 'static)) {
        error!("{}", render::sprint(err));
    }

    /// Log the rendered trace of `err` at warn level, latest call site first
    pub fn log_warning_trace(err: &(dyn Error + 'static)) {
        warn!("{}", render::sprint_reversed(err));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_traces() {
        TraceLogger::init_test();

        // These should not panic and should produce log output
        let err = crate::new("log me");
        TraceLogger::log_error_trace(&err);
        TraceLogger::log_warning_trace(&err);

        let plain = std::io::Error::new(std::io::ErrorKind::Other, "plain");
        TraceLogger::log_error_trace(&plain);
    }
}
