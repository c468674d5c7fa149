use log::{debug, info};
use std::sync::Once;

static INIT: Once = Once::new();

/// Install `env_logger` for the host, once
///
/// Run events emitted through `tracing` arrive here via its `log` feature.
/// `RUST_LOG` overrides the defaults below.
pub fn init_logger() {
    INIT.call_once(|| {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Info)
            .filter_module("auto_translate", log::LevelFilter::Debug)
            // span enter/exit records from tracing's log bridge
            .filter_module("tracing::span", log::LevelFilter::Warn)
            .parse_default_env()
            .format_timestamp_secs()
            .init();

        info!("Automatic translation logging initialized");
    });
}

/// Macro for structured logging with context
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        log::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        log::debug!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        log::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        log::error!($($arg)*)
    };
}

/// Helper for timing operations
pub struct TimedOperation {
    start: std::time::Instant,
    operation: String,
}

impl TimedOperation {
    pub fn new(operation: &str) -> Self {
        debug!("Starting: {}", operation);
        Self {
            start: std::time::Instant::now(),
            operation: operation.to_string(),
        }
    }

    pub fn finish_with_info(self, info: &str) -> u64 {
        let duration = self.start.elapsed().as_millis() as u64;
        info!(
            "Performance: {} took {}ms ({})",
            self.operation, duration, info
        );
        duration
    }
}
