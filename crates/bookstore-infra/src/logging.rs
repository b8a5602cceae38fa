//! Logger port backed by `tracing`.

use bookstore_core::ports::LoggerService;

/// Forwards log calls to the global `tracing` subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLoggerService;

impl LoggerService for TracingLoggerService {
    fn log_error(&self, error: &(dyn std::error::Error + Send + Sync), message: &str) {
        tracing::error!(error = %error, "{}", message);
    }

    fn log_info(&self, message: &str) {
        tracing::info!("{}", message);
    }
}
