/// Side-channel logger used by the HTTP layer. Logging never changes the
/// outcome of a request.
pub trait LoggerService: Send + Sync {
    /// Record a failure together with a message.
    fn log_error(&self, error: &(dyn std::error::Error + Send + Sync), message: &str);

    /// Record an informational event.
    fn log_info(&self, message: &str);
}
