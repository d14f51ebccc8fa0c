//! Domain-specific error types for the Barrage benchmark harness
//!
//! Per-request failures are recorded as data on `RequestOutcome` and never
//! reach this type. Everything here is fatal for a run.

use thiserror::Error;

/// Main error type for the Barrage application
#[derive(Error, Debug)]
pub enum BarrageError {
    /// Configuration-related errors (CLI parsing, validation, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport setup errors (client construction, TLS, headers)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Batch execution errors (lost outcomes, panicked tasks)
    #[error("Benchmark execution error: {0}")]
    Execution(String),

    /// URL parsing errors
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// JSON serialization errors
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Filesystem errors while writing the report artifact
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type using BarrageError
pub type Result<T> = std::result::Result<T, BarrageError>;

/// Helper trait for adding context to errors
pub trait ErrorContext<T> {
    fn with_config_context(self, msg: &str) -> Result<T>;
    fn with_transport_context(self, msg: &str) -> Result<T>;
    fn with_execution_context(self, msg: &str) -> Result<T>;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: std::fmt::Display,
{
    fn with_config_context(self, msg: &str) -> Result<T> {
        self.map_err(|e| BarrageError::Config(format!("{}: {}", msg, e)))
    }

    fn with_transport_context(self, msg: &str) -> Result<T> {
        self.map_err(|e| BarrageError::Transport(format!("{}: {}", msg, e)))
    }

    fn with_execution_context(self, msg: &str) -> Result<T> {
        self.map_err(|e| BarrageError::Execution(format!("{}: {}", msg, e)))
    }
}

// Convenience constructors
impl BarrageError {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        BarrageError::Config(msg.into())
    }

    pub fn execution<S: Into<String>>(msg: S) -> Self {
        BarrageError::Execution(msg.into())
    }
}

/// Write a fatal error where the user will see it.
///
/// Used before logging is initialised, so it cannot rely on `tracing`.
pub fn report_failure<W: std::io::Write>(out: &mut W, error: &BarrageError) {
    let _ = writeln!(out, "Error: {}", error);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_context_wraps_message() {
        let raw: std::result::Result<(), &str> = Err("boom");
        let err = raw.with_transport_context("building client").unwrap_err();
        assert!(matches!(err, BarrageError::Transport(_)));
        assert_eq!(
            err.to_string(),
            "Transport error: building client: boom"
        );
    }

    #[test]
    fn test_execution_context_wraps_message() {
        let raw: std::result::Result<(), &str> = Err("task panicked");
        let err = raw.with_execution_context("Request task failed").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Benchmark execution error: Request task failed: task panicked"
        );
    }

    #[test]
    fn test_report_failure_prints_validation_error() {
        let mut config = crate::config::Config::lightweight("http://localhost:8080".to_string());
        config.batch.requests = 0;
        let err = crate::config::validation::validate(&config).unwrap_err();

        let mut out = Vec::new();
        report_failure(&mut out, &err);

        let printed = String::from_utf8(out).unwrap();
        assert_eq!(
            printed,
            "Error: Configuration error: Number of requests must be greater than 0\n"
        );
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: BarrageError = io.into();
        assert!(matches!(err, BarrageError::Io(_)));
    }
}
