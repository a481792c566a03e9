//! Error types for the log module.

use thiserror::Error;

/// Result type for log operations
pub type LogResult<T> = Result<T, LogError>;

/// Errors produced by the log module
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LogError {
    /// Input did not match any canonical level name
    #[error("invalid log level [{0}]")]
    InvalidLevel(String),
}
