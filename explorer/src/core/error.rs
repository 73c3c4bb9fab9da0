//! # Common Error Types
//!
//! Consolidated error handling for the explorer application.
//!
//! Errors are categorized by their source:
//!
//! - **Api**: Backend API communication errors (network, HTTP, JSON parsing)
//! - **Wallet**: Mock wallet operations (connection, balance queries)
//! - **State**: Application state management errors
//! - **Validation**: Input validation errors (invalid format, out of range)
//!
//! No error from this module is ever shown raw to the user: parse and
//! conversion failures degrade to neutral display values, and upstream
//! failures are logged and rendered as "token unavailable" states.

use thiserror::Error;

/// Application-wide error type covering all error scenarios in the explorer.
///
/// Each variant carries a descriptive message; `thiserror` provides the
/// `Display` and `Error` implementations.
#[derive(Debug, Clone, Error)]
pub enum AppError {
    /// Backend API communication error: network failures, non-success HTTP
    /// statuses, malformed JSON responses.
    #[error("API error: {0}")]
    Api(String),

    /// Mock wallet operation error: connection or balance query failures.
    #[error("Wallet error: {0}")]
    Wallet(String),

    /// Application state management error: invalid transitions, missing
    /// prerequisites.
    #[error("State error: {0}")]
    State(String),

    /// Input validation error: malformed amounts, precision overflow.
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<String> for AppError {
    fn from(msg: String) -> Self {
        AppError::Api(msg)
    }
}

impl From<&str> for AppError {
    fn from(msg: &str) -> Self {
        AppError::Api(msg.to_string())
    }
}
