//! Common error types for the archive front end

use thiserror::Error;

/// Common result type for archive operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the archive crates
#[derive(Error, Debug)]
pub enum Error {
    /// Backend request error (wraps reqwest::Error)
    #[error("Backend error: {0}")]
    Backend(#[from] reqwest::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid user input or request parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
