//! Centralized error handling for stardeck
//!
//! This module provides a unified error handling approach using:
//! - `thiserror` for library-style errors with proper error types
//! - `anyhow` for application-level error handling with context
//!
//! The presentation components themselves do not error: a page missing an
//! expected element leaves the matching feature inactive (see the terminal
//! front-end). These types cover the plumbing around them — terminal setup,
//! configuration files and the logger.

use thiserror::Error;

/// Core errors that can occur in stardeck
#[derive(Error, Debug)]
pub enum StardeckError {
    /// Terminal setup/teardown errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Logger initialization errors
    #[error("Logger error: {0}")]
    Logger(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenient result type alias for stardeck operations
pub type StardeckResult<T> = Result<T, StardeckError>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add configuration context to an error
    fn with_config_context(self, context: &str) -> StardeckResult<T>;

    /// Add terminal context to an error
    fn with_terminal_context(self, context: &str) -> StardeckResult<T>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for Result<T, E> {
    fn with_config_context(self, context: &str) -> StardeckResult<T> {
        self.map_err(|e| StardeckError::Config(format!("{}: {}", context, e)))
    }

    fn with_terminal_context(self, context: &str) -> StardeckResult<T> {
        self.map_err(|e| StardeckError::Terminal(format!("{}: {}", context, e)))
    }
}
