//! Error types for pattern loading, configuration and terminal output
//!
//! Only pattern resolution failures ever reach the user. Transport errors are
//! kept distinct from unknown names so they can be logged with their cause
//! before being collapsed by the pattern source.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LifeError {
    #[error("Pattern not found: {0}")]
    PatternNotFound(String),
    #[error("Pattern transport failed: {0}")]
    TransportError(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Terminal error: {0}")]
    TerminalError(String),
    #[error("I/O error: {0}")]
    IoError(String),
}

impl From<std::io::Error> for LifeError {
    fn from(err: std::io::Error) -> Self {
        LifeError::IoError(err.to_string())
    }
}

impl From<reqwest::Error> for LifeError {
    fn from(err: reqwest::Error) -> Self {
        LifeError::TransportError(err.to_string())
    }
}
