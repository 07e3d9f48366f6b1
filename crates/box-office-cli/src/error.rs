//! Box office harness: error types.

use thiserror::Error;

/// Startup and runtime errors for the harness.
#[derive(Debug, Error)]
pub enum AppError {
    /// A configuration environment variable has an unsupported value.
    #[error("configuration error: {0}")]
    Config(String),

    /// Reading the prompt input or writing output failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A receipt could not be rendered as JSON.
    #[error("output error: {0}")]
    Output(#[from] serde_json::Error),
}
