// src/core/error.rs
//! Error types shared by the extraction loop, the platform ports and the
//! output writer.

use thiserror::Error;

/// Failures reported by a clipboard or input port
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PortError {
    /// The port could not be initialized (no display, missing permissions, ...)
    #[error("platform backend unavailable: {0}")]
    Unavailable(String),

    /// Reading the clipboard failed
    #[error("clipboard read failed: {0}")]
    Clipboard(String),

    /// A synthetic key press or click was rejected
    #[error("input simulation failed: {0}")]
    Input(String),
}

/// Top-level errors for an extraction run
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("invalid row count {0:?}: expected a non-negative whole number")]
    InvalidRowCount(String),

    #[error(transparent)]
    Port(#[from] PortError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ExtractResult<T> = Result<T, ExtractError>;
