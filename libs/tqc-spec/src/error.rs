//! # Spec Errors
//!
//! Error types for decoding circuit descriptions.

use thiserror::Error;

/// Errors that can occur while decoding a circuit description.
#[derive(Debug, Error)]
pub enum SpecError {
    /// The text is not valid JSON or does not match the schema.
    #[error("Invalid circuit description: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for spec decoding.
pub type SpecResult<T> = Result<T, SpecError>;
