//! Error types for the JSON boundary and strict validation.
//!
//! The transcoders themselves are total and never return these.

use thiserror::Error;

use crate::warning::Warning;

#[derive(Debug, Error)]
pub enum TranscodeError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Expected a record at {path}")]
    NotARecord { path: String },

    #[error("Input does not match the visual schema ({} warning(s)); first: {}", .warnings.len(), first_warning(.warnings))]
    Shape { warnings: Vec<Warning> },

    #[error("Too many visuals: {actual} (max: {max})")]
    TooManyVisuals { max: usize, actual: usize },
}

fn first_warning(warnings: &[Warning]) -> String {
    warnings
        .first()
        .map(ToString::to_string)
        .unwrap_or_else(|| "none".to_string())
}
