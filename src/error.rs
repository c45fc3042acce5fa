//! Error types for synthfit.

use thiserror::Error;

/// Result type alias for synthfit operations.
pub type Result<T> = std::result::Result<T, SynthFitError>;

/// Errors that can occur in synthfit operations.
#[derive(Error, Debug)]
pub enum SynthFitError {
    /// A generation or split parameter is outside its documented domain.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    /// The training set does not contain enough samples to fit.
    #[error("Insufficient data: {0}")]
    InsufficientData(String),
    /// The data admits no well-defined fit or metric (zero variance).
    #[error("Degenerate input: {0}")]
    DegenerateInput(String),
}
