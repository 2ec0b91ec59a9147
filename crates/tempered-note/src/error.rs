//! Error types for pitch conversion.

use thiserror::Error;

/// Error type for fallible `Note` conversions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NoteError {
    /// The string is not a well-formed note name.
    #[error("invalid note name: '{0}'")]
    InvalidName(String),

    /// The frequency is zero, negative, NaN, or infinite.
    #[error("frequency must be positive and finite, got {0}")]
    NonPositiveFrequency(f64),

    /// The A4 reference frequency is zero, negative, NaN, or infinite.
    #[error("reference frequency must be positive and finite, got {0}")]
    NonPositiveReference(f64),
}
