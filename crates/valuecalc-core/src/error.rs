//! Error types for the value calculator

use thiserror::Error;

/// Errors raised at the programmatic seams of the calculator.
///
/// User input never produces one of these: bad keystrokes are normalized
/// away before they reach the form state.
#[derive(Error, Debug)]
pub enum CalcError {
    /// A field name did not match any of the four form fields
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// A host message could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using CalcError
pub type CalcResult<T> = Result<T, CalcError>;
