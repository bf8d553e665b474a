//! Error types for the promptpad CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use crate::template::ResolveError;
use thiserror::Error;

/// Main error type for promptpad operations.
///
/// Each variant maps to a specific exit code.
#[derive(Error, Debug)]
pub enum PadError {
    /// User provided invalid arguments or the library is in an invalid state.
    #[error("{0}")]
    UserError(String),

    /// A prompt or its supplied values failed validation.
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// Template resolution failed at the top level.
    #[error("Resolution failed: {0}")]
    ResolveError(String),
}

impl PadError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            PadError::UserError(_) => exit_codes::USER_ERROR,
            PadError::ValidationError(_) => exit_codes::VALIDATION_FAILURE,
            PadError::ResolveError(_) => exit_codes::RESOLUTION_FAILURE,
        }
    }
}

impl From<ResolveError> for PadError {
    fn from(err: ResolveError) -> Self {
        PadError::ResolveError(err.to_string())
    }
}

/// Result type alias for promptpad operations.
pub type Result<T> = std::result::Result<T, PadError>;
