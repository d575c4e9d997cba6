//! Errors surfaced by the password core.

use thiserror::Error;

/// A generation request that cannot be served.
///
/// Both kinds are recoverable: the caller shows the message and nothing
/// is generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Password length must be between {min}-{max} characters")]
    InvalidLength { min: usize, max: usize },

    #[error("At least one character type must be selected")]
    NoCharacterClassSelected,
}

/// Failure of a single generation call.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Only raised by fallible sources such as the operating system RNG.
    #[error("entropy source unavailable: {0}")]
    EntropyUnavailable(#[from] rand::Error),
}

impl GenerateError {
    /// The validation failure, if that is what stopped generation.
    pub fn validation(&self) -> Option<ValidationError> {
        match self {
            GenerateError::Validation(e) => Some(*e),
            GenerateError::EntropyUnavailable(_) => None,
        }
    }
}
