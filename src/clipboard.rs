//! Clipboard output with a safety check on what gets copied.

use copypasta::{ClipboardContext, ClipboardProvider};
use thiserror::Error;
use zeroize::Zeroize;

use passgauge::CharClass;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Please generate a valid password first!")]
    NothingToCopy,

    #[error("Security error: Invalid characters detected")]
    InvalidCharacters,

    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("clipboard write failed: {0}")]
    Write(String),
}

/// Only non-empty text drawn from the generator's character classes may be
/// copied. Newlines separate passwords in a batch.
pub fn validate(text: &str) -> Result<(), ClipboardError> {
    if text.trim().is_empty() {
        return Err(ClipboardError::NothingToCopy);
    }
    let allowed = |c: char| c == '\n' || CharClass::ALL.iter().any(|class| class.matches(c));
    if !text.chars().all(allowed) {
        return Err(ClipboardError::InvalidCharacters);
    }
    Ok(())
}

pub struct Clipboard(ClipboardContext);

impl Clipboard {
    pub fn new() -> Result<Self, ClipboardError> {
        ClipboardContext::new()
            .map(Self)
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))
    }

    pub fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        validate(text)?;
        self.0
            .set_contents(text.to_owned())
            .map_err(|e| ClipboardError::Write(e.to_string()))?;
        // Some backends hand back a copy; wipe it.
        if let Ok(mut retrieved) = self.0.get_contents() {
            retrieved.zeroize();
        }
        tracing::debug!(chars = text.len(), "copied to clipboard");
        Ok(())
    }
}

/// One-shot copy with a fresh clipboard handle.
pub fn copy(text: &str) -> Result<(), ClipboardError> {
    validate(text)?;
    Clipboard::new()?.copy(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_rejected() {
        assert!(matches!(validate(""), Err(ClipboardError::NothingToCopy)));
        assert!(matches!(validate("\n"), Err(ClipboardError::NothingToCopy)));
    }

    #[test]
    fn error_text_is_rejected() {
        assert!(matches!(
            validate("Error: At least one character type must be selected"),
            Err(ClipboardError::InvalidCharacters)
        ));
    }

    #[test]
    fn pool_characters_pass() {
        assert!(validate("aZ9!@#$%^&*()_+{}[]|;:,.<>?").is_ok());
        assert!(validate("abcd\nEFGH\n").is_ok());
    }

    #[test]
    fn foreign_characters_fail() {
        assert!(validate("pass word").is_err());
        assert!(validate("tab\there").is_err());
        assert!(validate("naïve").is_err());
    }
}
