//! Character pool building for password generation.

use serde::{Deserialize, Serialize};

use crate::ValidationError;

pub const MIN_LENGTH: usize = 4;
pub const MAX_LENGTH: usize = 128;

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";

/// Symbol set shared by pool construction and the strength checks.
pub const SYMBOLS: &str = "!@#$%^&*()_+{}[]|;:,.<>?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Number,
    Symbol,
}

impl CharClass {
    /// Pool layout order.
    pub const ALL: [CharClass; 4] = [
        CharClass::Lowercase,
        CharClass::Uppercase,
        CharClass::Number,
        CharClass::Symbol,
    ];

    pub fn charset(self) -> &'static str {
        match self {
            CharClass::Lowercase => LOWERCASE,
            CharClass::Uppercase => UPPERCASE,
            CharClass::Number => DIGITS,
            CharClass::Symbol => SYMBOLS,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CharClass::Lowercase => "Lowercase",
            CharClass::Uppercase => "Uppercase",
            CharClass::Number => "Numbers",
            CharClass::Symbol => "Symbols",
        }
    }

    /// True if `c` belongs to this class.
    pub fn matches(self, c: char) -> bool {
        match self {
            CharClass::Lowercase => c.is_ascii_lowercase(),
            CharClass::Uppercase => c.is_ascii_uppercase(),
            CharClass::Number => c.is_ascii_digit(),
            CharClass::Symbol => SYMBOLS.contains(c),
        }
    }
}

/// The set of enabled character classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharClasses {
    pub lowercase: bool,
    pub uppercase: bool,
    pub numbers: bool,
    pub symbols: bool,
}

impl CharClasses {
    pub fn all() -> Self {
        Self {
            lowercase: true,
            uppercase: true,
            numbers: true,
            symbols: true,
        }
    }

    pub fn none() -> Self {
        Self {
            lowercase: false,
            uppercase: false,
            numbers: false,
            symbols: false,
        }
    }

    pub fn contains(&self, class: CharClass) -> bool {
        match class {
            CharClass::Lowercase => self.lowercase,
            CharClass::Uppercase => self.uppercase,
            CharClass::Number => self.numbers,
            CharClass::Symbol => self.symbols,
        }
    }

    pub fn set(&mut self, class: CharClass, enabled: bool) {
        match class {
            CharClass::Lowercase => self.lowercase = enabled,
            CharClass::Uppercase => self.uppercase = enabled,
            CharClass::Number => self.numbers = enabled,
            CharClass::Symbol => self.symbols = enabled,
        }
    }

    pub fn toggle(&mut self, class: CharClass) {
        self.set(class, !self.contains(class));
    }

    pub fn is_empty(&self) -> bool {
        !(self.lowercase || self.uppercase || self.numbers || self.symbols)
    }

    /// Enabled classes in pool layout order.
    pub fn enabled(&self) -> impl Iterator<Item = CharClass> + '_ {
        CharClass::ALL.into_iter().filter(|c| self.contains(*c))
    }
}

impl Default for CharClasses {
    fn default() -> Self {
        Self::all()
    }
}

impl FromIterator<CharClass> for CharClasses {
    fn from_iter<I: IntoIterator<Item = CharClass>>(iter: I) -> Self {
        let mut classes = Self::none();
        for class in iter {
            classes.set(class, true);
        }
        classes
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    pub length: usize,
    pub classes: CharClasses,
}

impl GenerationRequest {
    pub fn new(length: usize, classes: CharClasses) -> Self {
        Self { length, classes }
    }

    /// Check the request. Length is checked before the classes.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&self.length) {
            return Err(invalid_length());
        }
        if self.classes.is_empty() {
            return Err(ValidationError::NoCharacterClassSelected);
        }
        Ok(())
    }

    /// Parse a user-entered length. Non-numeric input is an invalid length.
    pub fn parse_length(input: &str) -> Result<usize, ValidationError> {
        input.trim().parse().map_err(|_| invalid_length())
    }
}

fn invalid_length() -> ValidationError {
    ValidationError::InvalidLength {
        min: MIN_LENGTH,
        max: MAX_LENGTH,
    }
}

/// Ordered pool of characters eligible for sampling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterPool(String);

impl CharacterPool {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn contains(&self, c: char) -> bool {
        self.0.contains(c)
    }

    /// Character at `index`. All sets are ASCII, so bytes and chars line up.
    pub fn get(&self, index: usize) -> Option<char> {
        self.0.as_bytes().get(index).map(|&b| char::from(b))
    }
}

/// Build the character pool for a request, validating it first.
pub fn build_pool(request: &GenerationRequest) -> Result<CharacterPool, ValidationError> {
    request.validate()?;

    let mut chars = String::new();
    for class in request.classes.enabled() {
        chars.push_str(class.charset());
    }

    Ok(CharacterPool(chars))
}
