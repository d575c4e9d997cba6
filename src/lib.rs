//! Password generation with a structural strength heuristic.
//!
//! The core is three pure pieces: [`pass::charset`] turns a
//! [`GenerationRequest`] into a [`CharacterPool`], [`pass::generate`] draws
//! characters uniformly from that pool, and [`pass::strength`] scores any
//! string and maps the score to a [`StrengthLabel`].
//!
//! The default randomness source is a general-purpose, non-cryptographic
//! generator. [`EntropySource::Urandom`] opts into the operating system
//! CSPRNG instead.

mod error;
pub mod pass;

pub use error::{GenerateError, ValidationError};
pub use pass::charset::{
    CharClass, CharClasses, CharacterPool, GenerationRequest, MAX_LENGTH, MIN_LENGTH, SYMBOLS,
    build_pool,
};
pub use pass::generate::{EntropySource, Password, generate, generate_from, generate_with};
pub use pass::strength::{Checks, StrengthLabel, StrengthReport, classify};
