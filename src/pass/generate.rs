//! Password generation.
//!
//! Each position is an independent uniform draw from the pool, with
//! replacement. No anti-repetition rule is applied here; repeated runs are
//! penalised afterwards by the strength classifier.

use rand::rngs::{OsRng, SmallRng};
use rand::{RngCore, SeedableRng};
use zeroize::Zeroizing;

use super::charset::{CharacterPool, GenerationRequest, build_pool};
use crate::GenerateError;

/// A generated password. Wiped from memory on drop.
pub type Password = Zeroizing<String>;

/// Where the random draws come from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EntropySource {
    /// General-purpose generator. Not cryptographically secure.
    #[default]
    Standard,
    /// Operating system CSPRNG. Can fail if the OS source is unavailable.
    Urandom,
}

impl EntropySource {
    pub fn name(self) -> &'static str {
        match self {
            EntropySource::Standard => "standard (non-cryptographic)",
            EntropySource::Urandom => "os (cryptographic)",
        }
    }
}

/// Generate a password with the default non-cryptographic source.
pub fn generate(request: &GenerationRequest) -> Result<Password, GenerateError> {
    generate_from(request, EntropySource::Standard)
}

pub fn generate_from(
    request: &GenerationRequest,
    source: EntropySource,
) -> Result<Password, GenerateError> {
    match source {
        EntropySource::Standard => generate_with(request, &mut SmallRng::from_entropy()),
        EntropySource::Urandom => generate_with(request, &mut OsRng),
    }
}

/// Generate a password drawing from `rng`.
pub fn generate_with<R: RngCore + ?Sized>(
    request: &GenerationRequest,
    rng: &mut R,
) -> Result<Password, GenerateError> {
    let pool = build_pool(request)?;
    tracing::debug!(length = request.length, pool = pool.len(), "pool built");

    let mut password = Zeroizing::new(String::with_capacity(request.length));
    for _ in 0..request.length {
        password.push(random_char(&pool, unit(rng)?));
    }
    Ok(password)
}

/// Uniform value in `[0, 1)` from the top 53 bits of a random word.
#[inline]
fn unit<R: RngCore + ?Sized>(rng: &mut R) -> Result<f64, rand::Error> {
    let mut bytes = [0u8; 8];
    rng.try_fill_bytes(&mut bytes)?;
    let bits = u64::from_le_bytes(bytes) >> 11;
    Ok(bits as f64 / (1u64 << 53) as f64)
}

#[inline]
fn random_char(pool: &CharacterPool, unit: f64) -> char {
    // unit < 1.0, so the floor stays below len; min() guards rounding.
    let index = ((unit * pool.len() as f64) as usize).min(pool.len() - 1);
    pool.get(index).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;

    use super::*;
    use crate::pass::charset::{CharClass, CharClasses};
    use crate::ValidationError;

    #[test]
    fn unit_stays_below_one() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10_000 {
            let u = unit(&mut rng).unwrap();
            assert!((0.0..1.0).contains(&u));
        }
    }

    #[test]
    fn floor_scaling_picks_ends() {
        let pool = build_pool(&GenerationRequest::new(4, CharClasses::all())).unwrap();
        assert_eq!(random_char(&pool, 0.0), 'a');
        assert_eq!(random_char(&pool, 0.999_999_999), '?');
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let request = GenerationRequest::new(32, CharClasses::all());
        let a = generate_with(&request, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = generate_with(&request, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(*a, *b);
    }

    #[test]
    fn single_class_pool() {
        let classes: CharClasses = [CharClass::Number].into_iter().collect();
        let request = GenerationRequest::new(64, classes);
        let password = generate_with(&request, &mut StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(password.len(), 64);
        assert!(password.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn validation_stops_generation() {
        let request = GenerationRequest::new(2, CharClasses::all());
        let err = generate(&request).unwrap_err();
        assert_eq!(
            err.validation(),
            Some(ValidationError::InvalidLength { min: 4, max: 128 })
        );
    }

    #[test]
    fn os_source_generates() {
        let request = GenerationRequest::new(16, CharClasses::all());
        let password = generate_from(&request, EntropySource::Urandom).unwrap();
        assert_eq!(password.chars().count(), 16);
    }
}
