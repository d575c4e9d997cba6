//! Entropy estimate for a pool-sampled password.

/// Password entropy in bits for `length` draws from a pool of `pool_size`.
pub fn bits(length: usize, pool_size: usize) -> f64 {
    if pool_size == 0 {
        return 0.0;
    }
    length as f64 * (pool_size as f64).log2()
}

/// Coarse description of an entropy value.
pub fn rating(bits: f64) -> &'static str {
    match bits as u32 {
        0..=35 => "Weak",
        36..=59 => "Fair",
        60..=127 => "Strong",
        _ => "Very Strong",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_pool() {
        assert_eq!(bits(20, 0), 0.0);
    }

    #[test]
    fn digits_only() {
        let b = bits(4, 10);
        assert!((b - 13.2877).abs() < 0.001);
        assert_eq!(rating(b), "Weak");
    }

    #[test]
    fn full_pool_default_length() {
        // 25 chars over 86 symbols
        let b = bits(25, 86);
        assert!(b > 160.0);
        assert_eq!(rating(b), "Very Strong");
    }
}
