//! Random numbers and strings from a caller supplied generator.

use alloc::string::String;

use rand::distributions::uniform::SampleUniform;
use rand::distributions::{Alphanumeric, DistString};
use rand::Rng;

use crate::errors::{Error, Result};

/// Uniform integer in `min..=max`.
///
/// Fails with [`Error::InvalidRange`] if `max < min`.
pub fn number<T, R>(rng: &mut R, min: T, max: T) -> Result<T>
where
    T: SampleUniform + PartialOrd,
    R: Rng + ?Sized,
{
    if max < min {
        return Err(Error::InvalidRange);
    }

    Ok(rng.gen_range(min..=max))
}

/// `len` random ASCII letters and digits.
pub fn string<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    Alphanumeric.sample_string(rng, len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};

    #[test]
    fn number_stays_in_bounds() {
        let mut rng = ChaCha8Rng::from_seed([51; 32]);

        for _ in 0..1000 {
            let n = number(&mut rng, -5i32, 5).unwrap();
            assert!((-5..=5).contains(&n));
        }
        assert_eq!(number(&mut rng, 7u8, 7).unwrap(), 7);
    }

    #[test]
    fn number_rejects_inverted_range() {
        let mut rng = ChaCha8Rng::from_seed([52; 32]);
        assert_eq!(number(&mut rng, 10u64, 9), Err(Error::InvalidRange));
    }

    #[test]
    fn string_is_alphanumeric() {
        let mut rng = ChaCha8Rng::from_seed([53; 32]);
        let s = string(&mut rng, 64);

        assert_eq!(s.len(), 64);
        assert!(s.chars().all(|c| c.is_ascii_alphanumeric()));
        assert!(string(&mut rng, 0).is_empty());
    }
}
