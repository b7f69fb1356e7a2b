//! Read access to the numbers behind a key.

use num_bigint::{BigInt, BigUint};

/// Modulus and public exponent, shared by both key halves.
pub trait PublicKeyParts {
    /// Modulus `n`.
    fn n(&self) -> &BigUint;

    /// Public exponent `e`.
    fn e(&self) -> &BigUint;

    /// Block size `k`: the modulus length in whole bytes.
    ///
    /// Every ciphertext block made or consumed with this key is exactly `k`
    /// bytes, and a padded plaintext block carries at most `k - 11`.
    fn size(&self) -> usize {
        (self.n().bits() + 7) / 8
    }
}

/// Secret components of a two-prime key.
pub trait PrivateKeyParts: PublicKeyParts {
    /// Private exponent `d`.
    fn d(&self) -> &BigUint;

    /// The primes `p` and `q`, in that order.
    fn primes(&self) -> &[BigUint];

    /// `d mod (p - 1)`, if precomputed.
    fn dp(&self) -> Option<&BigUint>;

    /// `d mod (q - 1)`, if precomputed.
    fn dq(&self) -> Option<&BigUint>;

    /// `q⁻¹ mod p`, if precomputed.
    fn qinv(&self) -> Option<&BigInt>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RsaPublicKey;

    #[test]
    fn size_rounds_up_to_whole_bytes() {
        // 3233 = 61 * 53 is a 12-bit modulus.
        let key = RsaPublicKey::new(BigUint::from(3233u32), BigUint::from(17u32)).unwrap();
        assert_eq!(key.size(), 2);

        let key = RsaPublicKey::new(BigUint::from(255u32), BigUint::from(7u32)).unwrap();
        assert_eq!(key.size(), 1);
    }
}
