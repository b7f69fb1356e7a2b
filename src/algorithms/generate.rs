//! Generate prime components for the RSA Private Key

use alloc::vec::Vec;
use num_bigint::{BigUint, IntoBigUint, ModInverse, RandPrime};
use num_traits::{One, Zero};
use rand_core::CryptoRngCore;

use crate::errors::{Error, Result};

/// Number of primes in every generated key.
const NPRIMES: usize = 2;

pub(crate) struct RsaPrivateKeyComponents {
    pub n: BigUint,
    pub e: BigUint,
    pub d: BigUint,
    pub primes: Vec<BigUint>,
}

/// Generates a two-prime RSA keypair of the given bit size, public exponent,
/// and the given random source.
///
/// Each prime is drawn with its two top bits set, so the product of two
/// `bit_size / 2` primes always has exactly `bit_size` bits. The loop only
/// repeats when the primes collide or `exp` is not invertible modulo the
/// totient.
pub(crate) fn generate_key_with_exp<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    bit_size: usize,
    exp: &BigUint,
) -> Result<RsaPrivateKeyComponents> {
    if bit_size < 64 {
        let prime_limit = (1u64 << (bit_size / NPRIMES) as u64) as f64;

        // pi approximates the number of primes less than prime_limit

        // Calculate `log(prime_limit)` as `log(x) = log2(x) / log2(e) = log2(x) * log(2)`.
        let mut pi = prime_limit / ((bit_size / NPRIMES) as f64 * core::f64::consts::LN_2 - 1.);

        // Generated primes start with 0b11, so we can only use a quarter of them.
        pi /= 4f64;
        // Use a factor of two to ensure that key generation terminates in a
        // reasonable amount of time.
        pi /= 2f64;

        if pi < NPRIMES as f64 {
            return Err(Error::TooFewPrimes);
        }
    }

    let mut primes = vec![BigUint::zero(); NPRIMES];
    let n_final: BigUint;
    let d_final: BigUint;

    'next: loop {
        let mut todo = bit_size;

        for (i, prime) in primes.iter_mut().enumerate() {
            *prime = rng.gen_prime(todo / (NPRIMES - i));
            todo -= prime.bits();
        }

        if primes[0] == primes[1] {
            continue 'next;
        }

        let mut n = BigUint::one();
        let mut totient = BigUint::one();

        for prime in &primes {
            n *= prime;
            totient *= prime - BigUint::one();
        }

        if n.bits() != bit_size {
            // gen_prime sets the top two bits of each prime, so this should
            // not happen.
            continue 'next;
        }

        if let Some(d) = exp
            .clone()
            .mod_inverse(totient)
            .and_then(|d| d.into_biguint())
        {
            n_final = n;
            d_final = d;
            break;
        }
    }

    Ok(RsaPrivateKeyComponents {
        n: n_final,
        e: exp.clone(),
        d: d_final,
        primes,
    })
}
