//! Key pair generation straight to PEM text.

use alloc::string::String;
use core::convert::TryInto;

use log::debug;
use rand_core::{CryptoRngCore, OsRng};
use zeroize::Zeroizing;

use crate::encoding::KeyFormat;
use crate::errors::{Error, Result};
use crate::key::{RsaPrivateKey, RsaPublicKey};

/// Smallest modulus size, in bits, accepted by [`generate`].
pub const MIN_KEY_BITS: usize = 512;

/// Generate a key pair of `bits` bits and return it as
/// `(private_pem, public_pem)`, using the operating system RNG.
///
/// The private key is serialized in `format`, which may be a [`KeyFormat`],
/// its `u8` value or its name. The public key is always a
/// `SubjectPublicKeyInfo`.
pub fn generate<F>(bits: usize, format: F) -> Result<(Zeroizing<String>, String)>
where
    F: TryInto<KeyFormat>,
    Error: From<F::Error>,
{
    generate_with_rng(&mut OsRng, bits, format)
}

/// Same as [`generate`], drawing primes from `rng`.
///
/// The format is checked before anything else, so an unknown format never
/// costs a key generation.
pub fn generate_with_rng<R, F>(
    rng: &mut R,
    bits: usize,
    format: F,
) -> Result<(Zeroizing<String>, String)>
where
    R: CryptoRngCore + ?Sized,
    F: TryInto<KeyFormat>,
    Error: From<F::Error>,
{
    let format = format.try_into()?;

    if bits < MIN_KEY_BITS {
        return Err(Error::ModulusTooSmall);
    }
    if bits > RsaPublicKey::MAX_SIZE {
        return Err(Error::ModulusTooLarge);
    }

    debug!("generating {}-bit key pair, private key as {}", bits, format);
    let private_key = RsaPrivateKey::new(rng, bits)?;

    let private_pem = private_key.to_pem(format)?;
    let public_pem = private_key.to_public_key().to_pem()?;

    Ok((private_pem, public_pem))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::PublicKeyParts;
    use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};

    #[test]
    fn generates_parseable_pair() {
        let mut rng = ChaCha8Rng::from_seed([21; 32]);

        for format in [KeyFormat::Pkcs1, KeyFormat::Pkcs8] {
            let (private_pem, public_pem) =
                generate_with_rng(&mut rng, MIN_KEY_BITS, format).unwrap();

            let private_key = RsaPrivateKey::from_pem(&private_pem).unwrap();
            let public_key = RsaPublicKey::from_pem(&public_pem).unwrap();
            assert_eq!(private_key.n().bits(), MIN_KEY_BITS);
            assert_eq!(private_key.to_public_key(), public_key);
        }
    }

    #[test]
    fn accepts_format_names_and_numbers() {
        let mut rng = ChaCha8Rng::from_seed([22; 32]);

        let (pkcs8_pem, _) = generate_with_rng(&mut rng, 512, "PKCS8").unwrap();
        let (pkcs1_pem, _) = generate_with_rng(&mut rng, 512, 0u8).unwrap();
        assert!(RsaPrivateKey::from_pem(&pkcs8_pem).is_ok());
        assert!(RsaPrivateKey::from_pem(&pkcs1_pem).is_ok());
    }

    #[test]
    fn rejects_bad_format_before_size() {
        let mut rng = ChaCha8Rng::from_seed([23; 32]);

        assert_eq!(
            generate_with_rng(&mut rng, 64, 2u8).unwrap_err(),
            Error::KeyFormat
        );
        assert_eq!(
            generate_with_rng(&mut rng, 2048, "pem").unwrap_err(),
            Error::KeyFormat
        );
    }

    #[test]
    fn rejects_small_modulus() {
        let mut rng = ChaCha8Rng::from_seed([24; 32]);

        assert_eq!(
            generate_with_rng(&mut rng, MIN_KEY_BITS - 1, KeyFormat::Pkcs1).unwrap_err(),
            Error::ModulusTooSmall
        );
    }
}
