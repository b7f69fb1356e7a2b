//! Supported padding schemes.

use alloc::vec::Vec;

use rand_core::CryptoRngCore;

use crate::errors::Result;
use crate::key::{RsaPrivateKey, RsaPublicKey};

/// Padding scheme used for encryption.
pub trait PaddingScheme {
    /// Decrypt the given message using the given private key.
    ///
    /// If an `rng` is passed, it uses RSA blinding to help mitigate timing
    /// side-channel attacks.
    fn decrypt<Rng: CryptoRngCore + ?Sized>(
        self,
        rng: Option<&mut Rng>,
        priv_key: &RsaPrivateKey,
        ciphertext: &[u8],
    ) -> Result<Vec<u8>>;

    /// Encrypt the given message using the given public key.
    fn encrypt<Rng: CryptoRngCore + ?Sized>(
        self,
        rng: &mut Rng,
        pub_key: &RsaPublicKey,
        msg: &[u8],
    ) -> Result<Vec<u8>>;
}

/// Signature-style padding: applied with the private key, removed with the
/// public key.
pub trait SignatureScheme {
    /// Sign the given digest (or, for unprefixed schemes, the raw message).
    fn sign<Rng: CryptoRngCore + ?Sized>(
        self,
        rng: Option<&mut Rng>,
        priv_key: &RsaPrivateKey,
        hashed: &[u8],
    ) -> Result<Vec<u8>>;

    /// Apply the public exponent to `sig` and strip the padding, returning
    /// whatever follows it.
    ///
    /// This is a recovery operation, not a verification: see
    /// [`Pkcs1v15Sign`](crate::Pkcs1v15Sign) for how lenient the scan is.
    fn recover(self, pub_key: &RsaPublicKey, sig: &[u8]) -> Result<Vec<u8>>;
}
