//! Whole-payload operations on PEM encoded keys.
//!
//! Each function parses the key, splits the input into blocks that fit one
//! RSA operation, processes the blocks in order and concatenates the output.
//! The first failing block aborts the call.
//!
//! Ciphertext produced here is always a whole number of modulus-sized blocks,
//! returned as padded standard base64. The decrypting functions take the raw
//! (already base64 decoded) ciphertext bytes.

use alloc::string::String;
use alloc::vec::Vec;

use base64ct::{Base64, Encoding};
use log::{debug, trace};
use rand_core::{CryptoRngCore, OsRng};

use crate::chunk;
use crate::errors::Result;
use crate::key::{RsaPrivateKey, RsaPublicKey};
use crate::pkcs1v15::{Pkcs1v15Encrypt, Pkcs1v15Sign, PKCS1V15_OVERHEAD};
use crate::traits::PublicKeyParts;

/// Plaintext bytes one padded block can carry under `key`.
fn plaintext_capacity(key: &impl PublicKeyParts) -> usize {
    key.size().saturating_sub(PKCS1V15_OVERHEAD)
}

/// Encrypt `data` with a PEM public key, returning base64 ciphertext.
pub fn encrypt_by_public_key(key: &str, data: &[u8]) -> Result<String> {
    encrypt_by_public_key_with_rng(&mut OsRng, key, data)
}

/// Same as [`encrypt_by_public_key`], drawing padding bytes from `rng`.
pub fn encrypt_by_public_key_with_rng<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    key: &str,
    data: &[u8],
) -> Result<String> {
    let public_key = RsaPublicKey::from_pem(key)?;
    let blocks = chunk::split(data, plaintext_capacity(&public_key));
    debug!(
        "public key encrypt: {} bytes in {} block(s)",
        data.len(),
        blocks.len()
    );

    let mut ciphertext = Vec::with_capacity(blocks.len());
    for (i, block) in blocks.iter().enumerate() {
        trace!("encrypting block {}", i);
        ciphertext.push(public_key.encrypt(rng, Pkcs1v15Encrypt, block)?);
    }

    Ok(Base64::encode_string(&chunk::join(&ciphertext)))
}

/// Decrypt ciphertext produced by [`encrypt_by_public_key`] with the
/// matching PEM private key.
pub fn decrypt_by_private_key(key: &str, data: &[u8]) -> Result<Vec<u8>> {
    decrypt_by_private_key_with_rng(&mut OsRng, key, data)
}

/// Same as [`decrypt_by_private_key`], blinding each private key operation
/// with `rng`.
pub fn decrypt_by_private_key_with_rng<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    key: &str,
    data: &[u8],
) -> Result<Vec<u8>> {
    let private_key = RsaPrivateKey::from_pem(key)?;
    let blocks = chunk::split(data, private_key.size());
    debug!(
        "private key decrypt: {} bytes in {} block(s)",
        data.len(),
        blocks.len()
    );

    let mut plaintext = Vec::with_capacity(blocks.len());
    for (i, block) in blocks.iter().enumerate() {
        trace!("decrypting block {}", i);
        plaintext.push(private_key.decrypt_blinded(rng, Pkcs1v15Encrypt, block)?);
    }

    Ok(chunk::join(&plaintext))
}

/// Apply the private key to `data` with type 1 padding, returning base64
/// output that anyone holding the public key can turn back into `data`.
///
/// This provides no confidentiality.
pub fn encrypt_by_private_key(key: &str, data: &[u8]) -> Result<String> {
    encrypt_by_private_key_with_rng(&mut OsRng, key, data)
}

/// Same as [`encrypt_by_private_key`], blinding each private key operation
/// with `rng`.
pub fn encrypt_by_private_key_with_rng<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    key: &str,
    data: &[u8],
) -> Result<String> {
    let private_key = RsaPrivateKey::from_pem(key)?;
    let blocks = chunk::split(data, plaintext_capacity(&private_key));
    debug!(
        "private key encrypt: {} bytes in {} block(s)",
        data.len(),
        blocks.len()
    );

    let mut ciphertext = Vec::with_capacity(blocks.len());
    for (i, block) in blocks.iter().enumerate() {
        trace!("encrypting block {}", i);
        ciphertext.push(private_key.sign_with_rng(rng, Pkcs1v15Sign::new_unprefixed(), block)?);
    }

    Ok(Base64::encode_string(&chunk::join(&ciphertext)))
}

/// Recover the payload of [`encrypt_by_private_key`] output with the
/// matching PEM public key.
///
/// Padding is removed with the lenient scan described on
/// [`RsaPublicKey::recover`], so a block made with another key may yield
/// garbage rather than an error.
pub fn decrypt_by_public_key(key: &str, data: &[u8]) -> Result<Vec<u8>> {
    let public_key = RsaPublicKey::from_pem(key)?;
    let blocks = chunk::split(data, public_key.size());
    debug!(
        "public key decrypt: {} bytes in {} block(s)",
        data.len(),
        blocks.len()
    );

    let mut plaintext = Vec::with_capacity(blocks.len());
    for (i, block) in blocks.iter().enumerate() {
        trace!("recovering block {}", i);
        plaintext.push(public_key.recover(Pkcs1v15Sign::new_unprefixed(), block)?);
    }

    Ok(chunk::join(&plaintext))
}
