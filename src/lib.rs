#![cfg_attr(not(test), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # Block operations
//!
//! RSA can only process one modulus-sized block at a time. The functions at
//! the top of the crate split arbitrary payloads into blocks, run each block
//! through a PKCS#1 v1.5 operation and concatenate the results:
//!
//! | function                   | key     | padding                      |
//! |----------------------------|---------|------------------------------|
//! | [`encrypt_by_public_key`]  | public  | [`Pkcs1v15Encrypt`]          |
//! | [`decrypt_by_private_key`] | private | [`Pkcs1v15Encrypt`]          |
//! | [`encrypt_by_private_key`] | private | unprefixed [`Pkcs1v15Sign`]  |
//! | [`decrypt_by_public_key`]  | public  | unprefixed [`Pkcs1v15Sign`]  |
//!
//! A key of `k` bytes carries `k - 11` plaintext bytes per block and emits
//! `k` bytes of ciphertext per block.
//!
//! ## Encrypting with the private key
//!
//! ```
//! use rsa_blocks::{decrypt_by_public_key, encrypt_by_private_key, generate, KeyFormat};
//! use base64ct::{Base64, Encoding};
//!
//! let (private_pem, public_pem) = generate(512, KeyFormat::Pkcs1).expect("failed to generate a key");
//!
//! let data = vec![0x42u8; 200];
//! let encoded = encrypt_by_private_key(&private_pem, &data).expect("failed to encrypt");
//!
//! let ciphertext = Base64::decode_vec(&encoded).expect("invalid base64");
//! let recovered = decrypt_by_public_key(&public_pem, &ciphertext).expect("failed to decrypt");
//! assert_eq!(recovered, data);
//! ```
//!
//! ## Single blocks
//!
//! The padding schemes can be used directly on typed keys:
//!
//! ```
//! use rsa_blocks::{Pkcs1v15Encrypt, RsaPrivateKey, RsaPublicKey};
//!
//! let mut rng = rand::thread_rng(); // rand@0.8
//!
//! let private_key = RsaPrivateKey::new(&mut rng, 1024).expect("failed to generate a key");
//! let public_key = RsaPublicKey::from(&private_key);
//!
//! let data = b"hello world";
//! let enc_data = public_key.encrypt(&mut rng, Pkcs1v15Encrypt, &data[..]).expect("failed to encrypt");
//! assert_ne!(&data[..], &enc_data[..]);
//!
//! let dec_data = private_key.decrypt(Pkcs1v15Encrypt, &enc_data).expect("failed to decrypt");
//! assert_eq!(&data[..], &dec_data[..]);
//! ```
//!
//! # Key encoding
//!
//! Private keys are written as PKCS#1 or PKCS#8, chosen with [`KeyFormat`],
//! and always armored with the `RSA PRIVATE KEY` label. Reading a private key
//! tries PKCS#1 first and PKCS#8 second, whatever the label says. Public keys
//! are always `SubjectPublicKeyInfo` under the `PUBLIC KEY` label.
//!
//! The [`pkcs1`] and [`pkcs8`] encoding traits are implemented for
//! [`RsaPrivateKey`] and [`RsaPublicKey`] as well.

#[macro_use]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub use num_bigint::BigUint;
pub use rand_core;

mod algorithms;
pub mod chunk;
pub mod digests;
pub mod errors;
pub mod hash;
pub mod mac;
pub mod pem;
pub mod pkcs1v15;
pub mod random;
pub mod traits;

mod encoding;
mod key;
mod keygen;
mod transport;

pub use pkcs1;
pub use pkcs8;

pub use crate::{
    encoding::KeyFormat,
    errors::{Error, Result},
    hash::Hash,
    key::{RsaPrivateKey, RsaPublicKey},
    keygen::{generate, generate_with_rng, MIN_KEY_BITS},
    pkcs1v15::{Pkcs1v15Encrypt, Pkcs1v15Sign, PKCS1V15_OVERHEAD},
    transport::{
        decrypt_by_private_key, decrypt_by_private_key_with_rng, decrypt_by_public_key,
        encrypt_by_private_key, encrypt_by_private_key_with_rng, encrypt_by_public_key,
        encrypt_by_public_key_with_rng,
    },
};

#[cfg(feature = "hazmat")]
pub mod hazmat;
