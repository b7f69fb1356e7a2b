//! Error types.

use core::convert::Infallible;

/// Alias for [`core::result::Result`] with the `rsa-blocks` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types
#[derive(Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// The key format selector is neither PKCS#1 nor PKCS#8.
    KeyFormat,

    /// The private key could not be decoded.
    PrivateKey,

    /// The public key could not be decoded.
    PublicKey,

    /// Decryption error.
    Decryption,

    /// Message too long.
    MessageTooLong,

    /// Input must be hashed.
    InputNotHashed,

    /// No DigestInfo prefix is known for the selected hash function.
    UnsupportedHash,

    /// Too few primes of a given length to generate an RSA key.
    TooFewPrimes,

    /// Invalid prime value.
    InvalidPrime,

    /// Invalid modulus.
    InvalidModulus,

    /// Invalid exponent.
    InvalidExponent,

    /// Invalid coefficient.
    InvalidCoefficient,

    /// Modulus too small.
    ModulusTooSmall,

    /// Modulus too large.
    ModulusTooLarge,

    /// Public exponent too small.
    PublicExponentTooSmall,

    /// Public exponent too large.
    PublicExponentTooLarge,

    /// PKCS#1 error.
    Pkcs1(pkcs1::Error),

    /// PKCS#8 error.
    Pkcs8(pkcs8::Error),

    /// PEM encapsulation error.
    Pem(pem_rfc7468::Error),

    /// Invalid padding length.
    InvalidPadLen,

    /// Upper bound of a random range is below its lower bound.
    InvalidRange,

    /// MAC key rejected by the underlying primitive.
    InvalidKeyLength,

    /// Internal error.
    Internal,
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::KeyFormat => write!(f, "the key format must be PKCS#1 or PKCS#8"),
            Error::PrivateKey => write!(f, "private key error"),
            Error::PublicKey => write!(f, "public key error"),
            Error::Decryption => write!(f, "decryption error"),
            Error::MessageTooLong => write!(f, "message too long"),
            Error::InputNotHashed => write!(f, "input must be hashed"),
            Error::UnsupportedHash => write!(f, "unsupported hash function"),
            Error::TooFewPrimes => {
                write!(f, "too few primes of given length to generate an RSA key")
            }
            Error::InvalidPrime => write!(f, "invalid prime value"),
            Error::InvalidModulus => write!(f, "invalid modulus"),
            Error::InvalidExponent => write!(f, "invalid exponent"),
            Error::InvalidCoefficient => write!(f, "invalid coefficient"),
            Error::ModulusTooSmall => write!(f, "modulus too small"),
            Error::ModulusTooLarge => write!(f, "modulus too large"),
            Error::PublicExponentTooSmall => write!(f, "public exponent too small"),
            Error::PublicExponentTooLarge => write!(f, "public exponent too large"),
            Error::Pkcs1(err) => write!(f, "{}", err),
            Error::Pkcs8(err) => write!(f, "{}", err),
            Error::Pem(err) => write!(f, "{}", err),
            Error::InvalidPadLen => write!(f, "invalid padding length"),
            Error::InvalidRange => write!(f, "max must be greater than or equal to min"),
            Error::InvalidKeyLength => write!(f, "invalid MAC key length"),
            Error::Internal => write!(f, "internal error"),
        }
    }
}

impl From<pkcs1::Error> for Error {
    fn from(err: pkcs1::Error) -> Error {
        Error::Pkcs1(err)
    }
}

impl From<pkcs8::Error> for Error {
    fn from(err: pkcs8::Error) -> Error {
        Error::Pkcs8(err)
    }
}

impl From<spki::Error> for Error {
    fn from(err: spki::Error) -> Error {
        Error::Pkcs8(err.into())
    }
}

impl From<pem_rfc7468::Error> for Error {
    fn from(err: pem_rfc7468::Error) -> Error {
        Error::Pem(err)
    }
}

impl From<Infallible> for Error {
    fn from(err: Infallible) -> Error {
        match err {}
    }
}
