//! Hash functions that can be named when removing signature-style padding.

/// A list of hash functions, with the information needed to locate a
/// `DigestInfo` inside a PKCS#1 v1.5 block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Hash {
    /// MD5
    Md5,
    /// SHA-1
    Sha1,
    /// SHA-224
    Sha224,
    /// SHA-256
    Sha256,
    /// SHA-384
    Sha384,
    /// SHA-512
    Sha512,
    /// SHA3-256
    Sha3_256,
    /// SHA3-384
    Sha3_384,
    /// SHA3-512
    Sha3_512,
    /// MD5 and SHA-1 concatenated, as used by TLS 1.0 and 1.1.
    Md5Sha1,
    /// RIPEMD-160
    Ripemd160,
}

impl Hash {
    /// Returns the length in bytes of a digest.
    pub const fn size(self) -> usize {
        match self {
            Hash::Md5 => 16,
            Hash::Sha1 => 20,
            Hash::Sha224 => 28,
            Hash::Sha256 => 32,
            Hash::Sha384 => 48,
            Hash::Sha512 => 64,
            Hash::Sha3_256 => 32,
            Hash::Sha3_384 => 48,
            Hash::Sha3_512 => 64,
            Hash::Md5Sha1 => 36,
            Hash::Ripemd160 => 20,
        }
    }

    /// Returns the ASN.1 DER `DigestInfo` prefix for the hash function.
    ///
    /// `Md5Sha1` has an empty prefix. The SHA-3 family has no prefix in the
    /// table and yields `None`.
    pub const fn asn1_prefix(self) -> Option<&'static [u8]> {
        match self {
            Hash::Md5 => Some(&[
                0x30, 0x20, 0x30, 0x0c, 0x06, 0x08, 0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x02, 0x05,
                0x05, 0x00, 0x04, 0x10,
            ]),
            Hash::Sha1 => Some(&[
                0x30, 0x21, 0x30, 0x09, 0x06, 0x05, 0x2b, 0x0e, 0x03, 0x02, 0x1a, 0x05, 0x00, 0x04,
                0x14,
            ]),
            Hash::Sha224 => Some(&[
                0x30, 0x2d, 0x30, 0x0d, 0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02,
                0x04, 0x05, 0x00, 0x04, 0x1c,
            ]),
            Hash::Sha256 => Some(&[
                0x30, 0x31, 0x30, 0x0d, 0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02,
                0x01, 0x05, 0x00, 0x04, 0x20,
            ]),
            Hash::Sha384 => Some(&[
                0x30, 0x41, 0x30, 0x0d, 0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02,
                0x02, 0x05, 0x00, 0x04, 0x30,
            ]),
            Hash::Sha512 => Some(&[
                0x30, 0x51, 0x30, 0x0d, 0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02,
                0x03, 0x05, 0x00, 0x04, 0x40,
            ]),
            Hash::Md5Sha1 => Some(&[]),
            Hash::Ripemd160 => Some(&[
                0x30, 0x20, 0x30, 0x08, 0x06, 0x06, 0x28, 0xcf, 0x06, 0x03, 0x00, 0x31, 0x04, 0x14,
            ]),
            Hash::Sha3_256 | Hash::Sha3_384 | Hash::Sha3_512 => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::pkcs1v15::pkcs1v15_generate_prefix;

    #[test]
    fn prefixes_match_oid_derived_prefixes() {
        assert_eq!(
            Hash::Md5.asn1_prefix().unwrap(),
            pkcs1v15_generate_prefix::<md5::Md5>()
        );
        assert_eq!(
            Hash::Sha1.asn1_prefix().unwrap(),
            pkcs1v15_generate_prefix::<sha1::Sha1>()
        );
        assert_eq!(
            Hash::Sha224.asn1_prefix().unwrap(),
            pkcs1v15_generate_prefix::<sha2::Sha224>()
        );
        assert_eq!(
            Hash::Sha256.asn1_prefix().unwrap(),
            pkcs1v15_generate_prefix::<sha2::Sha256>()
        );
        assert_eq!(
            Hash::Sha384.asn1_prefix().unwrap(),
            pkcs1v15_generate_prefix::<sha2::Sha384>()
        );
        assert_eq!(
            Hash::Sha512.asn1_prefix().unwrap(),
            pkcs1v15_generate_prefix::<sha2::Sha512>()
        );
    }

    #[test]
    fn prefix_ends_with_digest_length() {
        for hash in [
            Hash::Md5,
            Hash::Sha1,
            Hash::Sha224,
            Hash::Sha256,
            Hash::Sha384,
            Hash::Sha512,
            Hash::Ripemd160,
        ] {
            let prefix = hash.asn1_prefix().unwrap();
            assert_eq!(usize::from(prefix[prefix.len() - 1]), hash.size());
        }
    }

    #[test]
    fn sha3_has_no_prefix() {
        assert_eq!(Hash::Sha3_256.asn1_prefix(), None);
        assert_eq!(Hash::Sha3_384.asn1_prefix(), None);
        assert_eq!(Hash::Sha3_512.asn1_prefix(), None);
        assert_eq!(Hash::Md5Sha1.asn1_prefix(), Some(&[][..]));
        assert_eq!(Hash::Md5Sha1.size(), 36);
    }
}
