//! One-shot message digests.

use alloc::string::String;

use digest::Digest;
use md5::Md5;
use sha1::Sha1;
use sha2::Sha256;

macro_rules! digest_fns {
    ($name:ident, $hex_name:ident, $hasher:ty, $len:expr, $doc:expr) => {
        #[doc = concat!("Compute the ", $doc, " digest of `data`.")]
        pub fn $name(data: &[u8]) -> [u8; $len] {
            <$hasher>::digest(data).into()
        }

        #[doc = concat!("Compute the ", $doc, " digest of `data` as lowercase hex.")]
        pub fn $hex_name(data: &[u8]) -> String {
            hex::encode($name(data))
        }
    };
}

digest_fns!(md5, md5_hex, Md5, 16, "MD5");
digest_fns!(sha1, sha1_hex, Sha1, 20, "SHA-1");
digest_fns!(sha256, sha256_hex, Sha256, 32, "SHA-256");
