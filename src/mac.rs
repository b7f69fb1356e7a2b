//! HMAC tags over the SHA-1 and SHA-2 families.

use alloc::string::String;
use alloc::vec::Vec;

use hmac::{Hmac, Mac};
use sha1::Sha1;
use sha2::{Sha224, Sha256, Sha384, Sha512};

use crate::errors::{Error, Result};

macro_rules! hmac_fns {
    ($name:ident, $hex_name:ident, $hasher:ty, $doc:expr) => {
        #[doc = concat!("Compute the HMAC-", $doc, " tag of `data` under `secret`.")]
        pub fn $name(secret: &[u8], data: &[u8]) -> Result<Vec<u8>> {
            let mut mac =
                <Hmac<$hasher>>::new_from_slice(secret).map_err(|_| Error::InvalidKeyLength)?;
            mac.update(data);
            Ok(mac.finalize().into_bytes().to_vec())
        }

        #[doc = concat!("Compute the HMAC-", $doc, " tag of `data` under `secret` as lowercase hex.")]
        pub fn $hex_name(secret: &[u8], data: &[u8]) -> Result<String> {
            $name(secret, data).map(hex::encode)
        }
    };
}

hmac_fns!(hmac_sha1, hmac_sha1_hex, Sha1, "SHA1");
hmac_fns!(hmac_sha224, hmac_sha224_hex, Sha224, "SHA224");
hmac_fns!(hmac_sha256, hmac_sha256_hex, Sha256, "SHA256");
hmac_fns!(hmac_sha384, hmac_sha384_hex, Sha384, "SHA384");
hmac_fns!(hmac_sha512, hmac_sha512_hex, Sha512, "SHA512");

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    const SECRET: &[u8] = b"123456";
    const MESSAGE: &[u8] = b"hello world";

    #[test]
    fn known_answers() {
        assert_eq!(
            hmac_sha1(SECRET, MESSAGE).unwrap(),
            hex!("4873e80b320876fef98bd5857a7146db412007c7")
        );
        assert_eq!(
            hmac_sha224_hex(SECRET, MESSAGE).unwrap(),
            "4f358a44c7bfaf92a2aa3e015d06a6913cc22dd1d684efbb3ce71755"
        );
        assert_eq!(
            hmac_sha256_hex(SECRET, MESSAGE).unwrap(),
            "83b3eb2788457b46a2f17aaa048f795af0d9dabb8e5924dd2fc0ea682d929fe5"
        );
        assert_eq!(
            hmac_sha384_hex(SECRET, MESSAGE).unwrap(),
            "1959aa7cce0c3aef75dd794d1a63bdce95fcac6ef327d8396ffc9b0f99d5a78387be7ea14c6fccaeae25c30a05e3a488"
        );
        assert_eq!(
            hmac_sha512_hex(SECRET, MESSAGE).unwrap(),
            "6c9c251365f3507dc923023fd8e180925eee0dc0bb467d156edc21b9889fc1115cbd7a948090abb59b31718e83978900d7582993392d90d2835ee13c9f2fbb69"
        );
    }

    #[test]
    fn empty_secret_is_accepted() {
        assert_eq!(hmac_sha256(b"", MESSAGE).unwrap().len(), 32);
    }
}
