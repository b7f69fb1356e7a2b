//! PKCS#1 v1.5 support as described in [RFC8017 § 8.2].
//!
//! [RFC8017 § 8.2]: https://datatracker.ietf.org/doc/html/rfc8017#section-8.2

use alloc::vec::Vec;
use const_oid::AssociatedOid;
use digest::Digest;
use rand_core::CryptoRngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::Zeroizing;

use crate::errors::{Error, Result};

/// Fixed overhead of a PKCS#1 v1.5 block: two marker bytes, at least eight
/// bytes of padding and the zero separator.
pub(crate) const OVERHEAD: usize = 11;

/// Fills the provided slice with random values, which are guaranteed
/// to not be zero.
#[inline]
fn non_zero_random_bytes<R: CryptoRngCore + ?Sized>(rng: &mut R, data: &mut [u8]) {
    rng.fill_bytes(data);

    for el in data {
        if *el == 0u8 {
            while *el == 0u8 {
                rng.fill_bytes(core::slice::from_mut(el));
            }
        }
    }
}

/// Applies the padding scheme from PKCS#1 v1.5 for encryption. The message must be no longer than
/// the length of the public modulus minus 11 bytes.
pub(crate) fn pkcs1v15_encrypt_pad<R>(
    rng: &mut R,
    msg: &[u8],
    k: usize,
) -> Result<Zeroizing<Vec<u8>>>
where
    R: CryptoRngCore + ?Sized,
{
    if msg.len() + OVERHEAD > k {
        return Err(Error::MessageTooLong);
    }

    // EM = 0x00 || 0x02 || PS || 0x00 || M
    let mut em = Zeroizing::new(vec![0u8; k]);
    em[1] = 2;
    non_zero_random_bytes(rng, &mut em[2..k - msg.len() - 1]);
    em[k - msg.len() - 1] = 0;
    em[k - msg.len()..].copy_from_slice(msg);
    Ok(em)
}

/// Removes the encryption padding scheme from PKCS#1 v1.5.
///
/// Note that whether this function returns an error or not discloses secret
/// information. If an attacker can cause this function to run repeatedly and
/// learn whether each instance returned an error then they can decrypt and
/// forge signatures as if they had the private key.
#[inline]
pub(crate) fn pkcs1v15_encrypt_unpad(em: Vec<u8>, k: usize) -> Result<Vec<u8>> {
    let (valid, out, index) = decrypt_inner(em, k)?;
    if valid == 0 {
        return Err(Error::Decryption);
    }

    Ok(out[index as usize..].to_vec())
}

/// Removes the PKCS1v15 padding. It returns one or zero in valid that indicates whether the
/// plaintext was correctly structured. In either case, the plaintext is
/// returned in em so that it may be read independently of whether it was valid
/// in order to maintain constant memory access patterns. If the plaintext was
/// valid then index contains the index of the original message in em.
#[inline]
fn decrypt_inner(em: Vec<u8>, k: usize) -> Result<(u8, Vec<u8>, u32)> {
    if k < OVERHEAD || em.len() != k {
        return Err(Error::Decryption);
    }

    let first_byte_is_zero = em[0].ct_eq(&0u8);
    let second_byte_is_two = em[1].ct_eq(&2u8);

    // The remainder of the plaintext must be a string of non-zero random
    // octets, followed by a 0, followed by the message.
    //   looking_for_index: 1 iff we are still looking for the zero.
    //   index: the offset of the first zero byte.
    let mut looking_for_index = 1u8;
    let mut index = 0u32;

    for (i, el) in em.iter().enumerate().skip(2) {
        let equals0 = el.ct_eq(&0u8);
        index.conditional_assign(&(i as u32), Choice::from(looking_for_index) & equals0);
        looking_for_index.conditional_assign(&0u8, equals0);
    }

    // The PS padding must be at least 8 bytes long, and it starts two
    // bytes into em.
    let valid_ps = Choice::from((((2i32 + 8i32 - index as i32 - 1i32) >> 31) & 1) as u8);
    let valid =
        first_byte_is_zero & second_byte_is_two & Choice::from(!looking_for_index & 1) & valid_ps;
    index = u32::conditional_select(&0, &(index + 1), valid);

    Ok((valid.unwrap_u8(), em, index))
}

/// Builds `EM = 0x00 || 0x01 || PS || 0x00 || prefix || hashed` with `PS`
/// made of `0xff` bytes.
#[inline]
pub(crate) fn pkcs1v15_sign_pad(prefix: &[u8], hashed: &[u8], k: usize) -> Result<Vec<u8>> {
    let hash_len = hashed.len();
    let t_len = prefix.len() + hashed.len();
    if k < t_len + OVERHEAD {
        return Err(Error::MessageTooLong);
    }

    // EM = 0x00 || 0x01 || PS || 0x00 || T
    let mut em = vec![0xff; k];
    em[0] = 0;
    em[1] = 1;
    em[k - t_len - 1] = 0;
    em[k - t_len..k - hash_len].copy_from_slice(prefix);
    em[k - hash_len..k].copy_from_slice(hashed);

    Ok(em)
}

/// Strips the padding from a block produced with the private key and returns
/// everything after it.
///
/// Starting at offset 2 the scan skips every `0xff` byte, and when the first
/// other byte equals `em[0]` it additionally skips `em[1]` bytes. For a well-formed `00 01 ff.. 00 T` block that lands right after the
/// zero separator. Neither the block type nor the padding length is checked.
/// If the computed offset runs past the end of the block,
/// [`Error::Decryption`] is returned.
pub(crate) fn pkcs1v15_sign_unpad_lenient(em: &[u8]) -> Result<Vec<u8>> {
    if em.len() < 2 {
        return Err(Error::Decryption);
    }

    let mut skip = 2usize;
    for &el in &em[2..] {
        if el == 0xff {
            skip += 1;
        } else {
            if el == em[0] {
                skip += usize::from(em[1]);
            }
            break;
        }
    }

    em.get(skip..)
        .map(<[u8]>::to_vec)
        .ok_or(Error::Decryption)
}

/// prefix = 0x30 <oid_len + 8 + digest_len> 0x30 <oid_len + 4> 0x06 <oid_len> oid 0x05 0x00 0x04 <digest_len>
#[inline]
pub(crate) fn pkcs1v15_generate_prefix<D>() -> Vec<u8>
where
    D: Digest + AssociatedOid,
{
    let oid = D::OID.as_bytes();
    let oid_len = oid.len() as u8;
    let digest_len = <D as Digest>::output_size() as u8;
    let mut v = vec![
        0x30,
        oid_len + 8 + digest_len,
        0x30,
        oid_len + 4,
        0x6,
        oid_len,
    ];
    v.extend_from_slice(oid);
    v.extend_from_slice(&[0x05, 0x00, 0x04, digest_len]);
    v
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;
    use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};

    #[test]
    fn test_non_zero_bytes() {
        for _ in 0..10 {
            let mut rng = ChaCha8Rng::from_seed([42; 32]);
            let mut b = vec![0u8; 512];
            non_zero_random_bytes(&mut rng, &mut b);
            for el in &b {
                assert_ne!(*el, 0u8);
            }
        }
    }

    #[test]
    fn test_encrypt_tiny_no_crash() {
        let mut rng = ChaCha8Rng::from_seed([42; 32]);
        let k = 8;
        let message = vec![1u8; 4];
        let res = pkcs1v15_encrypt_pad(&mut rng, &message, k);
        assert_eq!(res, Err(Error::MessageTooLong));
    }

    #[test]
    fn encrypt_pad_layout() {
        let mut rng = ChaCha8Rng::from_seed([1; 32]);
        let em = pkcs1v15_encrypt_pad(&mut rng, b"hi", 64).unwrap();

        assert_eq!(em.len(), 64);
        assert_eq!(&em[..2], &[0, 2]);
        assert!(em[2..61].iter().all(|&b| b != 0));
        assert_eq!(em[61], 0);
        assert_eq!(&em[62..], b"hi");
        assert_eq!(pkcs1v15_encrypt_unpad(em.to_vec(), 64).unwrap(), b"hi");
    }

    #[test]
    fn encrypt_pad_accepts_exact_capacity() {
        let mut rng = ChaCha8Rng::from_seed([1; 32]);
        let msg = [7u8; 53];
        let em = pkcs1v15_encrypt_pad(&mut rng, &msg, 64).unwrap();
        assert_eq!(pkcs1v15_encrypt_unpad(em.to_vec(), 64).unwrap(), msg);

        let too_long = [7u8; 54];
        assert_eq!(
            pkcs1v15_encrypt_pad(&mut rng, &too_long, 64),
            Err(Error::MessageTooLong)
        );
    }

    #[test]
    fn encrypt_unpad_rejects_short_padding() {
        // Only seven padding bytes before the separator.
        let mut em = vec![0u8; 32];
        em[1] = 2;
        em[2..9].fill(0xaa);
        em[9] = 0;
        em[10..].fill(0x55);

        assert_eq!(pkcs1v15_encrypt_unpad(em, 32), Err(Error::Decryption));
    }

    #[test]
    fn sign_pad_layout() {
        let em = pkcs1v15_sign_pad(&[0xaa, 0xbb], b"msg", 16).unwrap();
        assert_eq!(
            em,
            hex!("00 01 ff ff ff ff ff ff ff ff 00 aa bb 6d 73 67")
        );
        assert_eq!(
            pkcs1v15_sign_pad(&[], &[0u8; 6], 16),
            Err(Error::MessageTooLong)
        );
    }

    #[test]
    fn lenient_unpad_well_formed_block() {
        let em = hex!("00 01 ff ff ff ff ff ff ff ff 00 68 65 6c 6c 6f");
        assert_eq!(pkcs1v15_sign_unpad_lenient(&em).unwrap(), b"hello");
    }

    #[test]
    fn lenient_unpad_ignores_block_type() {
        // A type-2 block has no 0xff run, so the scan stops at offset 2 and,
        // since 0xaa != em[0], nothing more is skipped.
        let em = hex!("00 02 aa bb cc 00 11 22");
        assert_eq!(pkcs1v15_sign_unpad_lenient(&em).unwrap(), &em[2..]);
    }

    #[test]
    fn lenient_unpad_out_of_range_skip() {
        let em = hex!("00 c8 ff ff 00 01 02 03");
        assert_eq!(pkcs1v15_sign_unpad_lenient(&em), Err(Error::Decryption));
    }

    #[test]
    fn lenient_unpad_all_padding() {
        let em = hex!("00 01 ff ff ff ff");
        assert_eq!(pkcs1v15_sign_unpad_lenient(&em).unwrap(), b"");
    }

    #[test]
    fn generated_prefix_matches_digest_info() {
        assert_eq!(
            pkcs1v15_generate_prefix::<sha2::Sha256>(),
            hex!("30 31 30 0d 06 09 60 86 48 01 65 03 04 02 01 05 00 04 20")
        );
        assert_eq!(
            pkcs1v15_generate_prefix::<sha1::Sha1>(),
            hex!("30 21 30 09 06 05 2b 0e 03 02 1a 05 00 04 14")
        );
    }
}
