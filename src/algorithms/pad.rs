//! Laying integers out as modulus-sized blocks.
//!
//! Every RSA block this crate emits or unpads is exactly `k` bytes, `k`
//! being the modulus size. Results of `modpow` lose their leading zero bytes,
//! so they are put back here.

use alloc::vec::Vec;
use num_bigint::BigUint;
use zeroize::Zeroizing;

use crate::errors::{Error, Result};

/// Right-align `input` in a zeroed block of `block_len` bytes.
///
/// Fails with [`Error::InvalidPadLen`] if `input` does not fit.
#[inline]
fn left_pad(input: &[u8], block_len: usize) -> Result<Vec<u8>> {
    let offset = block_len
        .checked_sub(input.len())
        .ok_or(Error::InvalidPadLen)?;

    let mut block = vec![0u8; block_len];
    block[offset..].copy_from_slice(input);
    Ok(block)
}

/// Big-endian bytes of `input` as a `block_len` byte block.
#[inline]
pub(crate) fn uint_to_be_pad(input: BigUint, block_len: usize) -> Result<Vec<u8>> {
    left_pad(&input.to_bytes_be(), block_len)
}

/// Same as [`uint_to_be_pad`] for secret values: the integer and its
/// unpadded bytes are wiped on return.
#[inline]
pub(crate) fn uint_to_zeroizing_be_pad(input: BigUint, block_len: usize) -> Result<Vec<u8>> {
    let m = Zeroizing::new(input);
    let m = Zeroizing::new(m.to_bytes_be());
    left_pad(&m, block_len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_input_is_right_aligned() {
        assert_eq!(left_pad(&[7, 8], 4).unwrap(), [0, 0, 7, 8]);
        assert_eq!(left_pad(&[], 3).unwrap(), [0, 0, 0]);
    }

    #[test]
    fn exact_fit_is_unchanged() {
        assert_eq!(left_pad(&[1, 2, 3], 3).unwrap(), [1, 2, 3]);
    }

    #[test]
    fn oversized_input_is_rejected() {
        assert_eq!(left_pad(&[1, 2, 3], 2), Err(Error::InvalidPadLen));
        assert_eq!(
            uint_to_be_pad(BigUint::from(0x010000u32), 2),
            Err(Error::InvalidPadLen)
        );
    }

    #[test]
    fn leading_zero_bytes_restored() {
        let value = BigUint::from(0x0102u32);
        assert_eq!(uint_to_be_pad(value.clone(), 4).unwrap(), [0, 0, 1, 2]);
        assert_eq!(uint_to_zeroizing_be_pad(value, 2).unwrap(), [1, 2]);
    }
}
