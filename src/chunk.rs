//! Splitting payloads into key-sized blocks and joining the results.

use alloc::vec::Vec;

/// Split `data` into consecutive blocks of at most `block_size` bytes.
///
/// Input that already fits, or a `block_size` of zero, yields a single block
/// holding the whole input. That includes empty input, so the caller always
/// gets at least one block. Otherwise every block but the last is exactly
/// `block_size` bytes long.
pub fn split(data: &[u8], block_size: usize) -> Vec<&[u8]> {
    if data.len() <= block_size || block_size == 0 {
        return vec![data];
    }

    data.chunks(block_size).collect()
}

/// Concatenate `blocks` in order.
pub fn join<B: AsRef<[u8]>>(blocks: &[B]) -> Vec<u8> {
    let len = blocks.iter().map(|block| block.as_ref().len()).sum();
    let mut out = Vec::with_capacity(len);
    for block in blocks {
        out.extend_from_slice(block.as_ref());
    }
    out
}
