//! RFC 7468 PEM armor for key material.
//!
//! Encoding always produces 64 column base64 lines with LF line endings.
//! Decoding looks at the first `-----BEGIN …-----` / `-----END …-----` pair
//! in the input and ignores any text around it, including further blocks.
//! Inside the block it accepts any line width and stray whitespace, the way
//! keys written by other tools are laid out.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use base64ct::{Base64, Encoding};
use pem_rfc7468::LineEnding;
use zeroize::Zeroizing;

use crate::errors::Result;

/// Label used for private keys, whichever serialization they carry.
pub const PRIVATE_KEY_LABEL: &str = "RSA PRIVATE KEY";

/// Label used for public keys.
pub const PUBLIC_KEY_LABEL: &str = "PUBLIC KEY";

const BEGIN: &str = "-----BEGIN ";
const END: &str = "-----END ";
const BOUNDARY_TAIL: &str = "-----";

/// A decoded PEM block.
#[derive(Clone, PartialEq, Eq)]
pub struct Block {
    /// Type label taken from the encapsulation boundaries.
    pub label: String,

    /// Decoded payload.
    pub contents: Zeroizing<Vec<u8>>,
}

impl fmt::Debug for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Block")
            .field("label", &self.label)
            .field("len", &self.contents.len())
            .finish_non_exhaustive()
    }
}

/// Armor `bytes` under `label`.
pub fn encode(label: &str, bytes: &[u8]) -> Result<String> {
    Ok(pem_rfc7468::encode_string(label, LineEnding::LF, bytes)?)
}

/// Decode the first PEM block found in `text`.
///
/// The body may be wrapped at any width and may carry stray whitespace,
/// including after the boundary lines. An empty body decodes to empty
/// contents.
pub fn decode(text: &str) -> Result<Block> {
    let (label, body) = first_block(text)?;

    let mut base64 = Zeroizing::new(String::with_capacity(body.len()));
    base64.extend(body.chars().filter(|c| !c.is_ascii_whitespace()));
    let contents = Base64::decode_vec(&base64).map_err(pem_rfc7468::Error::Base64)?;

    Ok(Block {
        label: label.to_string(),
        contents: Zeroizing::new(contents),
    })
}

/// Splits the first complete block into its label and its unparsed body.
fn first_block(text: &str) -> Result<(&str, &str)> {
    let start = text
        .find(BEGIN)
        .ok_or(pem_rfc7468::Error::PreEncapsulationBoundary)?;

    let rest = &text[start + BEGIN.len()..];
    let label_len = rest
        .find(BOUNDARY_TAIL)
        .ok_or(pem_rfc7468::Error::PreEncapsulationBoundary)?;
    let label = &rest[..label_len];
    if label.contains(['\r', '\n']) {
        return Err(pem_rfc7468::Error::PreEncapsulationBoundary.into());
    }

    let rest = &rest[label_len + BOUNDARY_TAIL.len()..];
    let body_len = rest
        .find(END)
        .ok_or(pem_rfc7468::Error::PostEncapsulationBoundary)?;
    let body = &rest[..body_len];

    let rest = &rest[body_len + END.len()..];
    let end_label_len = rest
        .find(BOUNDARY_TAIL)
        .ok_or(pem_rfc7468::Error::PostEncapsulationBoundary)?;
    if &rest[..end_label_len] != label {
        return Err(pem_rfc7468::Error::Label.into());
    }

    Ok((label, body))
}
