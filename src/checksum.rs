//! The four-byte integrity tag appended before base58 encoding.
//!
//! The tag is the first four bytes of `hash(hash(payload))`.

use log::debug;

use crate::hash::{HashProvider, DIGEST_LEN};

/// Length of the tag appended to every payload.
pub const CHECKSUM_LEN: usize = 4;

/// Double hash of `payload`. The tag is the first [`CHECKSUM_LEN`] bytes.
pub fn checksum<H: HashProvider + ?Sized>(hasher: &H, payload: &[u8]) -> [u8; DIGEST_LEN] {
    let first = hasher.hash(payload);
    hasher.hash(&first)
}

/// The truncated checksum of `payload`.
pub fn tag<H: HashProvider + ?Sized>(hasher: &H, payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    let digest = checksum(hasher, payload);
    let mut tag = [0u8; CHECKSUM_LEN];
    tag.copy_from_slice(&digest[..CHECKSUM_LEN]);
    tag
}

/// `payload` followed by its tag.
pub fn append<H: HashProvider + ?Sized>(hasher: &H, payload: &[u8]) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(payload.len() + CHECKSUM_LEN);
    buffer.extend_from_slice(payload);
    buffer.extend_from_slice(&tag(hasher, payload));
    buffer
}

/// Split a checksummed buffer and check its tag, returning the payload.
///
/// `None` when the buffer is shorter than a tag or the tag does not match.
pub fn verify<'a, H: HashProvider + ?Sized>(hasher: &H, buffer: &'a [u8]) -> Option<&'a [u8]> {
    if buffer.len() < CHECKSUM_LEN {
        debug!("checksummed buffer of {} bytes is shorter than its tag", buffer.len());
        return None;
    }
    let (payload, supplied) = buffer.split_at(buffer.len() - CHECKSUM_LEN);
    let expected = tag(hasher, payload);
    if !tags_match(supplied, &expected) {
        debug!("checksum mismatch on {} byte payload", payload.len());
        return None;
    }
    Some(payload)
}

// Folds every byte so the comparison has the same shape on match and mismatch.
fn tags_match(supplied: &[u8], expected: &[u8; CHECKSUM_LEN]) -> bool {
    supplied
        .iter()
        .zip(expected)
        .fold(0u8, |diff, (a, b)| diff | (a ^ b))
        == 0
}
