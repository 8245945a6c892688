//! Base58Check encoding over a pluggable digest.
//!
//! Composes the plain converter in [`crate::base58`] with the tag handling in
//! [`crate::checksum`].

use log::{debug, trace};

use crate::base58;
use crate::checksum;
use crate::error::{Error, Result};
use crate::hash::{HashProvider, Sha256, DIGEST_LEN};

/// Base58Check encoder/decoder bound to a digest provider.
///
/// `Codec::new()` uses SHA-256, which is what every other Base58Check
/// implementation expects. Use [`Codec::with_hasher`] to supply a different
/// digest.
#[derive(Debug, Default, Clone, Copy)]
pub struct Codec<H = Sha256> {
    hasher: H,
}

impl Codec<Sha256> {
    /// A codec using SHA-256.
    pub fn new() -> Self {
        Codec { hasher: Sha256 }
    }
}

impl<H: HashProvider> Codec<H> {
    /// A codec using `hasher` for both rounds of the checksum.
    pub fn with_hasher(hasher: H) -> Self {
        Codec { hasher }
    }

    /// The digest provider this codec was built with.
    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    /// Double hash of `payload`; the first four bytes form the tag.
    pub fn checksum(&self, payload: &[u8]) -> [u8; DIGEST_LEN] {
        checksum::checksum(&self.hasher, payload)
    }

    /// Encode `payload` with its checksum appended.
    pub fn encode(&self, payload: &[u8]) -> String {
        let buffer = checksum::append(&self.hasher, payload);
        trace!("encoding {} byte payload with checksum", payload.len());
        base58::encode_plain(&buffer)
    }

    /// Verify the trailing tag of an already decoded buffer and strip it.
    pub fn decode_raw(&self, buffer: &[u8]) -> Option<Vec<u8>> {
        checksum::verify(&self.hasher, buffer).map(<[u8]>::to_vec)
    }

    /// Decode and verify, returning `None` on any failure.
    pub fn decode_unsafe(&self, text: &str) -> Option<Vec<u8>> {
        let buffer = base58::decode_plain_unsafe(text)?;
        self.decode_raw(&buffer)
    }

    /// Decode and verify, distinguishing alphabet from checksum failures.
    pub fn decode(&self, text: &str) -> Result<Vec<u8>> {
        let buffer = base58::decode_plain(text).map_err(|e| {
            debug!("rejecting {} character input: {}", text.len(), e);
            e
        })?;
        self.decode_raw(&buffer).ok_or(Error::InvalidChecksum)
    }

    pub fn encode_plain(&self, source: &[u8]) -> String {
        base58::encode_plain(source)
    }

    pub fn decode_plain(&self, text: &str) -> Result<Vec<u8>> {
        base58::decode_plain(text)
    }

    pub fn decode_plain_unsafe(&self, text: &str) -> Option<Vec<u8>> {
        base58::decode_plain_unsafe(text)
    }
}
