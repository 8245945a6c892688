//! The digest capability behind the checksum.
//!
//! Checksums only need a deterministic 32-byte digest. SHA-256 is the
//! default and the only choice that interoperates with other Base58Check
//! implementations, but any provider can be injected into a
//! [`Codec`](crate::Codec).

use bitcoin::hashes::{sha256 as bitcoin_sha256, Hash};

/// Output length of a [`HashProvider`].
pub const DIGEST_LEN: usize = 32;

/// A one-way function from arbitrary bytes to a 32-byte digest.
pub trait HashProvider {
    fn hash(&self, data: &[u8]) -> [u8; DIGEST_LEN];
}

/// SHA-256, backed by `bitcoin::hashes`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Sha256;

impl HashProvider for Sha256 {
    fn hash(&self, data: &[u8]) -> [u8; DIGEST_LEN] {
        sha256(data)
    }
}

impl<F> HashProvider for F
where
    F: Fn(&[u8]) -> [u8; DIGEST_LEN],
{
    fn hash(&self, data: &[u8]) -> [u8; DIGEST_LEN] {
        self(data)
    }
}

/// Compute the SHA-256 digest of `data`.
pub fn sha256(data: &[u8]) -> [u8; DIGEST_LEN] {
    bitcoin_sha256::Hash::hash(data).to_byte_array()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256_empty() {
        assert_eq!(
            hex::encode(sha256(b"")),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn sha256_abc() {
        assert_eq!(
            hex::encode(Sha256.hash(b"abc")),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn closures_are_providers() {
        let constant = |_: &[u8]| [7u8; DIGEST_LEN];
        assert_eq!(constant.hash(b"anything"), [7u8; DIGEST_LEN]);
    }
}
