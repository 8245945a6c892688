//! Base58Check: base58 text with a four-byte double-SHA-256 checksum.
//!
//! ```
//! let encoded = base58check::encode(&[0x00, 0x01, 0x09, 0x66, 0x77, 0x60, 0x60]);
//! assert_eq!(encoded, "14NwG2pmMxnAwm");
//! assert_eq!(
//!     base58check::decode(&encoded).unwrap(),
//!     [0x00, 0x01, 0x09, 0x66, 0x77, 0x60, 0x60]
//! );
//! assert_eq!(base58check::decode_unsafe("14NwG2pmMxnAw0"), None);
//! ```

pub mod alphabet;
pub mod base58;
pub mod checksum;
pub mod codec;
pub mod error;
pub mod hash;

pub use base58::{decode_plain, decode_plain_unsafe, encode_plain};
pub use checksum::CHECKSUM_LEN;
pub use codec::Codec;
pub use error::{Error, Result};
pub use hash::{sha256, HashProvider, Sha256};

/// Encode `payload` with a SHA-256 checksum.
pub fn encode(payload: &[u8]) -> String {
    Codec::new().encode(payload)
}

/// Decode and verify a Base58Check string.
pub fn decode(text: &str) -> Result<Vec<u8>> {
    Codec::new().decode(text)
}

/// Decode and verify a Base58Check string, `None` on any failure.
pub fn decode_unsafe(text: &str) -> Option<Vec<u8>> {
    Codec::new().decode_unsafe(text)
}

/// Verify and strip the tag of a decoded, checksummed buffer.
pub fn decode_raw(buffer: &[u8]) -> Option<Vec<u8>> {
    Codec::new().decode_raw(buffer)
}

/// SHA-256 applied twice to `payload`.
pub fn checksum(payload: &[u8]) -> [u8; hash::DIGEST_LEN] {
    Codec::new().checksum(payload)
}
