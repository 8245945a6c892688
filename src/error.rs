/// Errors reported by the strict decoding operations.
///
/// The `*_unsafe` variants report the same conditions as `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The input contained a symbol outside the base58 alphabet.
    #[error("Non base58 character")]
    NonBase58Character,

    /// The embedded checksum did not match the payload, or the decoded
    /// buffer was too short to hold one.
    #[error("Invalid checksum")]
    InvalidChecksum,
}

pub type Result<T> = std::result::Result<T, Error>;
