//! Error types for binstash operations.

use thiserror::Error;

/// Result type alias for binstash operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in binstash operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error during container generation or scanning.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Blob is structurally invalid (too short or misaligned to the block size).
    #[error("Malformed blob: {0}")]
    MalformedBlob(String),

    /// Decryption produced inconsistent padding (wrong password or corrupted data).
    #[error("Invalid padding: wrong password or corrupted data")]
    Padding,

    /// Decrypted bytes are not valid UTF-8.
    #[error("Decrypted data is not valid UTF-8 text")]
    Encoding,

    /// Container configuration cannot accommodate the blob.
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// Hex input could not be decoded.
    #[error("Invalid hex input: {0}")]
    Hex(#[from] hex::FromHexError),
}
