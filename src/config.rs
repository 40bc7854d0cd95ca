//! Configuration constants and types for binstash.

use crate::error::{Error, Result};
use std::path::PathBuf;

/// Cipher protocol parameters.
///
/// These values are part of the blob wire format; changing them breaks
/// decryption of existing blobs.
pub mod cipher_params {
    /// Salt length in bytes (128 bits).
    pub const SALT_LENGTH: usize = 16;

    /// IV length in bytes (one AES block).
    pub const IV_LENGTH: usize = 16;

    /// Derived key length in bytes (AES-256).
    pub const KEY_LENGTH: usize = 32;

    /// AES block size in bytes.
    pub const BLOCK_SIZE: usize = 16;

    /// Blob header length: salt followed by IV.
    pub const HEADER_LENGTH: usize = SALT_LENGTH + IV_LENGTH;

    /// PBKDF2-HMAC-SHA256 iteration count.
    pub const PBKDF2_ITERATIONS: u32 = 10_000;
}

/// Default number of cover files per batch.
pub const DEFAULT_CONTAINER_COUNT: usize = 10;

/// Default minimum cover file size in bytes.
pub const DEFAULT_MIN_SIZE: u64 = 1024;

/// Default maximum cover file size in bytes.
pub const DEFAULT_MAX_SIZE: u64 = 10240;

/// Default output directory for cover files, relative to the working directory.
pub const DEFAULT_CONTAINER_DIR: &str = "bin_files";

/// File extension shared by all cover files.
pub const CONTAINER_EXTENSION: &str = "bin";

/// Configuration for generating a batch of cover files.
#[derive(Debug, Clone)]
pub struct ContainerConfig {
    /// Number of cover files to create.
    pub count: usize,

    /// Minimum cover file size in bytes.
    pub min_size: u64,

    /// Maximum cover file size in bytes (inclusive).
    pub max_size: u64,

    /// Directory to write cover files into; created if absent.
    pub dir: PathBuf,

    /// Write plaintext readme/technical_info files disclosing the placement.
    ///
    /// This defeats the hiding property and exists for demonstration runs.
    pub disclose: bool,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_CONTAINER_COUNT,
            min_size: DEFAULT_MIN_SIZE,
            max_size: DEFAULT_MAX_SIZE,
            dir: PathBuf::from(DEFAULT_CONTAINER_DIR),
            disclose: true,
        }
    }
}

impl ContainerConfig {
    /// Validate the configuration against the blob that must fit.
    ///
    /// Every drawn file size must be able to hold the blob, so the minimum
    /// size has to be at least the blob length.
    pub fn validate(&self, blob_len: usize) -> Result<()> {
        if self.count == 0 {
            return Err(Error::Configuration(
                "container count must be at least 1".to_string(),
            ));
        }
        if self.min_size > self.max_size {
            return Err(Error::Configuration(format!(
                "minimum size {} exceeds maximum size {}",
                self.min_size, self.max_size
            )));
        }
        if self.min_size < blob_len as u64 {
            return Err(Error::Configuration(format!(
                "cover size range [{}, {}] cannot fit a {}-byte blob",
                self.min_size, self.max_size, blob_len
            )));
        }
        Ok(())
    }
}
