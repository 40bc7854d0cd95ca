//! PBKDF2 key derivation for password-based encryption.

use crate::config::cipher_params;
use pbkdf2::pbkdf2_hmac;
use rand::{CryptoRng, RngCore};
use sha2::Sha256;

/// Key derivation using PBKDF2-HMAC-SHA256.
#[derive(Debug, Clone)]
pub struct KeyDerivation {
    salt: [u8; cipher_params::SALT_LENGTH],
}

impl KeyDerivation {
    /// Create a new KDF with a random salt drawn from `rng`.
    pub fn new(rng: &mut (impl RngCore + CryptoRng)) -> Self {
        let mut salt = [0u8; cipher_params::SALT_LENGTH];
        rng.fill_bytes(&mut salt);
        Self { salt }
    }

    /// Create a KDF from an existing salt (for decryption).
    pub fn from_salt(salt: [u8; cipher_params::SALT_LENGTH]) -> Self {
        Self { salt }
    }

    /// Get the salt for storage in the blob header.
    pub fn salt(&self) -> &[u8; cipher_params::SALT_LENGTH] {
        &self.salt
    }

    /// Derive a 256-bit key from a password.
    ///
    /// Uses PBKDF2-HMAC-SHA256 with 10 000 iterations. Deterministic for a
    /// given (password, salt) pair, so decryption re-derives the same key
    /// from the salt embedded in the blob.
    pub fn derive_key(&self, password: &str) -> [u8; cipher_params::KEY_LENGTH] {
        let mut key = [0u8; cipher_params::KEY_LENGTH];
        pbkdf2_hmac::<Sha256>(
            password.as_bytes(),
            &self.salt,
            cipher_params::PBKDF2_ITERATIONS,
            &mut key,
        );
        key
    }
}
