//! Cryptographic operations for binstash.
//!
//! This module provides:
//! - AES-256-CBC message encryption with PKCS#7 padding
//! - PBKDF2-HMAC-SHA256 password-based key derivation

mod cipher;
mod kdf;

pub use cipher::{decrypt_message, encrypt_message, CipherBlob};
pub use kdf::KeyDerivation;
