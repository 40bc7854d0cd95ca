//! AES-256-CBC message encryption.
//!
//! A blob is `salt (16) || iv (16) || ciphertext`, where the ciphertext is
//! the PKCS#7-padded plaintext encrypted in CBC mode. Salt and IV are fresh
//! per encryption, so identical messages never produce identical blobs.

use crate::config::cipher_params::{BLOCK_SIZE, HEADER_LENGTH, IV_LENGTH, SALT_LENGTH};
use crate::crypto::kdf::KeyDerivation;
use crate::error::{Error, Result};
use aes::cipher::block_padding::Pkcs7;
use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use rand::{CryptoRng, RngCore};

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// A self-describing encrypted payload.
///
/// Carries everything decryption needs besides the password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherBlob {
    /// Salt for key derivation.
    pub salt: [u8; SALT_LENGTH],
    /// CBC initialization vector.
    pub iv: [u8; IV_LENGTH],
    /// PKCS#7-padded encrypted payload, a positive multiple of the block size.
    pub ciphertext: Vec<u8>,
}

impl CipherBlob {
    /// Parse a blob from raw bytes.
    ///
    /// Fails with [`Error::MalformedBlob`] if the input is shorter than the
    /// header plus one block, or if the ciphertext is misaligned to the
    /// block size.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < HEADER_LENGTH + BLOCK_SIZE {
            return Err(Error::MalformedBlob(format!(
                "blob is {} bytes, need at least {}",
                bytes.len(),
                HEADER_LENGTH + BLOCK_SIZE
            )));
        }

        let ciphertext = &bytes[HEADER_LENGTH..];
        if ciphertext.len() % BLOCK_SIZE != 0 {
            return Err(Error::MalformedBlob(format!(
                "ciphertext length {} is not a multiple of the {}-byte block size",
                ciphertext.len(),
                BLOCK_SIZE
            )));
        }

        let mut salt = [0u8; SALT_LENGTH];
        let mut iv = [0u8; IV_LENGTH];
        salt.copy_from_slice(&bytes[..SALT_LENGTH]);
        iv.copy_from_slice(&bytes[SALT_LENGTH..HEADER_LENGTH]);

        Ok(Self {
            salt,
            iv,
            ciphertext: ciphertext.to_vec(),
        })
    }

    /// Parse a blob from its hex wire form.
    pub fn from_hex(input: &str) -> Result<Self> {
        let bytes = hex::decode(input.trim())?;
        Self::parse(&bytes)
    }

    /// Serialize to `salt || iv || ciphertext`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.size());
        out.extend_from_slice(&self.salt);
        out.extend_from_slice(&self.iv);
        out.extend_from_slice(&self.ciphertext);
        out
    }

    /// Hex wire form of the serialized blob.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Total serialized size in bytes.
    pub fn size(&self) -> usize {
        HEADER_LENGTH + self.ciphertext.len()
    }
}

/// Encrypt a message with a password.
///
/// Derives a fresh key via [`KeyDerivation`] and encrypts with AES-256-CBC
/// under a random IV. Salt and IV are drawn from `rng`; the IV never repeats
/// under the same key since both are randomized per call.
pub fn encrypt_message(
    plaintext: &str,
    password: &str,
    rng: &mut (impl RngCore + CryptoRng),
) -> CipherBlob {
    let kdf = KeyDerivation::new(rng);
    let key = kdf.derive_key(password);

    let mut iv = [0u8; IV_LENGTH];
    rng.fill_bytes(&mut iv);

    let ciphertext = Aes256CbcEnc::new(&key.into(), &iv.into())
        .encrypt_padded_vec_mut::<Pkcs7>(plaintext.as_bytes());

    CipherBlob {
        salt: *kdf.salt(),
        iv,
        ciphertext,
    }
}

/// Decrypt a blob with a password.
///
/// Re-derives the key from the password and the blob's embedded salt.
/// Fails with [`Error::Padding`] when the padding is inconsistent (almost
/// always a wrong password) and [`Error::Encoding`] when the decrypted bytes
/// are not valid UTF-8. Never returns garbage as success.
pub fn decrypt_message(blob: &CipherBlob, password: &str) -> Result<String> {
    let kdf = KeyDerivation::from_salt(blob.salt);
    let key = kdf.derive_key(password);

    let plaintext = Aes256CbcDec::new(&key.into(), &blob.iv.into())
        .decrypt_padded_vec_mut::<Pkcs7>(&blob.ciphertext)
        .map_err(|_| Error::Padding)?;

    String::from_utf8(plaintext).map_err(|_| Error::Encoding)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_encrypt_decrypt_roundtrip() {
        let mut rng = StdRng::seed_from_u64(1);
        let blob = encrypt_message("Hello, World! This is a secret message.", "pw123", &mut rng);
        let decrypted = decrypt_message(&blob, "pw123").unwrap();

        assert_eq!(decrypted, "Hello, World! This is a secret message.");
    }

    #[test]
    fn test_wrong_password_fails() {
        let mut rng = StdRng::seed_from_u64(2);
        let blob = encrypt_message("Secret data", "correct_password", &mut rng);

        let result = decrypt_message(&blob, "wrong_password");
        assert!(matches!(result, Err(Error::Padding) | Err(Error::Encoding)));
    }

    #[test]
    fn test_different_encryptions_different_blobs() {
        let mut rng = StdRng::seed_from_u64(3);
        let blob1 = encrypt_message("Same message", "password", &mut rng);
        let blob2 = encrypt_message("Same message", "password", &mut rng);

        // Fresh salt and IV per call
        assert_ne!(blob1.salt, blob2.salt);
        assert_ne!(blob1.iv, blob2.iv);
        assert_ne!(blob1.ciphertext, blob2.ciphertext);
    }

    #[test]
    fn test_blob_size_accounting() {
        let mut rng = StdRng::seed_from_u64(4);

        // 11 bytes pad to one 16-byte block: 16 salt + 16 iv + 16 ciphertext
        let blob = encrypt_message("Hello World", "mysecretkey", &mut rng);
        assert_eq!(blob.size(), 48);

        // An exact multiple of the block size gains a full padding block
        let blob = encrypt_message("0123456789abcdef", "mysecretkey", &mut rng);
        assert_eq!(blob.size(), 64);

        // Empty plaintext still pads to one block
        let blob = encrypt_message("", "mysecretkey", &mut rng);
        assert_eq!(blob.size(), 48);
    }

    #[test]
    fn test_hex_roundtrip() {
        let mut rng = StdRng::seed_from_u64(5);
        let blob = encrypt_message("wire format test", "pw", &mut rng);

        let restored = CipherBlob::from_hex(&blob.to_hex()).unwrap();
        assert_eq!(restored, blob);
        assert_eq!(decrypt_message(&restored, "pw").unwrap(), "wire format test");
    }

    #[test]
    fn test_parse_too_short() {
        let result = CipherBlob::parse(&[0u8; 32]);
        assert!(matches!(result, Err(Error::MalformedBlob(_))));
    }

    #[test]
    fn test_parse_misaligned_ciphertext() {
        // 32-byte header plus 17 ciphertext bytes
        let result = CipherBlob::parse(&[0u8; 49]);
        assert!(matches!(result, Err(Error::MalformedBlob(_))));
    }

    #[test]
    fn test_parse_splits_header() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&[1u8; 16]);
        bytes.extend_from_slice(&[2u8; 16]);
        bytes.extend_from_slice(&[3u8; 32]);

        let blob = CipherBlob::parse(&bytes).unwrap();
        assert_eq!(blob.salt, [1u8; 16]);
        assert_eq!(blob.iv, [2u8; 16]);
        assert_eq!(blob.ciphertext, vec![3u8; 32]);
        assert_eq!(blob.to_bytes(), bytes);
    }

    #[test]
    fn test_tampered_ciphertext_fails() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut blob = encrypt_message("Secret data", "password", &mut rng);

        // Flip a bit in the last block; unpadding must reject it
        if let Some(byte) = blob.ciphertext.last_mut() {
            *byte ^= 0xFF;
        }

        let result = decrypt_message(&blob, "password");
        assert!(matches!(result, Err(Error::Padding) | Err(Error::Encoding)));
    }

    #[test]
    fn test_invalid_hex_rejected() {
        let result = CipherBlob::from_hex("not hex at all!");
        assert!(matches!(result, Err(Error::Hex(_))));
    }

    #[test]
    fn test_non_ascii_plaintext_roundtrip() {
        let mut rng = StdRng::seed_from_u64(8);
        let blob = encrypt_message("привет мир", "пароль", &mut rng);

        assert_eq!(decrypt_message(&blob, "пароль").unwrap(), "привет мир");
    }
}
