//! binstash — hide an encrypted message inside random binary cover files.
//!
//! A message is encrypted with AES-256-CBC under a PBKDF2-derived key and the
//! resulting blob (`salt || iv || ciphertext`) is embedded at a random offset
//! inside one of several cover files filled with random bytes. Cover and
//! cipher bytes are equally high-entropy, so nothing but knowledge of the
//! placement distinguishes the target file; confidentiality rests entirely on
//! the cipher.
//!
//! # Architecture
//!
//! ```text
//! Message → Encrypt (AES-256-CBC) → Embed (random cover files) → Scan/Reveal
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use binstash::config::ContainerConfig;
//! use binstash::container::generate_containers;
//! use binstash::crypto::{decrypt_message, encrypt_message};
//!
//! let mut rng = rand::thread_rng();
//! let blob = encrypt_message("attack at dawn", "correct horse", &mut rng);
//!
//! let (files, placement) =
//!     generate_containers(&blob, &ContainerConfig::default(), &mut rng).unwrap();
//! println!(
//!     "hidden in {} (1 of {} covers) at offset {}",
//!     placement.path.display(),
//!     files.len(),
//!     placement.offset
//! );
//!
//! // The blob travels out of band as hex; decryption needs only it and the password
//! let plain = decrypt_message(&blob, "correct horse").unwrap();
//! assert_eq!(plain, "attack at dawn");
//! ```

pub mod codegen;
pub mod config;
pub mod container;
pub mod crypto;
pub mod error;
pub mod scan;

pub use config::ContainerConfig;
pub use container::{generate_containers, Placement};
pub use crypto::{decrypt_message, encrypt_message, CipherBlob};
pub use error::{Error, Result};
pub use scan::{scan_bin_files, ScanReport};
