//! Plaintext disclosure files for demonstration runs.
//!
//! `readme.txt` and `technical_info.txt` name the target container and the
//! exact byte range of the blob in clear text, which defeats the hiding
//! property. They are written only when [`ContainerConfig::disclose`] is set.
//!
//! [`ContainerConfig::disclose`]: crate::config::ContainerConfig

use crate::config::cipher_params;
use crate::container::Placement;
use crate::error::Result;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Write both disclosure files next to the cover files.
pub fn write_disclosure(dir: &Path, placement: &Placement) -> Result<()> {
    let target_size = std::fs::metadata(&placement.path)?.len();
    write_readme(dir, placement)?;
    write_technical_info(dir, placement, target_size)?;
    Ok(())
}

/// Human-readable summary of where the payload lives.
fn write_readme(dir: &Path, placement: &Placement) -> Result<()> {
    let mut f = File::create(dir.join("readme.txt"))?;

    writeln!(f, "Binary file description")?;
    writeln!(f, "========================")?;
    writeln!(f)?;
    writeln!(f, "These files contain encrypted data.")?;
    writeln!(
        f,
        "The encrypted payload is stored in 'file_{}.bin'",
        placement.file_index
    )?;
    writeln!(
        f,
        "Data position: {} bytes from the start of the file",
        placement.offset
    )?;
    writeln!(f, "Encrypted data size: {} bytes", placement.length)?;
    writeln!(f)?;
    writeln!(f, "The correct password is required for decryption.")?;

    Ok(())
}

/// Protocol-level description: algorithm parameters and the placement triple.
fn write_technical_info(dir: &Path, placement: &Placement, target_size: u64) -> Result<()> {
    let mut f = File::create(dir.join("technical_info.txt"))?;

    writeln!(f, "Technical Information")?;
    writeln!(f, "====================")?;
    writeln!(f)?;
    writeln!(f, "File Structure:")?;
    writeln!(
        f,
        "- Salt: {} bytes (used for key derivation)",
        cipher_params::SALT_LENGTH
    )?;
    writeln!(
        f,
        "- IV: {} bytes (initialization vector for CBC mode)",
        cipher_params::IV_LENGTH
    )?;
    writeln!(
        f,
        "- Encrypted data: variable length (padded to the AES block size)"
    )?;
    writeln!(
        f,
        "- Total overhead: {} bytes (salt + IV)",
        cipher_params::HEADER_LENGTH
    )?;
    writeln!(f)?;
    writeln!(f, "Encryption Details:")?;
    writeln!(f, "- Algorithm: AES-256-CBC (Advanced Encryption Standard)")?;
    writeln!(
        f,
        "- Key size: {} bits ({} bytes)",
        cipher_params::KEY_LENGTH * 8,
        cipher_params::KEY_LENGTH
    )?;
    writeln!(
        f,
        "- Block size: {} bits ({} bytes)",
        cipher_params::BLOCK_SIZE * 8,
        cipher_params::BLOCK_SIZE
    )?;
    writeln!(f, "- Mode: CBC (Cipher Block Chaining)")?;
    writeln!(f, "- Padding: PKCS7")?;
    writeln!(f, "- Key derivation: PBKDF2 with SHA256")?;
    writeln!(
        f,
        "- PBKDF2 iterations: {}",
        cipher_params::PBKDF2_ITERATIONS
    )?;
    writeln!(
        f,
        "- Salt size: {} bits ({} bytes)",
        cipher_params::SALT_LENGTH * 8,
        cipher_params::SALT_LENGTH
    )?;
    writeln!(f)?;
    writeln!(f, "File Details:")?;
    writeln!(f, "Target file: file_{}.bin", placement.file_index)?;
    writeln!(f, "Data offset: {} bytes", placement.offset)?;
    writeln!(f, "Data length: {} bytes", placement.length)?;
    writeln!(
        f,
        "Data range: {} - {} bytes",
        placement.offset,
        placement.end()
    )?;
    writeln!(f, "Total file size: {} bytes", target_size)?;

    Ok(())
}
