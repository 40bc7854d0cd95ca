//! Batch generation of random cover files with one embedded blob.

use crate::config::ContainerConfig;
use crate::container::disclosure;
use crate::crypto::CipherBlob;
use crate::error::Result;
use rand::{CryptoRng, Rng, RngCore};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// Location of a blob within a container batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// Index of the target file within the batch.
    pub file_index: usize,
    /// Path to the target file.
    pub path: PathBuf,
    /// Byte offset of the blob within the target file.
    pub offset: u64,
    /// Blob length in bytes.
    pub length: usize,
}

impl Placement {
    /// End of the blob's byte range (exclusive).
    pub fn end(&self) -> u64 {
        self.offset + self.length as u64
    }
}

/// Generate a batch of cover files with the blob embedded in one of them.
///
/// Creates `config.count` files named `file_{i}.bin` under `config.dir`
/// (created if absent). Each file's size is drawn uniformly from
/// `[min_size, max_size]`; one file, chosen uniformly at random, carries the
/// blob at an offset drawn uniformly from `[0, size - blob_len]`. All other
/// bytes come from `rng`.
///
/// Any per-file write failure aborts the whole batch; a partial batch is not
/// a valid result. When `config.disclose` is set, plaintext description
/// files revealing the placement are written alongside the covers.
pub fn generate_containers(
    blob: &CipherBlob,
    config: &ContainerConfig,
    rng: &mut (impl RngCore + CryptoRng),
) -> Result<(Vec<PathBuf>, Placement)> {
    let blob_bytes = blob.to_bytes();
    config.validate(blob_bytes.len())?;

    std::fs::create_dir_all(&config.dir)?;

    let target_index = rng.gen_range(0..config.count);
    let mut paths = Vec::with_capacity(config.count);
    let mut placement = None;

    for i in 0..config.count {
        let path = config.dir.join(format!("file_{i}.bin"));
        let file_size = rng.gen_range(config.min_size..=config.max_size);

        let mut file = File::create(&path)?;
        if i == target_index {
            let offset = rng.gen_range(0..=file_size - blob_bytes.len() as u64);
            write_random(&mut file, offset, rng)?;
            file.write_all(&blob_bytes)?;
            write_random(&mut file, file_size - offset - blob_bytes.len() as u64, rng)?;

            placement = Some(Placement {
                file_index: i,
                path: path.clone(),
                offset,
                length: blob_bytes.len(),
            });
        } else {
            write_random(&mut file, file_size, rng)?;
        }
        file.sync_all()?;
        paths.push(path);
    }

    let placement = placement.expect("target index lies within the batch");

    if config.disclose {
        disclosure::write_disclosure(&config.dir, &placement)?;
    }

    Ok((paths, placement))
}

/// Write `len` random bytes to `file` in fixed-size chunks.
fn write_random(file: &mut File, len: u64, rng: &mut impl RngCore) -> Result<()> {
    const CHUNK: usize = 8192;
    let mut buf = [0u8; CHUNK];
    let mut remaining = len;

    while remaining > 0 {
        let n = remaining.min(CHUNK as u64) as usize;
        rng.fill_bytes(&mut buf[..n]);
        file.write_all(&buf[..n])?;
        remaining -= n as u64;
    }

    Ok(())
}
