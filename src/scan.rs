//! Byte-range scanner for `.bin` files under a directory tree.
//!
//! The retrieval companion to container generation: given an offset and a
//! length (obtained out of band, e.g. from the disclosure files), it reads
//! that range from every candidate container and renders the bytes for
//! inspection.

use crate::config::CONTAINER_EXTENSION;
use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Numeric interpretation of a scanned byte range.
///
/// Only ranges of exactly 4 or 8 bytes have one. Bytes are interpreted as
/// signed little-endian integers regardless of platform byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericValue {
    Int32(i32),
    Int64(i64),
}

/// One successfully read byte range.
#[derive(Debug, Clone)]
pub struct ScanHit {
    /// File the range was read from.
    pub path: PathBuf,
    /// The raw bytes, exactly `length` of them.
    pub bytes: Vec<u8>,
    /// ASCII rendering with non-ASCII bytes dropped.
    pub text: String,
    /// Present only when the range is exactly 4 or 8 bytes; `None` means
    /// "not applicable", never a swallowed error.
    pub numeric: Option<NumericValue>,
}

/// A per-file failure that did not abort the scan.
#[derive(Debug)]
pub struct ScanFailure {
    pub path: PathBuf,
    pub error: std::io::Error,
}

/// Result of scanning a directory tree.
#[derive(Debug, Default)]
pub struct ScanReport {
    /// Files that yielded the full byte range, ordered by path.
    pub hits: Vec<ScanHit>,
    /// Files that could not be read at all.
    pub failures: Vec<ScanFailure>,
}

/// Read `length` bytes at `offset` from every `.bin` file under `root`.
///
/// Files too short for the full range (offset past end-of-file, or a tail
/// shorter than `length`) yield no hit rather than a partial read. Per-file
/// I/O errors are collected in the report instead of aborting the scan.
/// Candidates are visited in path order, so scanning an unchanged tree twice
/// produces identical reports.
pub fn scan_bin_files(root: &Path, offset: u64, length: usize) -> ScanReport {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .filter(|e| e.path().extension().and_then(|x| x.to_str()) == Some(CONTAINER_EXTENSION))
        .map(|e| e.into_path())
        .collect();
    files.sort();

    let mut report = ScanReport::default();
    for path in files {
        match read_range(&path, offset, length) {
            Ok(Some(bytes)) => report.hits.push(make_hit(path, bytes)),
            Ok(None) => {}
            Err(error) => report.failures.push(ScanFailure { path, error }),
        }
    }

    report
}

/// Read exactly `length` bytes at `offset`, or `None` if the file is too short.
fn read_range(path: &Path, offset: u64, length: usize) -> std::io::Result<Option<Vec<u8>>> {
    let mut file = File::open(path)?;
    let file_len = file.metadata()?.len();

    let in_bounds = offset
        .checked_add(length as u64)
        .map_or(false, |end| end <= file_len);
    if !in_bounds {
        return Ok(None);
    }

    file.seek(SeekFrom::Start(offset))?;
    let mut buf = vec![0u8; length];
    file.read_exact(&mut buf)?;

    Ok(Some(buf))
}

fn make_hit(path: PathBuf, bytes: Vec<u8>) -> ScanHit {
    let text = bytes
        .iter()
        .filter(|b| b.is_ascii())
        .map(|&b| b as char)
        .collect();
    let numeric = interpret_numeric(&bytes);

    ScanHit {
        path,
        bytes,
        text,
        numeric,
    }
}

/// Interpret exactly 4 or 8 bytes as a signed little-endian integer.
fn interpret_numeric(bytes: &[u8]) -> Option<NumericValue> {
    match bytes.len() {
        4 => bytes
            .try_into()
            .ok()
            .map(|b: [u8; 4]| NumericValue::Int32(i32::from_le_bytes(b))),
        8 => bytes
            .try_into()
            .ok()
            .map(|b: [u8; 8]| NumericValue::Int64(i64::from_le_bytes(b))),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_bin(dir: &Path, name: &str, content: &[u8]) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_reads_exact_range() {
        let dir = TempDir::new().unwrap();
        write_bin(dir.path(), "data.bin", b"0123456789abcdef");

        let report = scan_bin_files(dir.path(), 4, 6);

        assert_eq!(report.hits.len(), 1);
        assert_eq!(report.hits[0].bytes, b"456789");
        assert_eq!(report.hits[0].text, "456789");
        assert!(report.failures.is_empty());
    }

    #[test]
    fn test_offset_beyond_eof_yields_no_hit() {
        let dir = TempDir::new().unwrap();
        write_bin(dir.path(), "short.bin", b"tiny");

        let report = scan_bin_files(dir.path(), 100, 4);

        assert!(report.hits.is_empty());
        assert!(report.failures.is_empty());
    }

    #[test]
    fn test_tail_shorter_than_length_yields_no_hit() {
        let dir = TempDir::new().unwrap();
        write_bin(dir.path(), "short.bin", b"0123456789");

        // Offset is in bounds but only 2 bytes remain
        let report = scan_bin_files(dir.path(), 8, 4);

        assert!(report.hits.is_empty());
        assert!(report.failures.is_empty());
    }

    #[test]
    fn test_ignores_other_extensions() {
        let dir = TempDir::new().unwrap();
        write_bin(dir.path(), "data.bin", b"0123456789");
        write_bin(dir.path(), "notes.txt", b"0123456789");
        write_bin(dir.path(), "noext", b"0123456789");

        let report = scan_bin_files(dir.path(), 0, 4);

        assert_eq!(report.hits.len(), 1);
        assert!(report.hits[0].path.ends_with("data.bin"));
    }

    #[test]
    fn test_recurses_into_subdirectories() {
        let dir = TempDir::new().unwrap();
        let sub = dir.path().join("nested/deep");
        std::fs::create_dir_all(&sub).unwrap();
        write_bin(dir.path(), "top.bin", b"0123456789");
        write_bin(&sub, "below.bin", b"0123456789");

        let report = scan_bin_files(dir.path(), 0, 4);

        assert_eq!(report.hits.len(), 2);
    }

    #[test]
    fn test_hits_ordered_by_path() {
        let dir = TempDir::new().unwrap();
        write_bin(dir.path(), "b.bin", b"0123456789");
        write_bin(dir.path(), "a.bin", b"0123456789");
        write_bin(dir.path(), "c.bin", b"0123456789");

        let report = scan_bin_files(dir.path(), 0, 4);
        let names: Vec<_> = report
            .hits
            .iter()
            .map(|h| h.path.file_name().unwrap().to_str().unwrap().to_string())
            .collect();

        assert_eq!(names, ["a.bin", "b.bin", "c.bin"]);
    }

    #[test]
    fn test_numeric_interpretation_little_endian() {
        let dir = TempDir::new().unwrap();
        write_bin(dir.path(), "num.bin", &[0x78, 0x56, 0x34, 0x12, 0xFF, 0xFF]);

        let report = scan_bin_files(dir.path(), 0, 4);
        assert_eq!(
            report.hits[0].numeric,
            Some(NumericValue::Int32(0x12345678))
        );

        // -1 as eight 0xFF bytes
        write_bin(dir.path(), "neg.bin", &[0xFF; 8]);
        let report = scan_bin_files(dir.path(), 0, 8);
        let hit = report
            .hits
            .iter()
            .find(|h| h.path.ends_with("neg.bin"))
            .unwrap();
        assert_eq!(hit.numeric, Some(NumericValue::Int64(-1)));
    }

    #[test]
    fn test_no_numeric_for_other_lengths() {
        let dir = TempDir::new().unwrap();
        write_bin(dir.path(), "data.bin", b"0123456789");

        let report = scan_bin_files(dir.path(), 0, 5);
        assert_eq!(report.hits[0].numeric, None);
    }

    #[test]
    fn test_non_ascii_bytes_dropped_from_text() {
        let dir = TempDir::new().unwrap();
        write_bin(dir.path(), "mixed.bin", &[b'H', 0xC3, b'i', 0xFF, b'!']);

        let report = scan_bin_files(dir.path(), 0, 5);
        assert_eq!(report.hits[0].text, "Hi!");
        // Raw bytes keep everything
        assert_eq!(report.hits[0].bytes.len(), 5);
    }

    #[test]
    fn test_empty_root_yields_empty_report() {
        let dir = TempDir::new().unwrap();

        let report = scan_bin_files(dir.path(), 0, 16);
        assert!(report.hits.is_empty());
        assert!(report.failures.is_empty());
    }
}
