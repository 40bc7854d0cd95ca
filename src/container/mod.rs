//! Cover-file generation and blob placement.
//!
//! A batch of files filled with random bytes is written to disk; exactly one
//! of them carries the encrypted blob at a random offset. Cover and cipher
//! bytes are equally high-entropy, so the target file cannot be picked out
//! by content alone.

pub mod disclosure;
mod generator;

pub use generator::{generate_containers, Placement};
