// src/utils/error.rs

use thiserror::Error;

/// The primary error type for all operations in the Huffman codec library.
///
/// The format carries no redundancy, so there is nothing to retry against:
/// the first malformation detected aborts the whole operation and propagates
/// unchanged to the top-level `compress`/`decompress` call.
#[derive(Error, Debug)]
pub enum HuffError {
    /// An error occurred in the underlying byte transport.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stream does not start with the expected magic word.
    #[error("illegal header starts with {0:#010x}")]
    BadMagic(u32),

    /// The stream ended mid-structure or contains an impossible encoding.
    #[error("truncated or corrupted stream: {0}")]
    Corrupt(&'static str),
}

/// A specialized `Result` type for Huffman codec operations.
pub type Result<T> = std::result::Result<T, HuffError>;
