//! A Rust library for lossless Huffman compression of byte streams.
//!
//! This crate implements a two-pass static Huffman codec: byte frequencies
//! are counted first, an optimal prefix-code tree (with a synthetic
//! end-of-stream marker) is built from them, and the tree itself is
//! serialized ahead of the coded payload so decompression needs no side
//! metadata. Round-trips are exact, bit for bit.
//!
//! # Quick Start
//!
//! ```
//! use huff_codec::{compress_bytes, decompress_bytes};
//!
//! let data = b"abracadabra";
//! let packed = compress_bytes(data)?;
//! let unpacked = decompress_bytes(&packed)?;
//! assert_eq!(unpacked, data);
//! # Ok::<(), huff_codec::HuffError>(())
//! ```
//!
//! Streaming transports work through [`compress`] and [`decompress`],
//! which take any `Read + Seek` input (the input is scanned twice) and any
//! `Write` output.

// Core modules
pub mod bits;
pub mod huff;
pub mod utils;

// Codec entry points
pub use huff::{compress, compress_bytes, decompress, decompress_bytes};

// Lower-level pieces (for custom encoding workflows)
pub use bits::{BitReader, BitWriter};
pub use huff::{build_tree, derive_codes, CodeTable, FreqTable, HuffNode, HUFF_TREE, PSEUDO_EOF};

// Error types
pub use utils::error::{HuffError, Result};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_api_roundtrip() {
        let data = b"the quick brown fox jumps over the lazy dog";
        let packed = compress_bytes(data).unwrap();
        assert_eq!(decompress_bytes(&packed).unwrap(), data);
    }

    #[test]
    fn test_output_opens_with_magic() {
        let packed = compress_bytes(b"x").unwrap();
        assert!(packed.len() >= 4);
        let magic = u32::from_be_bytes([packed[0], packed[1], packed[2], packed[3]]);
        assert_eq!(magic, HUFF_TREE);
    }
}
