// src/huff/mod.rs

//! Lossless byte-stream compression with two-pass static Huffman coding.
//!
//! Compression scans the input once to count byte frequencies, builds an
//! optimal prefix-code tree over the observed values plus a synthetic
//! end-of-stream marker, then rewinds and rewrites each byte as its
//! variable-length code. The output stream is a 32-bit magic word, the
//! pre-order tree header, the coded payload terminated by the marker's
//! code, and zero padding to the final byte boundary. Decompression checks
//! the magic, rebuilds the tree from the header, and walks it bit by bit
//! until the marker leaf ends the stream.

pub mod codes;
pub mod freq;
pub mod header;
pub mod tree;

pub use codes::{derive_codes, Code, CodeTable};
pub use freq::{count_frequencies, FreqTable};
pub use header::{read_tree, write_tree};
pub use tree::{build_tree, HuffNode};

use crate::bits::{BitReader, BitWriter};
use crate::utils::error::{HuffError, Result};
use log::{debug, trace};
use std::io::{Cursor, Read, Seek, Write};

/// Width of one input/output unit.
pub const BITS_PER_WORD: u32 = 8;
/// Width of the magic word.
pub const BITS_PER_INT: u32 = 32;
/// Width of a serialized leaf value; 256 needs a ninth bit.
pub const VALUE_BITS: u32 = 9;
/// Synthetic end-of-stream marker, one past the widest byte value.
pub const PSEUDO_EOF: u16 = 256;
/// Base magic constant for Huffman-compressed streams.
pub const HUFF_NUMBER: u32 = 0xface8200;
/// Magic actually written: `HUFF_NUMBER` tagged as the tree-header variant.
pub const HUFF_TREE: u32 = HUFF_NUMBER | 1;

/// Compresses `input` into `output`, returning the finalized transport.
///
/// The input is consumed twice: a count pass to exhaustion, then a rewind
/// and an encode pass. The writer is closed (final partial byte padded
/// and flushed) on every exit path; on error the close still runs but the
/// error from the encode loop is the one reported.
pub fn compress<R: Read + Seek, W: Write>(input: R, output: W) -> Result<W> {
    let mut reader = BitReader::new(input);
    let counts = count_frequencies(&mut reader)?;
    let root = build_tree(&counts);
    let codes = codes::derive_codes(&root);

    let mut writer = BitWriter::new(output);
    let encoded = encode_payload(&root, &codes, &mut reader, &mut writer);
    let closed = writer.close();
    encoded?;
    closed
}

fn encode_payload<R: Read + Seek, W: Write>(
    root: &HuffNode,
    codes: &CodeTable,
    reader: &mut BitReader<R>,
    writer: &mut BitWriter<W>,
) -> Result<()> {
    writer.write_bits(BITS_PER_INT, HUFF_TREE)?;
    write_tree(root, writer)?;
    let header_bits = writer.bits_written();

    reader.reset()?;
    let mut symbols = 0u64;
    while let Some(value) = reader.read_bits(BITS_PER_WORD)? {
        // only possible when the reader was handed over mid-stream, so the
        // count pass saw a suffix of what the encode pass reads
        let code = codes
            .get(value as u16)
            .ok_or(HuffError::Corrupt("byte not seen in the count pass"))?;
        writer.write_code(code)?;
        symbols += 1;
    }
    writer.write_code(codes.eof_code())?;

    debug!(
        "compressed {} symbols: {} header bits, {} total bits written",
        symbols,
        header_bits,
        writer.bits_written()
    );
    Ok(())
}

/// Decompresses `input` into `output`, returning the finalized transport.
///
/// Fails with [`HuffError::BadMagic`] if the stream does not open with the
/// expected magic word, and with [`HuffError::Corrupt`] if it ends before
/// the end-of-stream marker's code completes. On error the transport is
/// not returned, so no partial output is salvaged through this API; the
/// writer is still closed so whatever was written is at least flushed.
pub fn decompress<R: Read + Seek, W: Write>(input: R, output: W) -> Result<W> {
    let mut reader = BitReader::new(input);
    let magic = reader
        .read_bits(BITS_PER_INT)?
        .ok_or(HuffError::Corrupt("stream too short for a magic word"))?;
    if magic != HUFF_TREE {
        return Err(HuffError::BadMagic(magic));
    }

    let root = read_tree(&mut reader)?;
    trace!("rebuilt tree with {} leaves", root.leaf_count());

    let mut writer = BitWriter::new(output);
    let walked = decode_payload(&root, &mut reader, &mut writer);
    let closed = writer.close();
    walked?;
    closed
}

fn decode_payload<R: Read + Seek, W: Write>(
    root: &HuffNode,
    reader: &mut BitReader<R>,
    writer: &mut BitWriter<W>,
) -> Result<()> {
    // A single-leaf tree has no internal node to walk; it is only valid
    // when that leaf is the end-of-stream marker (the empty input).
    if let HuffNode::Leaf { value, .. } = root {
        if *value == PSEUDO_EOF {
            return Ok(());
        }
        return Err(HuffError::Corrupt("single-leaf tree without end marker"));
    }

    let mut bytes_out = 0u64;
    let mut current = root;
    loop {
        match current {
            HuffNode::Internal { left, right, .. } => {
                let bit = reader
                    .read_bits(1)?
                    .ok_or(HuffError::Corrupt("stream ended before the end marker"))?;
                current = if bit == 1 { right.as_ref() } else { left.as_ref() };
            }
            HuffNode::Leaf { value, .. } => {
                if *value == PSEUDO_EOF {
                    break;
                }
                writer.write_bits(BITS_PER_WORD, u32::from(*value))?;
                bytes_out += 1;
                current = root;
            }
        }
    }

    debug!("decompressed {} bytes from {} input bits", bytes_out, reader.bits_read());
    Ok(())
}

/// Compresses an in-memory byte slice.
pub fn compress_bytes(data: &[u8]) -> Result<Vec<u8>> {
    compress(Cursor::new(data), Vec::new())
}

/// Decompresses an in-memory byte slice.
pub fn decompress_bytes(data: &[u8]) -> Result<Vec<u8>> {
    decompress(Cursor::new(data), Vec::new())
}
