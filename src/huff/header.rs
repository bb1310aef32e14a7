// src/huff/header.rs

//! Pre-order tree header serialization.
//!
//! The tree's shape is written before the payload so decompression can
//! rebuild an isomorphic tree with no external metadata: bit 0 introduces
//! an internal node followed by its left then right subtree, bit 1 a leaf
//! followed by the leaf's value in a fixed 9-bit field. Nine bits because
//! the end-of-stream marker is value 256, one past the widest byte.

use crate::bits::{BitReader, BitWriter};
use crate::huff::tree::HuffNode;
use crate::huff::{PSEUDO_EOF, VALUE_BITS};
use crate::utils::error::{HuffError, Result};
use std::io::{Read, Seek, Write};

/// Serializes the tree pre-order into the bit stream.
pub fn write_tree<W: Write>(node: &HuffNode, out: &mut BitWriter<W>) -> Result<()> {
    match node {
        HuffNode::Leaf { value, .. } => {
            out.write_bits(1, 1)?;
            out.write_bits(VALUE_BITS, u32::from(*value))?;
        }
        HuffNode::Internal { left, right, .. } => {
            out.write_bits(1, 0)?;
            write_tree(left, out)?;
            write_tree(right, out)?;
        }
    }
    Ok(())
}

/// Reconstructs a tree from its pre-order serialization.
///
/// Weights are irrelevant after construction, so rebuilt nodes carry 0.
/// Running out of bits mid-header, or a leaf value past the end-of-stream
/// marker, means the stream is truncated or corrupted.
pub fn read_tree<R: Read + Seek>(input: &mut BitReader<R>) -> Result<HuffNode> {
    let bit = input
        .read_bits(1)?
        .ok_or(HuffError::Corrupt("stream ended inside the tree header"))?;
    if bit == 1 {
        let value = input
            .read_bits(VALUE_BITS)?
            .ok_or(HuffError::Corrupt("stream ended inside the tree header"))? as u16;
        if value > PSEUDO_EOF {
            return Err(HuffError::Corrupt("tree leaf value out of range"));
        }
        Ok(HuffNode::Leaf { value, weight: 0 })
    } else {
        let left = read_tree(input)?;
        let right = read_tree(input)?;
        Ok(HuffNode::Internal {
            weight: 0,
            left: Box::new(left),
            right: Box::new(right),
        })
    }
}
