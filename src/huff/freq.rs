// src/huff/freq.rs

//! Per-byte frequency statistics, the first pass of compression.

use crate::bits::BitReader;
use crate::huff::BITS_PER_WORD;
use crate::utils::error::Result;
use std::io::{Read, Seek};

/// Number of distinct byte values.
pub const ALPH_SIZE: usize = 256;

/// Occurrence count per byte value, indexed by the value itself.
pub type FreqTable = [u64; ALPH_SIZE];

/// Scans the input from its current position to exhaustion, counting each
/// 8-bit unit. Fully consumes the reader; the caller must `reset` it before
/// the encode pass.
pub fn count_frequencies<R: Read + Seek>(input: &mut BitReader<R>) -> Result<FreqTable> {
    let mut counts = [0u64; ALPH_SIZE];
    while let Some(value) = input.read_bits(BITS_PER_WORD)? {
        counts[value as usize] += 1;
    }
    Ok(counts)
}
