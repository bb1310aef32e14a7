// src/bits/mod.rs

//! Bit-level reader and writer over byte-oriented transports.
//!
//! Both sides operate MSB-first: within a multi-bit field the most
//! significant bit is written or read first, and bits fill each byte from
//! bit 7 down to bit 0. The writer buffers sub-byte writes and pads the
//! final partial byte with zeros on close; the reader reports end-of-input
//! through a distinguished `Ok(None)` rather than an error, because the
//! frequency-count pass reads until exhaustion as its normal stop condition.

use crate::utils::error::Result;
use bitvec::order::Msb0;
use bitvec::slice::BitSlice;
use byteorder::{ReadBytesExt, WriteBytesExt};
use std::io::{Read, Seek, SeekFrom, Write};

/// A bit-level writer for producing compressed output.
pub struct BitWriter<W: Write> {
    writer: W,
    current_byte: u8,
    bits_in_current: u8,
    bits_written: u64,
}

impl<W: Write> BitWriter<W> {
    /// Creates a new BitWriter over the given transport.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            current_byte: 0,
            bits_in_current: 0,
            bits_written: 0,
        }
    }

    /// Writes a single bit.
    pub fn write_bit(&mut self, bit: bool) -> Result<()> {
        if bit {
            self.current_byte |= 1 << (7 - self.bits_in_current);
        }
        self.bits_in_current += 1;
        self.bits_written += 1;

        if self.bits_in_current == 8 {
            self.writer.write_u8(self.current_byte)?;
            self.current_byte = 0;
            self.bits_in_current = 0;
        }
        Ok(())
    }

    /// Writes the low `count` bits of `value`, most significant first.
    ///
    /// `count` must be in 1..=32; only the low `count` bits of `value` are
    /// consulted, so a field shorter than the value's significant bits is
    /// silently truncated from the top.
    pub fn write_bits(&mut self, count: u32, value: u32) -> Result<()> {
        debug_assert!((1..=32).contains(&count));
        for i in (0..count).rev() {
            self.write_bit((value >> i) & 1 == 1)?;
        }
        Ok(())
    }

    /// Writes a variable-length code verbatim, one bit at a time.
    ///
    /// An empty slice is valid and writes nothing (the degenerate
    /// single-leaf tree assigns a zero-length code).
    pub fn write_code(&mut self, code: &BitSlice<u8, Msb0>) -> Result<()> {
        for bit in code.iter().by_vals() {
            self.write_bit(bit)?;
        }
        Ok(())
    }

    /// Total number of bits written so far, including buffered ones.
    pub fn bits_written(&self) -> u64 {
        self.bits_written
    }

    /// Flushes the trailing partial byte (zero-padded) and finalizes the
    /// stream, returning the underlying transport.
    pub fn close(mut self) -> Result<W> {
        if self.bits_in_current > 0 {
            self.writer.write_u8(self.current_byte)?;
        }
        self.writer.flush()?;
        Ok(self.writer)
    }
}

/// A bit-level reader for consuming compressed input.
///
/// The transport must be seekable so the count pass of compression can
/// rewind to byte 0 before the encode pass.
pub struct BitReader<R: Read + Seek> {
    reader: R,
    current_byte: u8,
    bits_remaining: u8,
    bits_read: u64,
}

impl<R: Read + Seek> BitReader<R> {
    /// Creates a new BitReader over the given transport.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            current_byte: 0,
            bits_remaining: 0,
            bits_read: 0,
        }
    }

    /// Reads a single bit, or `None` once the transport is exhausted.
    pub fn read_bit(&mut self) -> Result<Option<bool>> {
        if self.bits_remaining == 0 {
            match self.reader.read_u8() {
                Ok(byte) => {
                    self.current_byte = byte;
                    self.bits_remaining = 8;
                }
                Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
                    return Ok(None);
                }
                Err(e) => return Err(e.into()),
            }
        }

        self.bits_remaining -= 1;
        self.bits_read += 1;
        Ok(Some((self.current_byte >> self.bits_remaining) & 1 == 1))
    }

    /// Reads the next `count` bits as an unsigned integer, MSB-first.
    ///
    /// Returns `None` when fewer than `count` bits remain; the partial
    /// field is not recoverable afterwards. `count` must be in 1..=32.
    pub fn read_bits(&mut self, count: u32) -> Result<Option<u32>> {
        debug_assert!((1..=32).contains(&count));
        let mut value = 0u32;
        for _ in 0..count {
            match self.read_bit()? {
                Some(bit) => value = (value << 1) | u32::from(bit),
                None => return Ok(None),
            }
        }
        Ok(Some(value))
    }

    /// Total number of bits read since creation or the last `reset`.
    pub fn bits_read(&self) -> u64 {
        self.bits_read
    }

    /// Repositions the transport to byte 0 and discards any buffered bits.
    pub fn reset(&mut self) -> Result<()> {
        self.reader.seek(SeekFrom::Start(0))?;
        self.current_byte = 0;
        self.bits_remaining = 0;
        self.bits_read = 0;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitvec::prelude::*;
    use std::io::Cursor;

    #[test]
    fn test_write_read_fields() {
        let mut writer = BitWriter::new(Vec::new());
        writer.write_bits(3, 0b101).unwrap();
        writer.write_bits(2, 0b11).unwrap();
        writer.write_bits(9, 0b100000001).unwrap();
        let bytes = writer.close().unwrap();
        assert_eq!(bytes, vec![0b10111100, 0b00000100]);

        let mut reader = BitReader::new(Cursor::new(bytes));
        assert_eq!(reader.read_bits(3).unwrap(), Some(0b101));
        assert_eq!(reader.read_bits(2).unwrap(), Some(0b11));
        assert_eq!(reader.read_bits(9).unwrap(), Some(0b100000001));
    }

    #[test]
    fn test_close_pads_with_zeros() {
        let mut writer = BitWriter::new(Vec::new());
        writer.write_bit(true).unwrap();
        assert_eq!(writer.bits_written(), 1);
        let bytes = writer.close().unwrap();
        assert_eq!(bytes, vec![0b10000000]);
    }

    #[test]
    fn test_end_signal() {
        let mut reader = BitReader::new(Cursor::new(vec![0xAB]));
        assert_eq!(reader.read_bits(8).unwrap(), Some(0xAB));
        assert_eq!(reader.read_bits(1).unwrap(), None);
        // a field wider than what remains also signals the end
        let mut reader = BitReader::new(Cursor::new(vec![0xAB]));
        assert_eq!(reader.read_bits(9).unwrap(), None);
    }

    #[test]
    fn test_reset_rereads_from_start() {
        let mut reader = BitReader::new(Cursor::new(vec![0xC3, 0x5A]));
        assert_eq!(reader.read_bits(12).unwrap(), Some(0xC35));
        reader.reset().unwrap();
        assert_eq!(reader.bits_read(), 0);
        assert_eq!(reader.read_bits(8).unwrap(), Some(0xC3));
        assert_eq!(reader.read_bits(8).unwrap(), Some(0x5A));
    }

    #[test]
    fn test_write_code_preserves_leading_zeros() {
        let code: BitVec<u8, Msb0> = bitvec![u8, Msb0; 0, 0, 1, 0, 1];
        let mut writer = BitWriter::new(Vec::new());
        writer.write_code(&code).unwrap();
        writer.write_bits(3, 0b111).unwrap();
        let bytes = writer.close().unwrap();
        assert_eq!(bytes, vec![0b00101111]);
    }

    #[test]
    fn test_empty_code_writes_nothing() {
        let code: BitVec<u8, Msb0> = BitVec::new();
        let mut writer = BitWriter::new(Vec::new());
        writer.write_code(&code).unwrap();
        assert_eq!(writer.bits_written(), 0);
        let bytes = writer.close().unwrap();
        assert!(bytes.is_empty());
    }

    #[test]
    fn test_32_bit_fields() {
        let mut writer = BitWriter::new(Vec::new());
        writer.write_bits(32, 0xface8201).unwrap();
        let bytes = writer.close().unwrap();
        assert_eq!(bytes, vec![0xfa, 0xce, 0x82, 0x01]);

        let mut reader = BitReader::new(Cursor::new(bytes));
        assert_eq!(reader.read_bits(32).unwrap(), Some(0xface8201));
    }
}
