//! Primitive decoders
//!
//! Every decoder either succeeds and moves past what it read, or fails and
//! leaves the cursor exactly where it was.

use crate::{font_data::Cursor, read::ReadError, tag::Tag};

/// The widest integer [`Cursor::read_uint`] can decode.
pub const MAX_INT_WIDTH: usize = 8;

impl Cursor<'_> {
    /// Match a single literal byte.
    pub fn expect_byte(&mut self, byte: u8) -> Result<(), ReadError> {
        match self.peek() {
            Some(next) if next == byte => {
                self.next_byte();
                Ok(())
            }
            Some(_) => Err(ReadError::Mismatch),
            None => Err(ReadError::OutOfBounds),
        }
    }

    /// Match a literal byte string, stopping at the first byte that differs.
    pub fn expect_bytes(&mut self, bytes: &[u8]) -> Result<(), ReadError> {
        let mut tentative = self.speculate();
        for &byte in bytes {
            tentative.expect_byte(byte)?;
        }
        tentative.commit();
        Ok(())
    }

    /// Decode a big-endian unsigned integer that is `width` bytes wide.
    ///
    /// CFF offsets are one to four bytes wide, so this is not restricted to
    /// the widths of the native integer types. A width of zero decodes to
    /// zero, but like any other width requires that the cursor is not at the
    /// end of the data.
    pub fn read_uint(&mut self, width: usize) -> Result<u64, ReadError> {
        if width > MAX_INT_WIDTH {
            return Err(ReadError::InvalidIntegerWidth(width));
        }
        if self.is_at_end() {
            return Err(ReadError::OutOfBounds);
        }
        let mut tentative = self.speculate();
        let mut value = 0u64;
        for _ in 0..width {
            let byte = tentative.next_byte().ok_or(ReadError::OutOfBounds)?;
            value = (value << 8) | byte as u64;
        }
        tentative.commit();
        Ok(value)
    }

    pub fn read_u8(&mut self) -> Result<u8, ReadError> {
        self.next_byte().ok_or(ReadError::OutOfBounds)
    }

    pub fn read_u16(&mut self) -> Result<u16, ReadError> {
        self.read_array().map(u16::from_be_bytes)
    }

    pub fn read_u32(&mut self) -> Result<u32, ReadError> {
        self.read_array().map(u32::from_be_bytes)
    }

    /// Decode a little-endian `u32`, as used by PFB segment headers.
    pub fn read_u32_le(&mut self) -> Result<u32, ReadError> {
        self.read_array().map(u32::from_le_bytes)
    }

    pub fn read_tag(&mut self) -> Result<Tag, ReadError> {
        self.read_array().map(Tag::from_be_bytes)
    }

    /// Decode a run of one or more ASCII digits as a base-10 integer.
    ///
    /// Values too large for a `u32` saturate.
    pub fn read_decimal(&mut self) -> Result<u32, ReadError> {
        let mut digits = 0usize;
        let mut value = 0u32;
        while let Some(byte @ b'0'..=b'9') = self.peek() {
            self.next_byte();
            digits += 1;
            value = value
                .saturating_mul(10)
                .saturating_add((byte - b'0') as u32);
        }
        if digits == 0 {
            return Err(match self.peek() {
                Some(_) => ReadError::Mismatch,
                None => ReadError::OutOfBounds,
            });
        }
        Ok(value)
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N], ReadError> {
        let bytes = self
            .remaining_data()
            .as_bytes()
            .get(..N)
            .ok_or(ReadError::OutOfBounds)?;
        let mut array = [0u8; N];
        array.copy_from_slice(bytes);
        self.advance_by(N as i64);
        Ok(array)
    }
}
