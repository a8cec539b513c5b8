use crate::error::{Error, Result};
use crate::protocol::primitive::*;

/// Read position over an immutable response buffer
///
/// The position only moves forward and never passes the end of the buffer.
#[derive(Debug, Clone, Copy)]
pub struct ByteCursor<'buf> {
    buf: &'buf [u8],
    pos: usize,
}

impl<'buf> ByteCursor<'buf> {
    pub fn new(buf: &'buf [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Create a cursor starting at `pos`
    pub fn with_position(buf: &'buf [u8], pos: usize) -> Result<Self> {
        if pos > buf.len() {
            return Err(Error::TruncatedBuffer {
                needed: pos,
                available: buf.len(),
            });
        }
        Ok(Self { buf, pos })
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn buffer(&self) -> &'buf [u8] {
        self.buf
    }

    /// Bytes not yet consumed
    pub fn remaining(&self) -> &'buf [u8] {
        &self.buf[self.pos..]
    }

    pub fn is_exhausted(&self) -> bool {
        self.pos == self.buf.len()
    }

    #[inline]
    fn advance_to(&mut self, rest: &'buf [u8]) {
        self.pos = self.buf.len() - rest.len();
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        let (value, rest) = read_int_1(self.remaining())?;
        self.advance_to(rest);
        Ok(value)
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        let (value, rest) = read_int_2(self.remaining())?;
        self.advance_to(rest);
        Ok(value)
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        let (value, rest) = read_int_4(self.remaining())?;
        self.advance_to(rest);
        Ok(value)
    }

    pub fn read_u64(&mut self) -> Result<u64> {
        let (value, rest) = read_int_8(self.remaining())?;
        self.advance_to(rest);
        Ok(value)
    }

    /// Read exactly `len` bytes
    pub fn read_fixed(&mut self, len: usize) -> Result<&'buf [u8]> {
        let (bytes, rest) = read_string_fix(self.remaining(), len)?;
        self.advance_to(rest);
        Ok(bytes)
    }

    pub fn read_leb128(&mut self) -> Result<u64> {
        let (value, rest) = read_leb128(self.remaining())?;
        self.advance_to(rest);
        Ok(value)
    }

    /// Read LEB128 length-prefixed bytes
    pub fn read_bytes(&mut self) -> Result<&'buf [u8]> {
        let (bytes, rest) = read_leb128_bytes(self.remaining())?;
        self.advance_to(rest);
        Ok(bytes)
    }

    /// Read LEB128 length-prefixed UTF-8 string
    pub fn read_str(&mut self) -> Result<&'buf str> {
        let (s, rest) = read_leb128_str(self.remaining())?;
        self.advance_to(rest);
        Ok(s)
    }
}

/// Decode a LEB128 integer at `position`, returning it with the position past it
pub fn decode_varint(buffer: &[u8], position: usize) -> Result<(u64, usize)> {
    let mut cursor = ByteCursor::with_position(buffer, position)?;
    let value = cursor.read_leb128()?;
    Ok((value, cursor.position()))
}

/// Decode a length-prefixed string at `position`, returning it with the position past it
pub fn decode_length_prefixed_string(buffer: &[u8], position: usize) -> Result<(&str, usize)> {
    let mut cursor = ByteCursor::with_position(buffer, position)?;
    let s = cursor.read_str()?;
    Ok((s, cursor.position()))
}
