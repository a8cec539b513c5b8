use crate::constant::MAX_LEB128_LEN;
use crate::error::{Error, Result};
use simdutf8::basic::from_utf8;
use zerocopy::FromBytes;
use zerocopy::byteorder::little_endian::{U16 as U16LE, U32 as U32LE, U64 as U64LE};

#[inline]
fn truncated(needed: usize, data: &[u8]) -> Error {
    Error::TruncatedBuffer {
        needed,
        available: data.len(),
    }
}

/// Read 1-byte integer
pub fn read_int_1(data: &[u8]) -> Result<(u8, &[u8])> {
    match data.split_first() {
        Some((&value, rest)) => Ok((value, rest)),
        None => Err(truncated(1, data)),
    }
}

/// Read 2-byte little-endian integer
pub fn read_int_2(data: &[u8]) -> Result<(u16, &[u8])> {
    if data.len() < 2 {
        return Err(truncated(2, data));
    }
    let value = U16LE::ref_from_bytes(&data[..2])
        .map_err(Error::from_debug)?
        .get();
    Ok((value, &data[2..]))
}

/// Read 4-byte little-endian integer
pub fn read_int_4(data: &[u8]) -> Result<(u32, &[u8])> {
    if data.len() < 4 {
        return Err(truncated(4, data));
    }
    let value = U32LE::ref_from_bytes(&data[..4])
        .map_err(Error::from_debug)?
        .get();
    Ok((value, &data[4..]))
}

/// Read 8-byte little-endian integer
pub fn read_int_8(data: &[u8]) -> Result<(u64, &[u8])> {
    if data.len() < 8 {
        return Err(truncated(8, data));
    }
    let value = U64LE::ref_from_bytes(&data[..8])
        .map_err(Error::from_debug)?
        .get();
    Ok((value, &data[8..]))
}

/// Read unsigned LEB128 integer
///
/// 7 data bits per byte, least significant group first, high bit set on every byte
/// except the last. An empty input is a truncated buffer; input that ends while the
/// continuation bit is still set, or a value wider than 64 bits, is malformed.
pub fn read_leb128(data: &[u8]) -> Result<(u64, &[u8])> {
    if data.is_empty() {
        return Err(truncated(1, data));
    }

    let mut value = 0_u64;
    for (i, &byte) in data.iter().take(MAX_LEB128_LEN).enumerate() {
        // the 10th group only has room for bit 63
        if i == MAX_LEB128_LEN - 1 && byte > 1 {
            return Err(Error::MalformedVarint);
        }
        value |= u64::from(byte & 0x7F) << (7 * i);
        if byte & 0x80 == 0 {
            return Ok((value, &data[i + 1..]));
        }
    }
    Err(Error::MalformedVarint)
}

/// Read fixed-length bytes
pub fn read_string_fix(data: &[u8], len: usize) -> Result<(&[u8], &[u8])> {
    if data.len() < len {
        return Err(truncated(len, data));
    }
    Ok(data.split_at(len))
}

/// Read LEB128 length-prefixed bytes
pub fn read_leb128_bytes(data: &[u8]) -> Result<(&[u8], &[u8])> {
    let (len, rest) = read_leb128(data)?;
    let len = usize::try_from(len).map_err(|_overflow| truncated(usize::MAX, rest))?;
    read_string_fix(rest, len)
}

/// Read LEB128 length-prefixed UTF-8 string
pub fn read_leb128_str(data: &[u8]) -> Result<(&str, &[u8])> {
    let (bytes, rest) = read_leb128_bytes(data)?;
    Ok((from_utf8(bytes)?, rest))
}

/// Write 1-byte integer
pub fn write_int_1(out: &mut Vec<u8>, value: u8) {
    out.push(value);
}

/// Write 2-byte little-endian integer
pub fn write_int_2(out: &mut Vec<u8>, value: u16) {
    out.extend_from_slice(&value.to_le_bytes());
}

/// Write 4-byte little-endian integer
pub fn write_int_4(out: &mut Vec<u8>, value: u32) {
    out.extend_from_slice(&value.to_le_bytes());
}

/// Write 8-byte little-endian integer
pub fn write_int_8(out: &mut Vec<u8>, value: u64) {
    out.extend_from_slice(&value.to_le_bytes());
}

/// Write unsigned LEB128 integer
pub fn write_leb128(out: &mut Vec<u8>, mut value: u64) {
    loop {
        let byte = (value & 0x7F) as u8;
        value >>= 7;
        if value == 0 {
            out.push(byte);
            return;
        }
        out.push(byte | 0x80);
    }
}

/// Number of bytes `write_leb128` emits for `value`
pub fn leb128_len(value: u64) -> usize {
    let bits = (u64::BITS - value.leading_zeros()).max(1);
    bits.div_ceil(7) as usize
}

/// Write fixed-length bytes
pub fn write_bytes_fix(out: &mut Vec<u8>, data: &[u8]) {
    out.extend_from_slice(data);
}

/// Write LEB128 length-prefixed bytes
pub fn write_leb128_bytes(out: &mut Vec<u8>, data: &[u8]) {
    write_leb128(out, data.len() as u64);
    out.extend_from_slice(data);
}

/// Write LEB128 length-prefixed string
pub fn write_leb128_str(out: &mut Vec<u8>, s: &str) {
    write_leb128_bytes(out, s.as_bytes());
}
