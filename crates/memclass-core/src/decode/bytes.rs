//! Stateless decoding of raw little-endian byte buffers.
//!
//! Every function here reads from the start of the buffer it is given and
//! never past its end. Trailing bytes beyond the requested width are ignored,
//! so callers can hand over a larger snapshot than the field they decode.

use crate::config::strings;
use crate::error::{Error, Result};
use crate::field::{FLOAT_WIDTHS, INT_WIDTHS};

/// Prepends `'0'` to `hex` until it is at least `min_len` characters long.
///
/// Never truncates; a string already at or above `min_len` is returned as is.
pub fn pad_hex(hex: &str, min_len: usize) -> String {
    format!("{hex:0>min_len$}")
}

/// Reads `width` bytes as a little-endian integer.
///
/// With `signed` unset the unsigned interpretation is returned, otherwise the
/// two's-complement one. `i128` holds both the full `u64` and `i64` ranges.
pub fn decode_int(buffer: &[u8], width: usize, signed: bool) -> Result<i128> {
    if signed {
        decode_signed(buffer, width).map(i128::from)
    } else {
        decode_unsigned(buffer, width).map(i128::from)
    }
}

/// Reads `width` bytes as a little-endian unsigned integer.
pub fn decode_unsigned(buffer: &[u8], width: usize) -> Result<u64> {
    check_width(width, INT_WIDTHS)?;
    let bytes = take(buffer, width)?;

    let mut raw = [0u8; 8];
    raw[..width].copy_from_slice(bytes);
    Ok(u64::from_le_bytes(raw))
}

/// Reads `width` bytes as a little-endian two's-complement integer.
pub fn decode_signed(buffer: &[u8], width: usize) -> Result<i64> {
    let raw = decode_unsigned(buffer, width)?;
    let shift = 64 - width as u32 * 8;
    Ok(((raw << shift) as i64) >> shift)
}

/// Reads `width` bytes as a little-endian IEEE-754 value (single for 4, double for 8).
pub fn decode_float(buffer: &[u8], width: usize) -> Result<f64> {
    check_width(width, FLOAT_WIDTHS)?;
    let bytes = take(buffer, width)?;

    Ok(match width {
        4 => f32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]) as f64,
        _ => f64::from_le_bytes([
            bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
        ]),
    })
}

/// Decodes a NUL-terminated string read through a string pointer.
///
/// Control characters are replaced by `'_'` so the result is safe to show on
/// a single line.
pub fn decode_c_string(bytes: &[u8]) -> String {
    let len = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    let sanitized: Vec<u8> = bytes[..len]
        .iter()
        .map(|&b| if b < b' ' { b'_' } else { b })
        .collect();

    String::from_utf8(sanitized).unwrap_or_else(|_| strings::INVALID_UTF8.to_string())
}

fn check_width(width: usize, expected: &'static [usize]) -> Result<()> {
    if expected.contains(&width) {
        Ok(())
    } else {
        Err(Error::InvalidWidth { width, expected })
    }
}

fn take(buffer: &[u8], width: usize) -> Result<&[u8]> {
    buffer.get(..width).ok_or(Error::BufferTooShort {
        needed: width,
        actual: buffer.len(),
    })
}
