//! Fixed-width hex formatting of offsets and addresses.

use crate::config::display;
use crate::decode::pad_hex;
use crate::error::{Error, Result};

/// Offset within a class, upper-case hex padded to 4 digits.
pub fn format_offset(offset: u64) -> String {
    pad_hex(&format!("{offset:X}"), display::OFFSET_DIGITS)
}

/// Absolute address, upper-case hex padded to 12 digits.
pub fn format_address(address: u64) -> String {
    pad_hex(&format!("{address:X}"), display::ADDRESS_DIGITS)
}

/// Parses a hexadecimal address, with or without a `0x` prefix.
///
/// Only hex digits may follow the prefix; signs are rejected.
pub fn parse_address(text: &str) -> Result<u64> {
    let trimmed = text.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::InvalidAddress(text.to_string()));
    }
    u64::from_str_radix(digits, 16).map_err(|_| Error::InvalidAddress(text.to_string()))
}
