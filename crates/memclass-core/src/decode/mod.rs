mod bytes;
mod format;

pub use bytes::{
    decode_c_string, decode_float, decode_int, decode_signed, decode_unsigned, pad_hex,
};
pub use format::{format_address, format_offset, parse_address};
