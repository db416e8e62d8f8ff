//! Decoded property values.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{FieldKind, PointerWidth};
use crate::decode::{decode_float, decode_signed, decode_unsigned, format_address, pad_hex};
use crate::error::Result;

/// Last value decoded for a property, kept for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum FieldValue {
    /// Placeholder bytes with integer and float previews.
    Hex {
        raw: u64,
        width: usize,
        int: i64,
        float: Option<f64>,
    },
    Signed(i64),
    Unsigned(u64),
    Pointer(u64),
    /// `text` stays `None` until the target is read, or when it cannot be.
    StringPointer { address: u64, text: Option<String> },
}

impl FieldValue {
    /// Decodes the bytes at the start of `buffer` according to `kind`.
    ///
    /// String pointers only carry the pointer here; following it is left to
    /// the caller that owns a memory source.
    pub fn decode(kind: FieldKind, buffer: &[u8], pointer_width: PointerWidth) -> Result<Self> {
        let width = kind.width(pointer_width);

        Ok(match kind {
            FieldKind::Unk8 | FieldKind::Unk16 | FieldKind::Unk32 | FieldKind::Unk64 => {
                FieldValue::Hex {
                    raw: decode_unsigned(buffer, width)?,
                    width,
                    int: decode_signed(buffer, width)?,
                    float: match width {
                        4 | 8 => Some(decode_float(buffer, width)?),
                        _ => None,
                    },
                }
            }
            FieldKind::I8 | FieldKind::I16 | FieldKind::I32 | FieldKind::I64 => {
                FieldValue::Signed(decode_signed(buffer, width)?)
            }
            FieldKind::U8 | FieldKind::U16 | FieldKind::U32 | FieldKind::U64 => {
                FieldValue::Unsigned(decode_unsigned(buffer, width)?)
            }
            FieldKind::Ptr => FieldValue::Pointer(decode_unsigned(buffer, width)?),
            FieldKind::StrPtr => FieldValue::StringPointer {
                address: decode_unsigned(buffer, width)?,
                text: None,
            },
        })
    }

    /// Hex digits of a placeholder value, two per byte.
    pub fn hex_text(&self) -> Option<String> {
        match self {
            FieldValue::Hex { raw, width, .. } => Some(pad_hex(&format!("{raw:X}"), width * 2)),
            _ => None,
        }
    }

    /// Address carried by pointer values.
    pub fn address(&self) -> Option<u64> {
        match self {
            FieldValue::Pointer(address) | FieldValue::StringPointer { address, .. } => {
                Some(*address)
            }
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Hex { int, float, .. } => {
                write!(f, "{} {}", self.hex_text().unwrap_or_default(), int)?;
                if let Some(float) = float {
                    write!(f, " {float}")?;
                }
                Ok(())
            }
            FieldValue::Signed(v) => write!(f, "{v}"),
            FieldValue::Unsigned(v) => write!(f, "{v}"),
            FieldValue::Pointer(address) => write!(f, "0x{}", format_address(*address)),
            FieldValue::StringPointer {
                text: Some(text), ..
            } => write!(f, "-> \"{text}\""),
            FieldValue::StringPointer { address, text: None } => {
                write!(f, "0x{} -> <invalid>", format_address(*address))
            }
        }
    }
}
