use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, FromRepr, IntoStaticStr};

use crate::error::{Error, Result};

/// Widths accepted by integer decoding and by the fixed-width kinds.
pub const INT_WIDTHS: &[usize] = &[1, 2, 4, 8];

/// Widths accepted by float decoding.
pub const FLOAT_WIDTHS: &[usize] = &[4, 8];

/// Pointer widths of a 32-bit and a 64-bit target process.
pub const POINTER_WIDTHS: &[usize] = &[4, 8];

/// How the bytes at a property's offset are interpreted.
///
/// The set is closed. Raw tags coming from outside the crate go through
/// [`FieldKind::from_tag`], which rejects anything past `StrPtr`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    FromRepr,
    EnumString,
    IntoStaticStr,
    EnumIter,
)]
#[repr(u8)]
pub enum FieldKind {
    Unk8 = 0,
    Unk16 = 1,
    Unk32 = 2,
    Unk64 = 3,
    I8 = 4,
    I16 = 5,
    I32 = 6,
    I64 = 7,
    U8 = 8,
    U16 = 9,
    U32 = 10,
    U64 = 11,
    Ptr = 12,
    StrPtr = 13,
}

impl FieldKind {
    pub fn from_tag(tag: u8) -> Result<Self> {
        Self::from_repr(tag).ok_or(Error::InvalidKind(tag))
    }

    pub fn tag(self) -> u8 {
        self as u8
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }

    /// Returns size in bytes. Pointer kinds take the width of the target process.
    pub fn width(self, pointer_width: PointerWidth) -> usize {
        match self {
            Self::Unk8 | Self::I8 | Self::U8 => 1,
            Self::Unk16 | Self::I16 | Self::U16 => 2,
            Self::Unk32 | Self::I32 | Self::U32 => 4,
            Self::Unk64 | Self::I64 | Self::U64 => 8,
            Self::Ptr | Self::StrPtr => pointer_width.bytes(),
        }
    }

    /// Label shown for a property that has no name of its own.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Unk8 => "hex8",
            Self::Unk16 => "hex16",
            Self::Unk32 => "hex32",
            Self::Unk64 => "hex64",
            Self::I8 => "int8",
            Self::I16 => "int16",
            Self::I32 => "int32",
            Self::I64 => "int64",
            Self::U8 => "uint8",
            Self::U16 => "uint16",
            Self::U32 => "uint32",
            Self::U64 => "uint64",
            Self::Ptr => "pointer",
            Self::StrPtr => "string_pointer",
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unk8 | Self::Unk16 | Self::Unk32 | Self::Unk64)
    }

    pub fn is_signed(&self) -> bool {
        matches!(self, Self::I8 | Self::I16 | Self::I32 | Self::I64)
    }

    pub fn is_unsigned(&self) -> bool {
        matches!(self, Self::U8 | Self::U16 | Self::U32 | Self::U64)
    }

    pub fn is_pointer(&self) -> bool {
        matches!(self, Self::Ptr | Self::StrPtr)
    }

    /// The placeholder kind covering exactly `width` bytes.
    pub fn unknown_for_width(width: usize) -> Result<Self> {
        match width {
            1 => Ok(Self::Unk8),
            2 => Ok(Self::Unk16),
            4 => Ok(Self::Unk32),
            8 => Ok(Self::Unk64),
            _ => Err(Error::InvalidWidth {
                width,
                expected: INT_WIDTHS,
            }),
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

/// Pointer width of the target process.
///
/// This comes from whoever attached to the process; it is never derived
/// from the host the crate was compiled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum PointerWidth {
    Bits32,
    #[default]
    Bits64,
}

impl PointerWidth {
    pub const fn bytes(self) -> usize {
        match self {
            Self::Bits32 => 4,
            Self::Bits64 => 8,
        }
    }
}

impl TryFrom<usize> for PointerWidth {
    type Error = Error;

    fn try_from(width: usize) -> Result<Self> {
        match width {
            4 => Ok(Self::Bits32),
            8 => Ok(Self::Bits64),
            _ => Err(Error::InvalidWidth {
                width,
                expected: POINTER_WIDTHS,
            }),
        }
    }
}

impl From<PointerWidth> for usize {
    fn from(width: PointerWidth) -> Self {
        width.bytes()
    }
}

/// Byte width of `kind` in a target process with the given pointer width.
pub fn width_of(kind: FieldKind, pointer_width: PointerWidth) -> usize {
    kind.width(pointer_width)
}

/// Byte width of a raw kind tag, rejecting tags outside the closed set.
pub fn width_of_tag(tag: u8, pointer_width: PointerWidth) -> Result<usize> {
    Ok(FieldKind::from_tag(tag)?.width(pointer_width))
}
