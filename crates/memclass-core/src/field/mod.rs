//! Field kinds, pointer widths and decoded values.

mod kind;
mod value;

pub use kind::{
    FLOAT_WIDTHS, FieldKind, INT_WIDTHS, POINTER_WIDTHS, PointerWidth, width_of, width_of_tag,
};
pub use value::FieldValue;
