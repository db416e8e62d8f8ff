//! # memclass-core
//!
//! Memory-layout model and binary value decoder for a structure editor.
//!
//! This crate provides:
//! - Field kinds with target-dependent pointer widths
//! - Little-endian integer/float decoding and hex display formatting
//! - Classes, properties and the project that owns them
//! - Refreshing decoded values from a caller-supplied memory source
//! - Rust and C++ struct generation from class layouts
//!
//! The crate performs no process I/O of its own.

pub mod config;
pub mod decode;
pub mod error;
pub mod field;
pub mod generator;
pub mod memory;
pub mod model;

pub use config::MemclassConfig;
pub use decode::{
    decode_c_string, decode_float, decode_int, decode_signed, decode_unsigned, format_address,
    format_offset, pad_hex, parse_address,
};
pub use error::{Error, Result};
pub use field::{FieldKind, FieldValue, PointerWidth, width_of, width_of_tag};
pub use generator::{CppGenerator, Generator, GeneratorKind, RustGenerator, generate};
pub use memory::{ReadMemory, SnapshotBuilder, SnapshotMemory};
pub use model::{Class, ProjectData, Property, RefreshReport};
pub use uuid::Uuid;
