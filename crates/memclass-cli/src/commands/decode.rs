//! Decode command for interpreting a single hex byte string.

use std::fmt::Write as _;
use std::str::FromStr;

use anyhow::{Context, Result};
use memclass_core::{
    FieldKind, FieldValue, MemclassConfig, decode_float, decode_int, format_address,
};

use crate::cli_utils;

pub fn run(config: &MemclassConfig, bytes: &str, kind: &str) -> Result<()> {
    print!("{}", render(config, bytes, kind)?);
    Ok(())
}

pub fn render(config: &MemclassConfig, bytes: &str, kind: &str) -> Result<String> {
    let bytes = cli_utils::parse_hex_bytes(bytes)?;
    let kind =
        FieldKind::from_str(kind.trim()).with_context(|| format!("Unknown field kind {kind:?}"))?;
    let width = kind.width(config.pointer_width);

    let value = FieldValue::decode(kind, &bytes, config.pointer_width)?;

    let mut output = String::new();
    let _ = writeln!(output, "kind:     {} ({})", kind, kind.label());
    let _ = writeln!(output, "width:    {}", width);
    let _ = writeln!(output, "value:    {}", value);
    let _ = writeln!(output, "unsigned: {}", decode_int(&bytes, width, false)?);
    let _ = writeln!(output, "signed:   {}", decode_int(&bytes, width, true)?);
    if width == 4 || width == 8 {
        let _ = writeln!(output, "float:    {}", decode_float(&bytes, width)?);
    }
    if let Some(address) = value.address() {
        let _ = writeln!(output, "address:  0x{}", format_address(address));
    }

    Ok(output)
}
