use std::fmt::Write as _;

use super::Generator;
use crate::decode::format_offset;
use crate::field::FieldKind;

const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do",
    "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe", "unsized",
    "use", "virtual", "where", "while", "yield",
];

/// Keywords that cannot be written as raw identifiers.
const NON_RAW: &[&str] = &["_", "crate", "self", "Self", "super"];

#[derive(Debug, Default)]
pub struct RustGenerator {
    output: String,
}

fn type_name(kind: FieldKind, width: usize) -> &'static str {
    match (kind, width) {
        (FieldKind::I8, _) => "i8",
        (FieldKind::I16, _) => "i16",
        (FieldKind::I32, _) => "i32",
        (FieldKind::I64, _) => "i64",
        (FieldKind::U8 | FieldKind::Unk8, _) => "u8",
        (FieldKind::U16 | FieldKind::Unk16, _) => "u16",
        (FieldKind::U32 | FieldKind::Unk32, _) => "u32",
        (FieldKind::U64 | FieldKind::Unk64, _) => "u64",
        // Target pointers are stored as addresses; the host may differ in width.
        (FieldKind::Ptr | FieldKind::StrPtr, 4) => "u32",
        (FieldKind::Ptr | FieldKind::StrPtr, _) => "u64",
    }
}

impl Generator for RustGenerator {
    fn escape_ident(&self, ident: &str) -> String {
        if NON_RAW.contains(&ident) {
            format!("{ident}_")
        } else if KEYWORDS.contains(&ident) {
            format!("r#{ident}")
        } else {
            ident.to_string()
        }
    }

    fn begin_class(&mut self, name: &str) {
        let _ = writeln!(self.output, "#[repr(C, packed)]");
        let _ = writeln!(self.output, "pub struct {name} {{");
    }

    fn add_field(&mut self, name: &str, kind: FieldKind, width: usize) {
        let ty = type_name(kind, width);
        match kind {
            FieldKind::StrPtr => {
                let _ = writeln!(self.output, "    pub {name}: {ty}, // -> string");
            }
            FieldKind::Ptr => {
                let _ = writeln!(self.output, "    pub {name}: {ty}, // pointer");
            }
            _ => {
                let _ = writeln!(self.output, "    pub {name}: {ty},");
            }
        }
    }

    fn add_padding(&mut self, offset: u64, len: u64) {
        let _ = writeln!(
            self.output,
            "    _pad_{}: [u8; 0x{:X}],",
            format_offset(offset),
            len
        );
    }

    fn end_class(&mut self) {
        let _ = writeln!(self.output, "}}");
        let _ = writeln!(self.output);
    }

    fn finish(&mut self) -> String {
        let mut output = std::mem::take(&mut self.output);
        output.truncate(output.trim_end().len());
        output.push('\n');
        output
    }
}
