use std::fmt::Write as _;

use super::Generator;
use crate::decode::format_offset;
use crate::field::FieldKind;

/// Reserved words plus the fixed-width type names the output relies on.
const RESERVED: &[&str] = &[
    "alignas", "alignof", "and", "and_eq", "asm", "auto", "bitand", "bitor", "bool", "break",
    "case", "catch", "char", "char8_t", "char16_t", "char32_t", "class", "compl", "concept",
    "const", "consteval", "constexpr", "constinit", "const_cast", "continue", "co_await",
    "co_return", "co_yield", "decltype", "default", "delete", "do", "double", "dynamic_cast",
    "else", "enum", "explicit", "export", "extern", "false", "float", "for", "friend", "goto",
    "if", "inline", "int", "long", "mutable", "namespace", "new", "noexcept", "not", "not_eq",
    "nullptr", "operator", "or", "or_eq", "private", "protected", "public", "register",
    "reinterpret_cast", "requires", "return", "short", "signed", "sizeof", "static",
    "static_assert", "static_cast", "struct", "switch", "template", "this", "thread_local",
    "throw", "true", "try", "typedef", "typeid", "typename", "union", "unsigned", "using",
    "virtual", "void", "volatile", "wchar_t", "while", "xor", "xor_eq", "int8_t", "int16_t",
    "int32_t", "int64_t", "uint8_t", "uint16_t", "uint32_t", "uint64_t",
];

#[derive(Debug, Default)]
pub struct CppGenerator {
    output: String,
}

fn type_name(kind: FieldKind, width: usize) -> &'static str {
    match (kind, width) {
        (FieldKind::I8, _) => "int8_t",
        (FieldKind::I16, _) => "int16_t",
        (FieldKind::I32, _) => "int32_t",
        (FieldKind::I64, _) => "int64_t",
        (FieldKind::U8 | FieldKind::Unk8, _) => "uint8_t",
        (FieldKind::U16 | FieldKind::Unk16, _) => "uint16_t",
        (FieldKind::U32 | FieldKind::Unk32, _) => "uint32_t",
        (FieldKind::U64 | FieldKind::Unk64, _) => "uint64_t",
        (FieldKind::Ptr | FieldKind::StrPtr, 4) => "uint32_t",
        (FieldKind::Ptr | FieldKind::StrPtr, _) => "uint64_t",
    }
}

impl Generator for CppGenerator {
    fn escape_ident(&self, ident: &str) -> String {
        if RESERVED.contains(&ident) {
            format!("{ident}_")
        } else {
            ident.to_string()
        }
    }

    fn begin_class(&mut self, name: &str) {
        let _ = writeln!(self.output, "struct {name} {{");
    }

    fn add_field(&mut self, name: &str, kind: FieldKind, width: usize) {
        let ty = type_name(kind, width);
        match kind {
            FieldKind::StrPtr => {
                let _ = writeln!(self.output, "    {ty} {name}; // const char*");
            }
            FieldKind::Ptr => {
                let _ = writeln!(self.output, "    {ty} {name}; // void*");
            }
            _ => {
                let _ = writeln!(self.output, "    {ty} {name};");
            }
        }
    }

    fn add_padding(&mut self, offset: u64, len: u64) {
        let _ = writeln!(
            self.output,
            "    char pad_{}[0x{:X}];",
            format_offset(offset),
            len
        );
    }

    fn end_class(&mut self) {
        let _ = writeln!(self.output, "}};");
        let _ = writeln!(self.output);
    }

    fn finish(&mut self) -> String {
        let body = std::mem::take(&mut self.output);
        format!(
            "#include <cstdint>\n\n#pragma pack(push, 1)\n\n{}\n\n#pragma pack(pop)\n",
            body.trim_end()
        )
    }
}
