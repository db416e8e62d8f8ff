//! Struct declarations generated from class layouts.
//!
//! Placeholder properties are not emitted as fields; together with gaps
//! between typed properties they become explicit padding. Generators emit
//! byte-packed structs, so the generated struct keeps the offsets of the
//! layout whatever the alignment of its field types.

mod cpp;
mod rust;

pub use cpp::CppGenerator;
pub use rust::RustGenerator;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use strum::{EnumString, IntoStaticStr};
use tracing::warn;

use crate::decode::format_offset;
use crate::field::{FieldKind, PointerWidth};
use crate::model::Class;

pub trait Generator {
    /// Makes an identifier that is already ASCII-clean safe to emit,
    /// e.g. by escaping reserved words.
    fn escape_ident(&self, ident: &str) -> String {
        ident.to_string()
    }

    fn begin_class(&mut self, name: &str);
    fn add_field(&mut self, name: &str, kind: FieldKind, width: usize);
    fn add_padding(&mut self, offset: u64, len: u64);
    fn end_class(&mut self);

    /// Returns the generated source and resets the generator.
    fn finish(&mut self) -> String;
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, EnumString, IntoStaticStr,
)]
pub enum GeneratorKind {
    #[default]
    #[strum(serialize = "rust")]
    Rust,
    #[strum(serialize = "cpp")]
    Cpp,
}

impl GeneratorKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Rust => "Rust",
            Self::Cpp => "C++",
        }
    }

    pub fn generator(&self) -> Box<dyn Generator> {
        match self {
            Self::Rust => Box::new(RustGenerator::default()),
            Self::Cpp => Box::new(CppGenerator::default()),
        }
    }
}

/// Emits one struct per class, in the order given.
pub fn generate<'a>(
    classes: impl IntoIterator<Item = &'a Class>,
    generator: &mut dyn Generator,
    pointer_width: PointerWidth,
) -> String {
    for class in classes {
        let class_ident = generator.escape_ident(&sanitize_ident(&class.name));
        generator.begin_class(&class_ident);

        let mut used = HashSet::new();
        let mut cursor = 0u64;
        for property in class.sorted_by_offset() {
            if property.kind.is_unknown() {
                continue;
            }
            if property.offset < cursor {
                warn!(
                    "Skipping {} at +0x{:X} in {}: overlaps previous field",
                    property.display_name(),
                    property.offset,
                    class.name
                );
                continue;
            }
            if property.offset > cursor {
                generator.add_padding(cursor, property.offset - cursor);
            }

            let mut name = match &property.name {
                Some(name) => sanitize_ident(name),
                None => format!("field_{}", format_offset(property.offset)),
            };
            if used.contains(&name) {
                name = format!("{name}_{}", format_offset(property.offset));
            }
            while used.contains(&name) {
                name.push('_');
            }
            used.insert(name.clone());

            let ident = generator.escape_ident(&name);
            generator.add_field(&ident, property.kind, property.kind.width(pointer_width));
            cursor = property.end(pointer_width);
        }

        let size = class.size(pointer_width);
        if size > cursor {
            generator.add_padding(cursor, size - cursor);
        }
        generator.end_class();
    }

    generator.finish()
}

/// Turns a free-form name into something both Rust and C++ accept.
fn sanitize_ident(name: &str) -> String {
    let mut ident: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();

    if ident.is_empty() || ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    ident
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProjectData;
    use std::str::FromStr;

    /// Generator that records calls for inspection.
    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl Generator for Recorder {
        fn begin_class(&mut self, name: &str) {
            self.events.push(format!("begin {name}"));
        }

        fn add_field(&mut self, name: &str, kind: FieldKind, width: usize) {
            self.events.push(format!("field {name} {kind} {width}"));
        }

        fn add_padding(&mut self, offset: u64, len: u64) {
            self.events.push(format!("pad {offset} {len}"));
        }

        fn end_class(&mut self) {
            self.events.push("end".to_string());
        }

        fn finish(&mut self) -> String {
            std::mem::take(&mut self.events).join("\n")
        }
    }

    #[test]
    fn test_generate_pads_gaps_and_folds_placeholders() {
        let mut project = ProjectData::new();
        let class = project.new_class("Player");
        class.push_named_property(0x10, FieldKind::Ptr, "name");
        class.push_named_property(0x0, FieldKind::I32, "health");
        class.add_padding(0x4, 0xC);
        class.push_property(0x18, FieldKind::Unk64);

        let class = &project.classes()[1];
        let out = generate([class], &mut Recorder::default(), PointerWidth::Bits64);

        assert_eq!(
            out,
            [
                "begin Player",
                "field health I32 4",
                "pad 4 12",
                "field name Ptr 8",
                "pad 24 8",
                "end",
            ]
            .join("\n")
        );
    }

    #[test]
    fn test_generate_skips_overlaps_and_names_unnamed() {
        let mut project = ProjectData::new();
        let class = project.new_class("Overlap");
        class.push_property(0x0, FieldKind::U32);
        class.push_property(0x2, FieldKind::U16);

        let out = generate(
            project.classes().iter().skip(1),
            &mut Recorder::default(),
            PointerWidth::Bits64,
        );
        assert_eq!(out, "begin Overlap\nfield field_0000 U32 4\nend");
    }

    #[test]
    fn test_generate_placeholder_only_class_is_all_padding() {
        let project = ProjectData::new();
        let out = generate(
            project.classes(),
            &mut Recorder::default(),
            PointerWidth::Bits64,
        );
        assert_eq!(out, "begin NewClass\npad 0 20\nend");
    }

    #[test]
    fn test_generate_renames_repeated_names() {
        let mut project = ProjectData::new();
        let class = project.new_class("Obj");
        class.push_named_property(0x0, FieldKind::U32, "type");
        class.push_named_property(0x4, FieldKind::U32, "type");
        class.push_named_property(0x8, FieldKind::U8, "max hp");
        class.push_named_property(0x9, FieldKind::U8, "max_hp");

        let out = generate(
            project.classes().iter().skip(1),
            &mut Recorder::default(),
            PointerWidth::Bits64,
        );
        assert_eq!(
            out,
            [
                "begin Obj",
                "field type U32 4",
                "field type_0004 U32 4",
                "field max_hp U8 1",
                "field max_hp_0009 U8 1",
                "end",
            ]
            .join("\n")
        );
    }

    #[test]
    fn test_sanitize_ident() {
        assert_eq!(sanitize_ident("health"), "health");
        assert_eq!(sanitize_ident("max hp"), "max_hp");
        assert_eq!(sanitize_ident("2d"), "_2d");
        assert_eq!(sanitize_ident(""), "_");
    }

    #[test]
    fn test_generator_kind_from_str() {
        assert_eq!(GeneratorKind::from_str("rust").unwrap(), GeneratorKind::Rust);
        assert_eq!(GeneratorKind::from_str("cpp").unwrap(), GeneratorKind::Cpp);
        assert!(GeneratorKind::from_str("java").is_err());
        assert_eq!(GeneratorKind::Cpp.label(), "C++");
    }
}
