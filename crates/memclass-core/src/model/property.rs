use serde::{Deserialize, Serialize};

use crate::field::{FieldKind, FieldValue, PointerWidth};

/// One typed field of a class.
///
/// `offset` is relative to the owning class's address and independent of the
/// property's position in the list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub offset: u64,
    pub kind: FieldKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Recomputed on every refresh, never persisted.
    #[serde(skip)]
    pub data: Option<FieldValue>,
}

impl Property {
    pub fn new(offset: u64, kind: FieldKind) -> Self {
        Self {
            offset,
            kind,
            name: None,
            data: None,
        }
    }

    pub fn named(offset: u64, kind: FieldKind, name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::new(offset, kind)
        }
    }

    /// The user-given name, or the kind's default label.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(self.kind.label())
    }

    pub fn width(&self, pointer_width: PointerWidth) -> u64 {
        self.kind.width(pointer_width) as u64
    }

    /// First offset past this property.
    pub fn end(&self, pointer_width: PointerWidth) -> u64 {
        self.offset.saturating_add(self.width(pointer_width))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        assert_eq!(Property::new(0, FieldKind::I32).display_name(), "int32");
        assert_eq!(
            Property::named(0, FieldKind::I32, "health").display_name(),
            "health"
        );
    }

    #[test]
    fn test_end_uses_pointer_width() {
        let property = Property::new(0x10, FieldKind::Ptr);
        assert_eq!(property.end(PointerWidth::Bits32), 0x14);
        assert_eq!(property.end(PointerWidth::Bits64), 0x18);
    }

    #[test]
    fn test_data_is_not_serialized() {
        let mut property = Property::named(4, FieldKind::U16, "count");
        property.data = Some(FieldValue::Unsigned(7));

        let json = serde_json::to_value(&property).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "offset": 4, "kind": "U16", "name": "count" })
        );

        let restored: Property = serde_json::from_value(json).unwrap();
        assert_eq!(restored.data, None);
        assert_eq!(restored.name.as_deref(), Some("count"));
    }
}
