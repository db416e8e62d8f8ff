use serde::Serialize;
use uuid::Uuid;

use crate::field::{FieldKind, PointerWidth};
use crate::model::Property;

/// A named memory layout anchored at a base address.
///
/// The uuid is fixed at creation and is the only handle other code should
/// keep; names can change and need not be unique.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Class {
    pub name: String,
    uuid: Uuid,
    /// `0` while the class is not attached to a live target.
    pub address: u64,
    pub properties: Vec<Property>,
}

impl Class {
    pub(crate) fn new(uuid: Uuid, name: String) -> Self {
        Self {
            name,
            uuid,
            address: 0,
            properties: Vec::new(),
        }
    }

    /// Stable handle for lookups through `ProjectData`.
    pub fn uuid(&self) -> Uuid {
        self.uuid
    }

    /// Display name; not unique.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Anchors the class at `address`; `0` detaches it.
    pub fn set_address(&mut self, address: u64) {
        self.address = address;
    }

    /// Whether the class points at a live address.
    pub fn is_resolved(&self) -> bool {
        self.address != 0
    }

    /// Appends an unnamed property and returns it for further edits.
    pub fn push_property(&mut self, offset: u64, kind: FieldKind) -> &mut Property {
        self.properties.push(Property::new(offset, kind));
        let last = self.properties.len() - 1;
        &mut self.properties[last]
    }

    /// Appends a named property and returns it for further edits.
    pub fn push_named_property(
        &mut self,
        offset: u64,
        kind: FieldKind,
        name: impl Into<String>,
    ) -> &mut Property {
        self.properties.push(Property::named(offset, kind, name));
        let last = self.properties.len() - 1;
        &mut self.properties[last]
    }

    /// Covers `len` bytes starting at `offset` with placeholder properties,
    /// using the widest placeholder that still fits at each step.
    pub fn add_padding(&mut self, offset: u64, len: u64) {
        let mut offset = offset;
        let mut remaining = len;

        while remaining > 0 {
            let (kind, width) = match remaining {
                8.. => (FieldKind::Unk64, 8),
                4..=7 => (FieldKind::Unk32, 4),
                2..=3 => (FieldKind::Unk16, 2),
                _ => (FieldKind::Unk8, 1),
            };
            self.properties.push(Property::new(offset, kind));
            offset += width;
            remaining -= width;
        }
    }

    /// Extent of the layout: the furthest end of any property.
    pub fn size(&self, pointer_width: PointerWidth) -> u64 {
        self.properties
            .iter()
            .map(|p| p.end(pointer_width))
            .max()
            .unwrap_or(0)
    }

    /// First property in display order starting at `offset`.
    pub fn property_at(&self, offset: u64) -> Option<&Property> {
        self.properties.iter().find(|p| p.offset == offset)
    }

    /// Properties in offset order. Display order is left untouched.
    pub fn sorted_by_offset(&self) -> Vec<&Property> {
        let mut sorted: Vec<&Property> = self.properties.iter().collect();
        sorted.sort_by_key(|p| p.offset);
        sorted
    }

    /// Drops every cached decoded value.
    pub fn clear_data(&mut self) {
        for property in &mut self.properties {
            property.data = None;
        }
    }
}
