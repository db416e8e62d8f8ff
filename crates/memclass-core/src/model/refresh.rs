//! Decoding a class's properties from a memory source.

use serde::Serialize;
use tracing::{debug, trace};

use crate::config::strings;
use crate::decode::decode_c_string;
use crate::error::{Error, Result};
use crate::field::{FieldKind, FieldValue, PointerWidth};
use crate::memory::ReadMemory;
use crate::model::{Class, Property};

/// Outcome of a refresh pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RefreshReport {
    pub decoded: usize,
    pub failed: usize,
}

impl RefreshReport {
    pub fn merge(&mut self, other: RefreshReport) {
        self.decoded += other.decoded;
        self.failed += other.failed;
    }
}

impl Class {
    /// Re-decodes every property from `memory` and caches the result in `data`.
    ///
    /// Unresolved classes only have their cached values cleared. A failed
    /// read leaves that property without data and does not stop the pass.
    pub fn refresh<M>(&mut self, memory: &M, pointer_width: PointerWidth) -> RefreshReport
    where
        M: ReadMemory + ?Sized,
    {
        let mut report = RefreshReport::default();

        if !self.is_resolved() {
            self.clear_data();
            return report;
        }

        let base = self.address;
        for property in &mut self.properties {
            match read_property(memory, base, property, pointer_width) {
                Ok(value) => {
                    property.data = Some(value);
                    report.decoded += 1;
                }
                Err(e) => {
                    debug!("Failed to read {} at +0x{:X}: {}", property.kind, property.offset, e);
                    property.data = None;
                    report.failed += 1;
                }
            }
        }

        trace!(
            "Refreshed class {} ({}): {} decoded, {} failed",
            self.name,
            self.uuid(),
            report.decoded,
            report.failed
        );
        report
    }
}

fn read_property<M>(
    memory: &M,
    base: u64,
    property: &Property,
    pointer_width: PointerWidth,
) -> Result<FieldValue>
where
    M: ReadMemory + ?Sized,
{
    let address = base
        .checked_add(property.offset)
        .ok_or_else(|| Error::MemoryReadFailed {
            address: base,
            message: format!("Offset 0x{:X} overflows the address space", property.offset),
        })?;

    let width = property.kind.width(pointer_width);
    let bytes = memory.read_bytes(address, width)?;
    let mut value = FieldValue::decode(property.kind, &bytes, pointer_width)?;

    if property.kind == FieldKind::StrPtr {
        if let FieldValue::StringPointer { address, text } = &mut value {
            *text = memory
                .read_up_to(*address, strings::MAX_STRING_LEN)
                .ok()
                .map(|bytes| decode_c_string(&bytes));
        }
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{SnapshotBuilder, SnapshotMemory};
    use uuid::Uuid;

    const BASE: u64 = 0x1000;

    fn class_at(address: u64) -> Class {
        let mut class = Class::new(Uuid::new_v4(), "Test".to_string());
        class.set_address(address);
        class
    }

    #[test]
    fn test_refresh_decodes_each_kind() {
        let memory = SnapshotBuilder::new()
            .with_size(0x40)
            .write_bytes(0x00, &[0xFF])
            .write_u16(0x02, 0xFFFE)
            .write_u32(0x04, 0xDEAD_BEEF)
            .write_f32(0x08, 1.5)
            .write_u64(0x10, 0x2000)
            .write_u64(0x18, BASE + 0x30)
            .write_c_string(0x30, "player")
            .build();

        let mut class = class_at(BASE);
        class.push_property(0x00, FieldKind::I8);
        class.push_property(0x02, FieldKind::I16);
        class.push_property(0x04, FieldKind::U32);
        class.push_property(0x08, FieldKind::Unk32);
        class.push_property(0x10, FieldKind::Ptr);
        class.push_property(0x18, FieldKind::StrPtr);

        let report = class.refresh(&memory, PointerWidth::Bits64);
        assert_eq!(report, RefreshReport { decoded: 6, failed: 0 });

        let data: Vec<FieldValue> = class
            .properties
            .iter()
            .map(|p| p.data.clone().unwrap())
            .collect();
        assert_eq!(data[0], FieldValue::Signed(-1));
        assert_eq!(data[1], FieldValue::Signed(-2));
        assert_eq!(data[2], FieldValue::Unsigned(0xDEAD_BEEF));
        assert!(matches!(data[3], FieldValue::Hex { float: Some(f), .. } if f == 1.5));
        assert_eq!(data[4], FieldValue::Pointer(0x2000));
        assert_eq!(
            data[5],
            FieldValue::StringPointer {
                address: BASE + 0x30,
                text: Some("player".to_string())
            }
        );
    }

    #[test]
    fn test_refresh_unresolved_clears_and_reads_nothing() {
        let memory = SnapshotMemory::new(0, vec![0xAA; 16]);
        let mut class = class_at(0);
        class.push_property(0, FieldKind::U8).data = Some(FieldValue::Unsigned(1));

        let report = class.refresh(&memory, PointerWidth::Bits64);
        assert_eq!(report, RefreshReport::default());
        assert_eq!(class.properties[0].data, None);
    }

    #[test]
    fn test_refresh_continues_past_failed_reads() {
        let memory = SnapshotBuilder::new().with_size(8).build();
        let mut class = class_at(BASE);
        class.push_property(0x100, FieldKind::U32).data = Some(FieldValue::Unsigned(9));
        class.push_property(0x04, FieldKind::U32);

        let report = class.refresh(&memory, PointerWidth::Bits64);
        assert_eq!(report, RefreshReport { decoded: 1, failed: 1 });
        assert_eq!(class.properties[0].data, None);
        assert_eq!(class.properties[1].data, Some(FieldValue::Unsigned(0)));
    }

    #[test]
    fn test_refresh_string_pointer_to_unreadable_target() {
        let memory = SnapshotBuilder::new().write_u64(0, 0xDEAD_0000).build();
        let mut class = class_at(BASE);
        class.push_property(0, FieldKind::StrPtr);

        let report = class.refresh(&memory, PointerWidth::Bits64);
        assert_eq!(report.decoded, 1);
        assert_eq!(
            class.properties[0].data,
            Some(FieldValue::StringPointer {
                address: 0xDEAD_0000,
                text: None
            })
        );
    }

    #[test]
    fn test_refresh_32bit_target_pointer() {
        let memory = SnapshotBuilder::new()
            .write_u32(0, 0x0040_1000)
            .write_u32(4, 0xFFFF_FFFF)
            .build();
        let mut class = class_at(BASE);
        class.push_property(0, FieldKind::Ptr);
        class.push_property(4, FieldKind::U32);

        class.refresh(&memory, PointerWidth::Bits32);
        assert_eq!(class.properties[0].data, Some(FieldValue::Pointer(0x0040_1000)));
        assert_eq!(class.properties[1].data, Some(FieldValue::Unsigned(0xFFFF_FFFF)));
    }

    #[test]
    fn test_refresh_offset_overflow_is_a_failed_read() {
        let memory = SnapshotBuilder::new().with_size(8).build();
        let mut class = class_at(u64::MAX - 1);
        class.push_property(0x10, FieldKind::U8);

        let report = class.refresh(&memory, PointerWidth::Bits64);
        assert_eq!(report.failed, 1);
    }

    #[test]
    fn test_report_merge() {
        let mut total = RefreshReport { decoded: 2, failed: 1 };
        total.merge(RefreshReport { decoded: 3, failed: 0 });
        assert_eq!(total, RefreshReport { decoded: 5, failed: 1 });
    }
}
