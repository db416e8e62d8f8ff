//! Captured memory snapshots.

use crate::error::{Error, Result};
use crate::memory::ReadMemory;

/// A copy of target memory anchored at a base address.
#[derive(Debug, Clone)]
pub struct SnapshotMemory {
    data: Vec<u8>,
    base: u64,
}

impl SnapshotMemory {
    pub fn new(base: u64, data: Vec<u8>) -> Self {
        Self { data, base }
    }

    pub fn base_address(&self) -> u64 {
        self.base
    }

    /// First address past the captured range.
    pub fn end_address(&self) -> u64 {
        self.base.saturating_add(self.data.len() as u64)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    fn start_offset(&self, address: u64) -> Result<usize> {
        if address < self.base || address >= self.end_address() {
            return Err(Error::MemoryReadFailed {
                address,
                message: format!(
                    "Outside snapshot (0x{:X}..0x{:X})",
                    self.base,
                    self.end_address()
                ),
            });
        }
        Ok((address - self.base) as usize)
    }
}

impl ReadMemory for SnapshotMemory {
    fn read_bytes(&self, address: u64, size: usize) -> Result<Vec<u8>> {
        if size == 0 {
            return Ok(Vec::new());
        }
        let offset = self.start_offset(address)?;
        let end = offset.checked_add(size).ok_or_else(|| Error::MemoryReadFailed {
            address,
            message: "Size overflow".to_string(),
        })?;

        if end > self.data.len() {
            return Err(Error::MemoryReadFailed {
                address,
                message: format!(
                    "Out of bounds: offset={}, size={}, len={}",
                    offset,
                    size,
                    self.data.len()
                ),
            });
        }
        Ok(self.data[offset..end].to_vec())
    }

    fn read_up_to(&self, address: u64, max_len: usize) -> Result<Vec<u8>> {
        let offset = self.start_offset(address)?;
        let end = offset.saturating_add(max_len).min(self.data.len());
        Ok(self.data[offset..end].to_vec())
    }
}

/// Builder for assembling snapshots.
///
/// Offsets are relative to the base address.
#[derive(Debug, Clone)]
pub struct SnapshotBuilder {
    data: Vec<u8>,
    base: u64,
}

impl Default for SnapshotBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotBuilder {
    /// Create a new builder with default base address (0x1000)
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            base: 0x1000,
        }
    }

    pub fn base(mut self, base: u64) -> Self {
        self.base = base;
        self
    }

    /// Pre-allocate buffer with zeros up to the specified size
    pub fn with_size(mut self, size: usize) -> Self {
        self.data.resize(size, 0);
        self
    }

    pub fn write_u16(self, offset: usize, value: u16) -> Self {
        self.write_bytes(offset, &value.to_le_bytes())
    }

    pub fn write_i32(self, offset: usize, value: i32) -> Self {
        self.write_bytes(offset, &value.to_le_bytes())
    }

    pub fn write_u32(self, offset: usize, value: u32) -> Self {
        self.write_bytes(offset, &value.to_le_bytes())
    }

    pub fn write_u64(self, offset: usize, value: u64) -> Self {
        self.write_bytes(offset, &value.to_le_bytes())
    }

    pub fn write_f32(self, offset: usize, value: f32) -> Self {
        self.write_bytes(offset, &value.to_le_bytes())
    }

    pub fn write_bytes(mut self, offset: usize, bytes: &[u8]) -> Self {
        self.ensure_size(offset + bytes.len());
        self.data[offset..offset + bytes.len()].copy_from_slice(bytes);
        self
    }

    /// Write a null-terminated UTF-8 string at the specified offset
    pub fn write_c_string(mut self, offset: usize, text: &str) -> Self {
        let bytes = text.as_bytes();
        self.ensure_size(offset + bytes.len() + 1);
        self.data[offset..offset + bytes.len()].copy_from_slice(bytes);
        self.data[offset + bytes.len()] = 0;
        self
    }

    pub fn build(self) -> SnapshotMemory {
        SnapshotMemory {
            data: self.data,
            base: self.base,
        }
    }

    fn ensure_size(&mut self, required: usize) {
        if self.data.len() < required {
            self.data.resize(required, 0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_read() {
        let memory = SnapshotMemory::new(0x140000000, vec![0x01, 0x02, 0x03, 0x04]);

        assert_eq!(memory.read_bytes(0x140000000, 4).unwrap(), vec![1, 2, 3, 4]);
        assert_eq!(memory.read_bytes(0x140000002, 2).unwrap(), vec![3, 4]);
        assert_eq!(memory.end_address(), 0x140000004);
    }

    #[test]
    fn test_snapshot_out_of_bounds() {
        let memory = SnapshotMemory::new(0x1000, vec![0x01, 0x02]);

        assert!(memory.read_bytes(0x1000, 4).is_err());
        assert!(memory.read_bytes(0x1002, 1).is_err());
    }

    #[test]
    fn test_snapshot_below_base() {
        let memory = SnapshotMemory::new(0x2000, vec![0; 4]);

        let result = memory.read_bytes(0x1000, 4);
        assert!(matches!(
            result,
            Err(Error::MemoryReadFailed { address: 0x1000, .. })
        ));
        assert!(!memory.is_readable(0x1000));
        assert!(memory.is_readable(0x2003));
    }

    #[test]
    fn test_snapshot_huge_size_does_not_overflow() {
        let memory = SnapshotMemory::new(0x1000, vec![0; 4]);
        assert!(memory.read_bytes(0x1001, usize::MAX).is_err());
    }

    #[test]
    fn test_read_up_to_clips_at_end() {
        let memory = SnapshotMemory::new(0x1000, b"abc".to_vec());

        assert_eq!(memory.read_up_to(0x1001, 64).unwrap(), b"bc".to_vec());
        assert!(memory.read_up_to(0x1003, 64).is_err());
    }

    #[test]
    fn test_builder_basic() {
        let memory = SnapshotBuilder::new()
            .write_i32(0, 0x12345678)
            .write_u64(4, 0xDEADBEEFCAFEBABE)
            .build();

        assert_eq!(memory.base_address(), 0x1000);
        assert_eq!(
            memory.read_bytes(0x1000, 4).unwrap(),
            0x12345678i32.to_le_bytes().to_vec()
        );
        assert_eq!(
            memory.read_bytes(0x1004, 8).unwrap(),
            0xDEADBEEFCAFEBABEu64.to_le_bytes().to_vec()
        );
    }

    #[test]
    fn test_builder_with_size_and_base() {
        let memory = SnapshotBuilder::new()
            .base(0x7FF600000000)
            .with_size(100)
            .write_u16(98, 0xBEEF)
            .build();

        assert_eq!(memory.len(), 100);
        assert_eq!(
            memory.read_bytes(0x7FF600000000 + 98, 2).unwrap(),
            vec![0xEF, 0xBE]
        );
    }

    #[test]
    fn test_builder_c_string() {
        let memory = SnapshotBuilder::new()
            .with_size(16)
            .write_c_string(0, "Hello")
            .build();

        assert_eq!(&memory.as_bytes()[..6], b"Hello\0");
    }
}
