//! Memory source seam.
//!
//! The crate never touches a live process. Whoever attaches to the target
//! implements [`ReadMemory`]; [`SnapshotMemory`] covers captured dumps and tests.

mod snapshot;

pub use snapshot::{SnapshotBuilder, SnapshotMemory};

use crate::error::Result;

/// Trait for reading bytes from a target address space.
pub trait ReadMemory {
    /// Read exactly `size` bytes at `address`.
    fn read_bytes(&self, address: u64, size: usize) -> Result<Vec<u8>>;

    /// Read at most `max_len` bytes at `address`.
    ///
    /// Sources that know their bounds may return fewer bytes instead of
    /// failing. The default demands the full length.
    fn read_up_to(&self, address: u64, max_len: usize) -> Result<Vec<u8>> {
        self.read_bytes(address, max_len)
    }

    fn is_readable(&self, address: u64) -> bool {
        self.read_bytes(address, 1).is_ok()
    }
}
