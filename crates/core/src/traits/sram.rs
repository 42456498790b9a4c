//! Battery-backed SRAM region abstraction
//!
//! Backup SRAM is plain memory that survives power loss while the backup
//! domain is powered. The store sees it as one fixed-size region addressed by
//! offset; how an offset becomes a bus address is up to the implementation.

/// Fixed-size byte region in battery-backed memory
///
/// Callers must keep `offset < size()`. Implementations may panic otherwise.
pub trait SramRegion {
    /// Region size in bytes
    fn size(&self) -> usize;

    /// Read the byte at `offset`
    fn read(&self, offset: usize) -> u8;

    /// Write the byte at `offset`
    fn write(&mut self, offset: usize, value: u8);
}

/// Plain array as an SRAM region (host testing, RAM-backed simulation)
impl<const N: usize> SramRegion for [u8; N] {
    fn size(&self) -> usize {
        N
    }

    fn read(&self, offset: usize) -> u8 {
        self[offset]
    }

    fn write(&mut self, offset: usize, value: u8) {
        self[offset] = value;
    }
}
