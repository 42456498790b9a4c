//! Memory-mapped backup SRAM
//!
//! STM32F2/F4/F7 parts carry 4 KB of SRAM in the backup domain that keeps its
//! contents on VBAT. This module exposes it as an [`SramRegion`] with
//! volatile accesses. All offset to bus-address arithmetic goes through
//! [`MappedSram::address_of`].
//!
//! # Memory Layout (STM32F4)
//!
//! ```text
//! [BKPSRAM]  0x4002_4000 - 0x4002_4FFF (4 KB)
//! ```

use core::ptr;

use persistent_store_core::traits::SramRegion;

/// Backup SRAM base address (STM32F4 BKPSRAM_BASE)
pub const BKPSRAM_BASE: usize = 0x4002_4000;

/// Backup SRAM size (4 KB)
pub const BKPSRAM_SIZE: usize = 4096;

/// Memory-mapped battery-backed SRAM region
///
/// # Safety Invariants
///
/// - The backup domain must be powered and its clock enabled before use
/// - Only one `MappedSram` per physical region (no concurrent access)
#[derive(Debug)]
pub struct MappedSram {
    /// First bus address of the region
    base: usize,
    /// Region size in bytes
    size: usize,
}

impl MappedSram {
    /// Create a region covering `base..base + size`
    ///
    /// # Safety
    ///
    /// The whole range must be valid, writable memory that nothing else
    /// accesses while this region is alive.
    pub const unsafe fn new(base: usize, size: usize) -> Self {
        Self { base, size }
    }

    /// Create the region for the on-chip backup SRAM
    ///
    /// # Safety
    ///
    /// The backup SRAM clock and backup regulator must be enabled, and the
    /// caller must not create a second instance.
    pub const unsafe fn backup_sram() -> Self {
        Self::new(BKPSRAM_BASE, BKPSRAM_SIZE)
    }

    /// First bus address of the region
    pub fn base(&self) -> usize {
        self.base
    }

    /// Map a region offset to its bus address
    ///
    /// Returns `None` if `offset` lies outside the region.
    pub fn address_of(&self, offset: usize) -> Option<usize> {
        (offset < self.size).then(|| self.base + offset)
    }

    fn checked_address(&self, offset: usize) -> usize {
        match self.address_of(offset) {
            Some(address) => address,
            None => panic!(
                "backup SRAM offset {} out of range (size {})",
                offset, self.size
            ),
        }
    }
}

impl SramRegion for MappedSram {
    fn size(&self) -> usize {
        self.size
    }

    fn read(&self, offset: usize) -> u8 {
        let address = self.checked_address(offset);
        // SAFETY: address lies inside the region the constructor vouched for
        unsafe { ptr::read_volatile(address as *const u8) }
    }

    fn write(&mut self, offset: usize, value: u8) {
        let address = self.checked_address(offset);
        // SAFETY: address lies inside the region the constructor vouched for
        unsafe { ptr::write_volatile(address as *mut u8, value) }
    }
}
