//! Backup SRAM backend
//!
//! Battery-backed SRAM is written synchronously with no verification. The
//! position to region-offset mapping lives in [`BackupSramBackend::offset_of`]
//! and is the only place positions are bounds-checked.

use super::backend::{BackendKind, StoreBackend};
use crate::error::{Result, StoreError};
use crate::traits::SramRegion;

/// Backup SRAM backend
///
/// # Example
///
/// ```
/// use persistent_store_core::store::{BackupSramBackend, StoreBackend};
///
/// let mut backend = BackupSramBackend::new([0u8; 128]);
/// backend.write_byte(5, 0x99).unwrap();
///
/// assert_eq!(backend.read_byte(5), Ok(0x99));
/// assert_eq!(backend.offset_of(5), Some(5));
/// assert_eq!(backend.offset_of(128), None);
/// ```
#[derive(Debug)]
pub struct BackupSramBackend<R: SramRegion> {
    /// Battery-backed memory
    region: R,
}

impl<R: SramRegion> BackupSramBackend<R> {
    /// Create a backend over `region`
    pub fn new(region: R) -> Self {
        Self { region }
    }

    /// Map a store position to a region offset
    ///
    /// Returns `None` if `position` lies outside the region.
    pub fn offset_of(&self, position: usize) -> Option<usize> {
        (position < self.region.size()).then_some(position)
    }

    /// Get region reference (for testing)
    pub fn region(&self) -> &R {
        &self.region
    }

    /// Release the region
    pub fn into_region(self) -> R {
        self.region
    }

    fn checked_offset(&self, position: usize) -> Result<usize> {
        self.offset_of(position).ok_or(StoreError::OutOfRange {
            position,
            capacity: self.region.size(),
        })
    }
}

impl<R: SramRegion> StoreBackend for BackupSramBackend<R> {
    const KIND: BackendKind = BackendKind::BackupSram;

    fn write_byte(&mut self, position: usize, value: u8) -> Result<()> {
        let offset = self.checked_offset(position)?;
        self.region.write(offset, value);
        Ok(())
    }

    fn read_byte(&mut self, position: usize) -> Result<u8> {
        let offset = self.checked_offset(position)?;
        Ok(self.region.read(offset))
    }

    fn capacity(&self) -> usize {
        self.region.size()
    }
}
