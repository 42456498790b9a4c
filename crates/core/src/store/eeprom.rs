//! External EEPROM backend
//!
//! Serial EEPROM cells survive only ~100,000 write cycles, so each byte is
//! compared with what is already stored and only programmed when it differs.
//! Every programmed byte is read back to catch failing cells.

use super::backend::{BackendKind, StoreBackend};
use crate::error::{Result, StoreError};
use crate::traits::EepromDevice;

/// Write statistics for wear monitoring
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EepromStats {
    /// Bytes physically programmed
    pub physical_writes: u32,
    /// Bytes skipped because the stored value already matched
    pub skipped_writes: u32,
}

/// Raw external EEPROM backend (SPI or I2C)
///
/// # Example
///
/// ```
/// use persistent_store_core::store::{EepromBackend, StoreBackend};
/// use persistent_store_core::traits::MockEeprom;
///
/// let mut backend = EepromBackend::new(MockEeprom::<64>::new(), 64);
/// backend.write_byte(0, 0x12).unwrap();
/// backend.write_byte(0, 0x12).unwrap(); // already stored, skipped
///
/// assert_eq!(backend.stats().physical_writes, 1);
/// assert_eq!(backend.stats().skipped_writes, 1);
/// ```
#[derive(Debug)]
pub struct EepromBackend<D: EepromDevice> {
    /// EEPROM driver
    device: D,
    /// Usable size in bytes (E2END + 1)
    capacity: usize,
    /// Write statistics
    stats: EepromStats,
}

impl<D: EepromDevice> EepromBackend<D> {
    /// Create a backend over `device` exposing `capacity` bytes
    pub fn new(device: D, capacity: usize) -> Self {
        Self {
            device,
            capacity,
            stats: EepromStats::default(),
        }
    }

    /// Get write statistics
    pub fn stats(&self) -> EepromStats {
        self.stats
    }

    /// Get device reference (for testing)
    pub fn device(&self) -> &D {
        &self.device
    }

    /// Get mutable device reference (for testing)
    pub fn device_mut(&mut self) -> &mut D {
        &mut self.device
    }

    /// Release the device
    pub fn into_device(self) -> D {
        self.device
    }
}

impl<D: EepromDevice> StoreBackend for EepromBackend<D> {
    const KIND: BackendKind = BackendKind::ExternalEeprom;

    fn write_byte(&mut self, position: usize, value: u8) -> Result<()> {
        if self.device.read_byte(position) == value {
            self.stats.skipped_writes += 1;
            return Ok(());
        }

        self.device.write_byte(position, value);
        self.stats.physical_writes += 1;

        let actual = self.device.read_byte(position);
        if actual != value {
            return Err(StoreError::WriteVerifyFailed {
                position,
                expected: value,
                actual,
            });
        }

        Ok(())
    }

    fn read_byte(&mut self, position: usize) -> Result<u8> {
        Ok(self.device.read_byte(position))
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}
