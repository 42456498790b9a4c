//! Flash-emulated EEPROM backend
//!
//! The whole emulated area is staged in RAM at session start. Writes only
//! touch the staging buffer and mark the session dirty; the buffer is written
//! back to flash at session end, and only if something was written, since
//! every flush costs a flash erase cycle.

use super::backend::{BackendKind, Commit, StoreBackend};
use crate::error::Result;
use crate::traits::EmulatedEeprom;

/// Buffered flash-emulated EEPROM backend
///
/// # Example
///
/// ```
/// use persistent_store_core::store::{BufferedFlashBackend, Commit, StoreBackend};
/// use persistent_store_core::traits::MockEmulatedEeprom;
///
/// let mut backend = BufferedFlashBackend::new(MockEmulatedEeprom::<64>::new(), 64);
///
/// backend.access_start().unwrap();
/// assert_eq!(backend.access_finish().unwrap(), Commit::Clean);
///
/// backend.access_start().unwrap();
/// backend.write_byte(0, 0x01).unwrap();
/// assert_eq!(backend.access_finish().unwrap(), Commit::Flushed);
/// assert_eq!(backend.driver().flush_count(), 1);
/// ```
#[derive(Debug)]
pub struct BufferedFlashBackend<D: EmulatedEeprom> {
    /// Emulation driver
    driver: D,
    /// Usable size in bytes (E2END + 1)
    capacity: usize,
    /// Staging buffer holds writes not yet flushed
    dirty: bool,
}

impl<D: EmulatedEeprom> BufferedFlashBackend<D> {
    /// Create a backend over `driver` exposing `capacity` bytes
    pub fn new(driver: D, capacity: usize) -> Self {
        Self {
            driver,
            capacity,
            dirty: false,
        }
    }

    /// True if the staging buffer holds unflushed writes
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Get driver reference (for testing)
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Get mutable driver reference (for testing)
    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Release the driver
    pub fn into_driver(self) -> D {
        self.driver
    }
}

impl<D: EmulatedEeprom> StoreBackend for BufferedFlashBackend<D> {
    const KIND: BackendKind = BackendKind::FlashEmulated;

    fn access_start(&mut self) -> Result<()> {
        self.driver.buffer_fill();
        // Reload discarded any unflushed writes
        self.dirty = false;
        Ok(())
    }

    fn access_finish(&mut self) -> Result<Commit> {
        if !self.dirty {
            return Ok(Commit::Clean);
        }

        self.driver.buffer_flush();
        self.dirty = false;
        Ok(Commit::Flushed)
    }

    fn write_byte(&mut self, position: usize, value: u8) -> Result<()> {
        self.driver.buffered_write_byte(position, value);
        self.dirty = true;
        Ok(())
    }

    fn read_byte(&mut self, position: usize) -> Result<u8> {
        Ok(self.driver.buffered_read_byte(position))
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}
