//! Backend strategy trait
//!
//! Each storage technology implements [`StoreBackend`] once; the facade
//! drives it byte by byte and owns the cursor and checksum bookkeeping.

use core::fmt;

use crate::error::Result;

/// Storage technology behind a backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    /// External SPI/I2C EEPROM, written byte by byte with read-back
    ExternalEeprom,
    /// EEPROM emulated in program flash through a RAM buffer
    FlashEmulated,
    /// Battery-backed SRAM
    BackupSram,
}

impl BackendKind {
    /// Human-readable name
    pub const fn name(self) -> &'static str {
        match self {
            BackendKind::ExternalEeprom => "external EEPROM",
            BackendKind::FlashEmulated => "flash-emulated EEPROM",
            BackendKind::BackupSram => "backup SRAM",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What `access_finish` committed to physical storage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commit {
    /// Staged buffer was written to flash
    Flushed,
    /// Nothing was written during the session, flush skipped
    Clean,
    /// Backend commits on every write; nothing left to do
    Immediate,
}

/// Storage backend strategy
///
/// Positions are linear byte addresses in `0..capacity()`. Bounds are the
/// caller's responsibility unless a backend documents otherwise.
pub trait StoreBackend {
    /// Technology implemented by this backend
    const KIND: BackendKind;

    /// Prepare for a burst of operations
    fn access_start(&mut self) -> Result<()> {
        Ok(())
    }

    /// Commit pending state
    fn access_finish(&mut self) -> Result<Commit> {
        Ok(Commit::Immediate)
    }

    /// Store one byte at `position`
    fn write_byte(&mut self, position: usize, value: u8) -> Result<()>;

    /// Load one byte from `position`
    fn read_byte(&mut self, position: usize) -> Result<u8>;

    /// Size of the usable address space in bytes
    fn capacity(&self) -> usize;
}
