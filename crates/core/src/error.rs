//! Store error types
//!
//! Provides the error type shared by every backend and the facade.

use core::fmt;

/// Result type for store operations
pub type Result<T> = core::result::Result<T, StoreError>;

/// Errors from persistent store operations
///
/// Only two conditions are ever signalled. Everything else (bad cursor for
/// the EEPROM backends, zero-length calls, session misuse) is the caller's
/// responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    /// A byte written to external EEPROM did not read back as intended
    WriteVerifyFailed {
        /// Address of the failing byte
        position: usize,
        /// Value that was written
        expected: u8,
        /// Value read back after the write
        actual: u8,
    },
    /// Position falls outside the backup SRAM region
    OutOfRange {
        /// Requested position
        position: usize,
        /// Size of the region in bytes
        capacity: usize,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::WriteVerifyFailed {
                position,
                expected,
                actual,
            } => write!(
                f,
                "Error writing to EEPROM at {}: wrote 0x{:02X}, read back 0x{:02X}",
                position, expected, actual
            ),
            StoreError::OutOfRange { position, capacity } => write!(
                f,
                "Store position {} out of range (capacity {})",
                position, capacity
            ),
        }
    }
}
