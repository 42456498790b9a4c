//! External EEPROM driver abstraction
//!
//! Serial EEPROMs (SPI or I2C) are randomly addressable and commit every byte
//! synchronously, but wear out after roughly 100,000 write cycles per cell.

/// Byte-level driver for an external serial EEPROM
///
/// Implementations wrap the vendor driver. Both calls are assumed to succeed;
/// the store detects failed writes by reading back.
///
/// # Safety Invariants
///
/// - The device must be initialized before the store is used
/// - Only one owner per device (no concurrent access)
pub trait EepromDevice {
    /// Read the byte stored at `address`
    fn read_byte(&mut self, address: usize) -> u8;

    /// Program the byte at `address`
    fn write_byte(&mut self, address: usize, value: u8);
}

// ============================================================================
// Mock Implementation (always available for testing)
// ============================================================================

/// Mock EEPROM with `N` cells for testing
///
/// Tracks read and write cycles so tests can observe write-avoidance, and can
/// pin a cell to a fixed value to simulate a worn-out byte.
///
/// # Example
///
/// ```
/// use persistent_store_core::traits::{EepromDevice, MockEeprom};
///
/// let mut eeprom = MockEeprom::<64>::new();
/// eeprom.write_byte(3, 0x42);
///
/// assert_eq!(eeprom.read_byte(3), 0x42);
/// assert_eq!(eeprom.write_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct MockEeprom<const N: usize> {
    /// Cell contents (erased EEPROM reads 0xFF)
    cells: [u8; N],
    /// Number of physical write cycles
    writes: u32,
    /// Number of reads
    reads: u32,
    /// Worn cell: (address, value it is stuck at)
    stuck: Option<(usize, u8)>,
}

impl<const N: usize> MockEeprom<N> {
    /// Create a new mock EEPROM in the erased state
    pub fn new() -> Self {
        Self {
            cells: [0xFF; N],
            writes: 0,
            reads: 0,
            stuck: None,
        }
    }

    /// Create a mock EEPROM preloaded with `contents` at address 0
    pub fn with_contents(contents: &[u8]) -> Self {
        let mut eeprom = Self::new();
        eeprom.cells[..contents.len()].copy_from_slice(contents);
        eeprom
    }

    /// Get EEPROM contents (for test verification)
    pub fn contents(&self) -> &[u8; N] {
        &self.cells
    }

    /// Number of physical write cycles since creation or the last reset
    pub fn write_count(&self) -> u32 {
        self.writes
    }

    /// Number of reads since creation or the last reset
    pub fn read_count(&self) -> u32 {
        self.reads
    }

    /// Reset read/write counters
    pub fn reset_counts(&mut self) {
        self.writes = 0;
        self.reads = 0;
    }

    /// Pin the cell at `address` to `value`
    ///
    /// Writes to that cell are counted but have no effect, simulating a cell
    /// that has exhausted its write endurance.
    pub fn stick_at(&mut self, address: usize, value: u8) {
        self.cells[address] = value;
        self.stuck = Some((address, value));
    }
}

impl<const N: usize> Default for MockEeprom<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> EepromDevice for MockEeprom<N> {
    fn read_byte(&mut self, address: usize) -> u8 {
        self.reads += 1;
        self.cells[address]
    }

    fn write_byte(&mut self, address: usize, value: u8) {
        self.writes += 1;
        match self.stuck {
            Some((stuck_address, _)) if stuck_address == address => {}
            _ => self.cells[address] = value,
        }
    }
}
