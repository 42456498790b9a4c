//! Flash-emulated EEPROM driver abstraction
//!
//! On-chip EEPROM emulation keeps a RAM copy of the emulated area. Bytes are
//! read and written in that copy; the copy is loaded from flash with
//! [`EmulatedEeprom::buffer_fill`] and committed with
//! [`EmulatedEeprom::buffer_flush`], which erases and reprograms flash.

/// Buffered driver for EEPROM emulated in program flash
///
/// # Important
///
/// - `buffer_flush` costs a flash erase cycle; callers should only flush when
///   the buffer actually changed
/// - Buffered reads/writes never touch flash
pub trait EmulatedEeprom {
    /// Load the whole emulated area from flash into the RAM buffer
    fn buffer_fill(&mut self);

    /// Write the RAM buffer back to flash
    fn buffer_flush(&mut self);

    /// Read a byte from the RAM buffer
    fn buffered_read_byte(&mut self, address: usize) -> u8;

    /// Write a byte into the RAM buffer
    fn buffered_write_byte(&mut self, address: usize, value: u8);
}

// ============================================================================
// Mock Implementation (always available for testing)
// ============================================================================

/// Mock flash-emulated EEPROM with `N` bytes for testing
///
/// Keeps the physical flash image and the RAM buffer separately and counts
/// fills and flushes, so tests can check that flash is only reprogrammed when
/// needed.
///
/// # Example
///
/// ```
/// use persistent_store_core::traits::{EmulatedEeprom, MockEmulatedEeprom};
///
/// let mut eeprom = MockEmulatedEeprom::<64>::new();
/// eeprom.buffer_fill();
/// eeprom.buffered_write_byte(0, 0x42);
///
/// // Not in flash until flushed
/// assert_eq!(eeprom.flash()[0], 0xFF);
///
/// eeprom.buffer_flush();
/// assert_eq!(eeprom.flash()[0], 0x42);
/// assert_eq!(eeprom.flush_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct MockEmulatedEeprom<const N: usize> {
    /// Physical flash image
    flash: [u8; N],
    /// RAM working buffer
    buffer: [u8; N],
    /// Number of buffer fills
    fills: u32,
    /// Number of flushes (flash erase/program cycles)
    flushes: u32,
}

impl<const N: usize> MockEmulatedEeprom<N> {
    /// Create a new mock with erased flash and an empty buffer
    pub fn new() -> Self {
        Self {
            flash: [0xFF; N],
            buffer: [0xFF; N],
            fills: 0,
            flushes: 0,
        }
    }

    /// Create a mock whose flash is preloaded with `contents` at address 0
    ///
    /// The buffer stays erased until the first fill.
    pub fn with_flash(contents: &[u8]) -> Self {
        let mut eeprom = Self::new();
        eeprom.flash[..contents.len()].copy_from_slice(contents);
        eeprom
    }

    /// Get the physical flash image (for test verification)
    pub fn flash(&self) -> &[u8; N] {
        &self.flash
    }

    /// Get the RAM buffer (for test verification)
    pub fn buffer(&self) -> &[u8; N] {
        &self.buffer
    }

    /// Number of buffer fills
    pub fn fill_count(&self) -> u32 {
        self.fills
    }

    /// Number of flushes to flash
    pub fn flush_count(&self) -> u32 {
        self.flushes
    }
}

impl<const N: usize> Default for MockEmulatedEeprom<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> EmulatedEeprom for MockEmulatedEeprom<N> {
    fn buffer_fill(&mut self) {
        self.fills += 1;
        self.buffer = self.flash;
    }

    fn buffer_flush(&mut self) {
        self.flushes += 1;
        self.flash = self.buffer;
    }

    fn buffered_read_byte(&mut self, address: usize) -> u8 {
        self.buffer[address]
    }

    fn buffered_write_byte(&mut self, address: usize, value: u8) {
        self.buffer[address] = value;
    }
}
