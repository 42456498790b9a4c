//! Build-time backend selection
//!
//! Exactly one backend is compiled in, chosen by cargo features:
//!
//! - `spi_eeprom` / `i2c_eeprom`: raw external EEPROM
//! - `sram_eeprom`: battery-backed SRAM
//! - none of the above: flash-emulated EEPROM (default)
//!
//! The EEPROM end address comes from the `STORE_E2END` environment variable
//! at build time (see `build.rs`).

use persistent_store_core::PersistentStore;

use crate::core::LogSink;

#[cfg(any(feature = "spi_eeprom", feature = "i2c_eeprom"))]
use persistent_store_core::{store::EepromBackend, traits::EepromDevice};

#[cfg(all(
    feature = "sram_eeprom",
    not(any(feature = "spi_eeprom", feature = "i2c_eeprom"))
))]
use persistent_store_core::{store::BackupSramBackend, traits::SramRegion};

#[cfg(not(any(feature = "spi_eeprom", feature = "i2c_eeprom", feature = "sram_eeprom")))]
use persistent_store_core::{store::BufferedFlashBackend, traits::EmulatedEeprom};

#[cfg(all(
    feature = "sram_eeprom",
    any(feature = "spi_eeprom", feature = "i2c_eeprom")
))]
compile_error!("`sram_eeprom` cannot be combined with `spi_eeprom` or `i2c_eeprom`");

/// Last valid EEPROM address
pub const E2END: usize = parse_address(env!("STORE_E2END"));

/// Usable size of both EEPROM backends in bytes
pub const EEPROM_CAPACITY: usize = E2END + 1;

/// Backend selected for this build
#[cfg(any(feature = "spi_eeprom", feature = "i2c_eeprom"))]
pub type ConfiguredBackend<D> = EepromBackend<D>;

/// Backend selected for this build
#[cfg(all(
    feature = "sram_eeprom",
    not(any(feature = "spi_eeprom", feature = "i2c_eeprom"))
))]
pub type ConfiguredBackend<R> = BackupSramBackend<R>;

/// Backend selected for this build
#[cfg(not(any(feature = "spi_eeprom", feature = "i2c_eeprom", feature = "sram_eeprom")))]
pub type ConfiguredBackend<D> = BufferedFlashBackend<D>;

/// Store selected for this build, logging through [`LogSink`]
pub type ConfiguredStore<D> = PersistentStore<ConfiguredBackend<D>, LogSink>;

/// Build the configured store over an external EEPROM driver
#[cfg(any(feature = "spi_eeprom", feature = "i2c_eeprom"))]
pub fn configured_store<D: EepromDevice>(device: D) -> ConfiguredStore<D> {
    PersistentStore::with_sink(EepromBackend::new(device, EEPROM_CAPACITY), LogSink::new())
}

/// Build the configured store over a backup SRAM region
#[cfg(all(
    feature = "sram_eeprom",
    not(any(feature = "spi_eeprom", feature = "i2c_eeprom"))
))]
pub fn configured_store<R: SramRegion>(region: R) -> ConfiguredStore<R> {
    PersistentStore::with_sink(BackupSramBackend::new(region), LogSink::new())
}

/// Build the configured store over the on-chip backup SRAM
///
/// # Safety
///
/// Same requirements as [`crate::platform::MappedSram::backup_sram`].
#[cfg(all(
    feature = "sram_eeprom",
    not(any(feature = "spi_eeprom", feature = "i2c_eeprom"))
))]
pub unsafe fn backup_sram_store() -> ConfiguredStore<crate::platform::MappedSram> {
    configured_store(crate::platform::MappedSram::backup_sram())
}

/// Build the configured store over a flash EEPROM emulation driver
#[cfg(not(any(feature = "spi_eeprom", feature = "i2c_eeprom", feature = "sram_eeprom")))]
pub fn configured_store<D: EmulatedEeprom>(driver: D) -> ConfiguredStore<D> {
    PersistentStore::with_sink(
        BufferedFlashBackend::new(driver, EEPROM_CAPACITY),
        LogSink::new(),
    )
}

/// Parse a decimal or `0x`-prefixed hex address at compile time
///
/// Underscores are accepted as digit separators.
const fn parse_address(text: &str) -> usize {
    let bytes = text.as_bytes();
    let hex = bytes.len() > 2 && bytes[0] == b'0' && (bytes[1] == b'x' || bytes[1] == b'X');
    let radix = if hex { 16 } else { 10 };
    let mut i = if hex { 2 } else { 0 };
    assert!(i < bytes.len(), "STORE_E2END must not be empty");

    let mut value: usize = 0;
    while i < bytes.len() {
        let digit = match bytes[i] {
            b @ b'0'..=b'9' => (b - b'0') as usize,
            b @ b'a'..=b'f' if hex => (b - b'a' + 10) as usize,
            b @ b'A'..=b'F' if hex => (b - b'A' + 10) as usize,
            b'_' => {
                i += 1;
                continue;
            }
            _ => panic!("STORE_E2END must be a decimal or 0x-prefixed hex number"),
        };
        value = value * radix + digit;
        i += 1;
    }
    value
}
