//! Host integration tests for the configured store
//!
//! Exercises the store the way a settings layer drives it: a version header
//! written without checksum, a payload written with a running checksum, the
//! checksum itself, then validation by a checksum-only pass.

use persistent_store::store::EEPROM_CAPACITY;
use persistent_store::{configured_store, PersistentStore, StoreBackend, StoreError};
use persistent_store_core::crc16;
use persistent_store_core::store::{BackupSramBackend, BufferedFlashBackend, EepromBackend};
use persistent_store_core::traits::{MockEeprom, MockEmulatedEeprom, MockSink};

const SIZE: usize = 4096;
const VERSION: &[u8; 4] = b"V001";
const HEADER_LEN: usize = VERSION.len() + 2;

/// Save `payload` after a version header and its checksum
fn save<B: StoreBackend>(store: &mut PersistentStore<B, MockSink>, payload: &[u8]) {
    store
        .with_session(|s| {
            let mut pos = HEADER_LEN;
            let mut crc = 0;
            s.write_data(&mut pos, payload, &mut crc)?;

            let mut pos = 0;
            s.write_bytes(&mut pos, VERSION)?;
            s.write_bytes(&mut pos, &crc.to_le_bytes())?;
            Ok(())
        })
        .unwrap();
}

/// Validate the stored payload of `len` bytes without reading it out
fn validate<B: StoreBackend>(store: &mut PersistentStore<B, MockSink>, len: usize) -> bool {
    store
        .with_session(|s| {
            let mut pos = 0;
            let mut version = [0u8; 4];
            s.read_bytes(&mut pos, &mut version)?;
            let mut stored = [0u8; 2];
            s.read_bytes(&mut pos, &mut stored)?;

            let mut crc = 0;
            s.checksum(&mut pos, len, &mut crc)?;
            Ok(&version == VERSION && crc == u16::from_le_bytes(stored))
        })
        .unwrap()
}

fn eeprom_store() -> PersistentStore<EepromBackend<MockEeprom<SIZE>>, MockSink> {
    PersistentStore::with_sink(EepromBackend::new(MockEeprom::new(), SIZE), MockSink::new())
}

fn flash_store() -> PersistentStore<BufferedFlashBackend<MockEmulatedEeprom<SIZE>>, MockSink> {
    PersistentStore::with_sink(
        BufferedFlashBackend::new(MockEmulatedEeprom::new(), SIZE),
        MockSink::new(),
    )
}

fn sram_store() -> PersistentStore<BackupSramBackend<[u8; SIZE]>, MockSink> {
    PersistentStore::with_sink(BackupSramBackend::new([0u8; SIZE]), MockSink::new())
}

fn payload() -> [u8; 64] {
    let mut data = [0u8; 64];
    for (i, byte) in data.iter_mut().enumerate() {
        *byte = (i as u8).wrapping_mul(37) ^ 0x5C;
    }
    data
}

#[test]
fn settings_round_trip_on_every_backend() {
    let data = payload();

    let mut eeprom = eeprom_store();
    save(&mut eeprom, &data);
    assert!(validate(&mut eeprom, data.len()));

    let mut flash = flash_store();
    save(&mut flash, &data);
    assert!(validate(&mut flash, data.len()));

    let mut sram = sram_store();
    save(&mut sram, &data);
    assert!(validate(&mut sram, data.len()));
}

#[test]
fn corruption_detected_after_reload() {
    let data = payload();
    let mut store = flash_store();
    save(&mut store, &data);

    // Flip one payload byte directly in flash, behind the store's back
    let (backend, sink) = store.into_parts();
    let mut image = *backend.into_driver().flash();
    image[HEADER_LEN + 10] ^= 0x01;

    let mut store = PersistentStore::with_sink(
        BufferedFlashBackend::new(MockEmulatedEeprom::<SIZE>::with_flash(&image), SIZE),
        sink,
    );
    assert!(!validate(&mut store, data.len()));
}

#[test]
fn validation_pass_never_reprograms_flash() {
    let data = payload();
    let mut store = flash_store();
    save(&mut store, &data);
    assert_eq!(store.backend().driver().flush_count(), 1);

    for _ in 0..5 {
        assert!(validate(&mut store, data.len()));
    }
    assert_eq!(store.backend().driver().flush_count(), 1);
    assert_eq!(store.backend().driver().fill_count(), 6);
}

#[test]
fn unchanged_resave_costs_no_eeprom_cycles() {
    let data = payload();
    let mut store = eeprom_store();
    save(&mut store, &data);
    let cycles = store.backend().device().write_count();

    save(&mut store, &data);

    assert_eq!(store.backend().device().write_count(), cycles);
    assert!(validate(&mut store, data.len()));
}

#[test]
fn worn_eeprom_cell_fails_save_once() {
    let data = payload();
    let mut eeprom = MockEeprom::<SIZE>::new();
    eeprom.stick_at(HEADER_LEN + 3, 0xFF ^ data[3]);
    let mut store = PersistentStore::with_sink(EepromBackend::new(eeprom, SIZE), MockSink::new());

    let result = store.with_session(|s| {
        let mut pos = HEADER_LEN;
        let mut crc = 0;
        s.write_data(&mut pos, &data, &mut crc)
    });

    assert!(matches!(
        result,
        Err(StoreError::WriteVerifyFailed { position, .. }) if position == HEADER_LEN + 3
    ));
    assert_eq!(store.sink().report_count(), 1);
    // Bytes after the worn cell were never written
    assert_eq!(store.backend().device().contents()[HEADER_LEN + 4], 0xFF);
}

#[test]
fn checksum_matches_direct_accumulation() {
    let data = payload();
    let mut store = sram_store();

    let mut crc = 0;
    let mut pos = 100;
    for chunk in data.chunks(7) {
        store.write_data(&mut pos, chunk, &mut crc).unwrap();
    }

    let mut expected = 0;
    crc16(&mut expected, &data);
    assert_eq!(crc, expected);
    assert_eq!(pos, 100 + data.len());
}

#[cfg(not(any(feature = "spi_eeprom", feature = "i2c_eeprom", feature = "sram_eeprom")))]
#[test]
fn configured_store_round_trip() {
    let mut store = configured_store(MockEmulatedEeprom::<SIZE>::new());
    assert_eq!(store.capacity(), EEPROM_CAPACITY);

    store
        .with_session(|s| {
            let mut pos = 10;
            s.write_bytes(&mut pos, &[0x01, 0x02, 0x03])
        })
        .unwrap();

    let mut buf = [0u8; 3];
    store
        .with_session(|s| {
            let mut pos = 10;
            s.read_bytes(&mut pos, &mut buf)
        })
        .unwrap();

    assert_eq!(buf, [0x01, 0x02, 0x03]);
    assert_eq!(store.capacity(), EEPROM_CAPACITY);
    assert_eq!(store.backend().driver().flush_count(), 1);
}

#[cfg(any(feature = "spi_eeprom", feature = "i2c_eeprom"))]
#[test]
fn configured_store_round_trip() {
    let mut store = configured_store(MockEeprom::<SIZE>::new());
    assert_eq!(store.capacity(), EEPROM_CAPACITY);

    let mut pos = 10;
    store.write_bytes(&mut pos, &[0x01, 0x02, 0x03]).unwrap();

    let mut buf = [0u8; 3];
    let mut pos = 10;
    store.read_bytes(&mut pos, &mut buf).unwrap();

    assert_eq!(buf, [0x01, 0x02, 0x03]);
    assert_eq!(store.backend().device().write_count(), 3);
}

#[cfg(all(
    feature = "sram_eeprom",
    not(any(feature = "spi_eeprom", feature = "i2c_eeprom"))
))]
#[test]
fn configured_store_round_trip() {
    let mut store = configured_store([0u8; SIZE]);
    assert_eq!(store.capacity(), SIZE);

    let mut pos = 10;
    store.write_bytes(&mut pos, &[0x01, 0x02, 0x03]).unwrap();

    let mut buf = [0u8; 3];
    let mut pos = 10;
    store.read_bytes(&mut pos, &mut buf).unwrap();

    assert_eq!(buf, [0x01, 0x02, 0x03]);
}
