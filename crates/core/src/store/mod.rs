//! Persistent store facade
//!
//! [`PersistentStore`] presents one sequential read/write/checksum contract
//! over whichever [`StoreBackend`] it was built with. The backend is chosen
//! once, at build configuration time, and injected here.
//!
//! # Session model
//!
//! ```text
//! Idle --access_start--> Active --access_finish--> Idle
//! ```
//!
//! `write_data`/`read_data` are only meaningful while a session is active.
//! The state is tracked for inspection but not enforced.

pub mod backend;
pub mod buffered;
pub mod eeprom;
pub mod sram;

pub use backend::{BackendKind, Commit, StoreBackend};
pub use buffered::BufferedFlashBackend;
pub use eeprom::{EepromBackend, EepromStats};
pub use sram::BackupSramBackend;

use crate::checksum::crc16;
use crate::error::Result;
use crate::traits::{DiagnosticSink, NullSink};

/// Session state of a store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No session open
    Idle,
    /// Between `access_start` and `access_finish`
    Active,
}

/// Byte-addressable persistent store
///
/// The caller owns the cursor and the checksum accumulator. Every call
/// advances the cursor by exactly the number of bytes processed and folds each
/// byte into the checksum in address order, so a transaction may be split
/// across any number of calls.
///
/// # Example
///
/// ```
/// use persistent_store_core::store::{BufferedFlashBackend, PersistentStore};
/// use persistent_store_core::traits::MockEmulatedEeprom;
///
/// let backend = BufferedFlashBackend::new(MockEmulatedEeprom::<4096>::new(), 4096);
/// let mut store = PersistentStore::new(backend);
///
/// store.access_start().unwrap();
/// let mut pos = 10;
/// let mut crc = 0;
/// store.write_data(&mut pos, &[0x01, 0x02, 0x03], &mut crc).unwrap();
/// store.access_finish().unwrap();
///
/// store.access_start().unwrap();
/// let mut pos = 10;
/// let mut check = 0;
/// let mut buf = [0u8; 3];
/// store.read_data(&mut pos, &mut buf, &mut check, true).unwrap();
/// store.access_finish().unwrap();
///
/// assert_eq!(buf, [0x01, 0x02, 0x03]);
/// assert_eq!(pos, 13);
/// assert_eq!(check, crc);
/// ```
#[derive(Debug)]
pub struct PersistentStore<B: StoreBackend, S: DiagnosticSink = NullSink> {
    /// Selected backend strategy
    backend: B,
    /// Where failures are reported
    sink: S,
    /// Current session state
    state: SessionState,
}

impl<B: StoreBackend> PersistentStore<B> {
    /// Create a store that discards diagnostics
    pub fn new(backend: B) -> Self {
        Self::with_sink(backend, NullSink)
    }
}

impl<B: StoreBackend, S: DiagnosticSink> PersistentStore<B, S> {
    /// Create a store reporting failures to `sink`
    pub fn with_sink(backend: B, sink: S) -> Self {
        Self {
            backend,
            sink,
            state: SessionState::Idle,
        }
    }

    /// Begin a storage session
    ///
    /// The buffered flash backend stages the whole store into RAM here; the
    /// other backends have nothing to prepare.
    pub fn access_start(&mut self) -> Result<()> {
        self.backend.access_start()?;
        self.state = SessionState::Active;
        Ok(())
    }

    /// End a storage session
    ///
    /// The buffered flash backend flushes to flash only if a byte was written
    /// since the last flush.
    pub fn access_finish(&mut self) -> Result<()> {
        let commit = self.backend.access_finish()?;
        self.state = SessionState::Idle;
        self.sink.session_finished(B::KIND, commit);
        Ok(())
    }

    /// Write `source` at `*position`, folding every byte into `*crc`
    ///
    /// On success `*position` has advanced by `source.len()`.
    ///
    /// # Errors
    ///
    /// Returns the backend error for the first byte that fails. The failure
    /// is reported to the sink once, and no later bytes are written; the
    /// cursor and checksum cover only the bytes stored before it.
    pub fn write_data(
        &mut self,
        position: &mut usize,
        source: &[u8],
        crc: &mut u16,
    ) -> Result<()> {
        for &value in source {
            if let Err(e) = self.backend.write_byte(*position, value) {
                self.sink.report(&e);
                return Err(e);
            }
            crc16(crc, &[value]);
            *position += 1;
        }
        Ok(())
    }

    /// Read `destination.len()` bytes from `*position`, folding each into `*crc`
    ///
    /// When `writing` is false the bytes are only checksummed and
    /// `destination` is left untouched, which lets a caller validate stored
    /// data without materializing it.
    pub fn read_data(
        &mut self,
        position: &mut usize,
        destination: &mut [u8],
        crc: &mut u16,
        writing: bool,
    ) -> Result<()> {
        for slot in destination.iter_mut() {
            let value = self.read_one(*position)?;
            if writing {
                *slot = value;
            }
            crc16(crc, &[value]);
            *position += 1;
        }
        Ok(())
    }

    /// Write `source` at `*position` without tracking a checksum
    pub fn write_bytes(&mut self, position: &mut usize, source: &[u8]) -> Result<()> {
        let mut unused = 0;
        self.write_data(position, source, &mut unused)
    }

    /// Read into `destination` from `*position` without tracking a checksum
    pub fn read_bytes(&mut self, position: &mut usize, destination: &mut [u8]) -> Result<()> {
        let mut unused = 0;
        self.read_data(position, destination, &mut unused, true)
    }

    /// Fold `size` stored bytes from `*position` into `*crc`
    ///
    /// Same effect on cursor and checksum as a non-copying `read_data`, but
    /// needs no destination buffer.
    pub fn checksum(&mut self, position: &mut usize, size: usize, crc: &mut u16) -> Result<()> {
        for _ in 0..size {
            let value = self.read_one(*position)?;
            crc16(crc, &[value]);
            *position += 1;
        }
        Ok(())
    }

    /// Run `f` inside a session
    ///
    /// `access_finish` always runs, even when `f` fails. An error from `f`
    /// takes precedence over one from `access_finish`.
    pub fn with_session<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        self.access_start()?;
        let result = f(self);
        let finished = self.access_finish();
        let value = result?;
        finished?;
        Ok(value)
    }

    /// Size of the usable address space in bytes
    pub fn capacity(&self) -> usize {
        self.backend.capacity()
    }

    /// Technology of the configured backend
    pub fn kind(&self) -> BackendKind {
        B::KIND
    }

    /// Current session state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Get backend reference
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Get mutable backend reference (for testing)
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Get sink reference
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Split the store into backend and sink
    pub fn into_parts(self) -> (B, S) {
        (self.backend, self.sink)
    }

    fn read_one(&mut self, position: usize) -> Result<u8> {
        self.backend.read_byte(position).inspect_err(|e| {
            self.sink.report(e);
        })
    }
}
