//! Store wiring
//!
//! Connects the core [`PersistentStore`](persistent_store_core::PersistentStore)
//! to the backend chosen for this build and to the log.

pub mod config;

pub use config::{configured_store, ConfiguredBackend, ConfiguredStore, E2END, EEPROM_CAPACITY};
