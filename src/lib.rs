#![cfg_attr(not(test), no_std)]

//! persistent_store - Byte-addressable persistent store for embedded controllers
//!
//! This library wires the backend-agnostic store from `persistent_store_core`
//! to the platform: log output, memory-mapped backup SRAM and the
//! build-time choice of backend.

// Platform abstraction layer (memory-mapped regions, target constants)
pub mod platform;

// Logging and diagnostics
pub mod core;

// Build-time backend selection
pub mod store;

pub use persistent_store_core::{PersistentStore, StoreBackend, StoreError};
pub use store::config::{configured_store, ConfiguredBackend, ConfiguredStore};

// Note: Logging macros (log_info!, log_warn!, log_error!, log_debug!, log_trace!)
// are exported at crate root via #[macro_export] in core::logging
