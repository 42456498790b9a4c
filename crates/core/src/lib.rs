//! persistent_store_core - Pure no_std persistent store logic
//!
//! This crate contains the backend-agnostic store facade, the three storage
//! backends and the checksum accumulator. Everything here can be tested on
//! host without any feature flags.
//!
//! # Design Principles
//!
//! - **Zero cfg**: No `#[cfg(feature = ...)]` directives allowed
//! - **Pure no_std**: No std library dependencies
//! - **Trait abstractions**: Drivers and diagnostics injected via traits
//!
//! # Modules
//!
//! - [`checksum`]: CRC16 running accumulator
//! - [`error`]: Store error type
//! - [`traits`]: Driver and diagnostic abstractions with mock implementations
//! - [`store`]: `PersistentStore` facade and backend strategies

#![no_std]

pub mod checksum;
pub mod error;
pub mod store;
pub mod traits;

pub use checksum::crc16;
pub use error::{Result, StoreError};
pub use store::{
    BackendKind, BackupSramBackend, BufferedFlashBackend, Commit, EepromBackend, EepromStats,
    PersistentStore, SessionState, StoreBackend,
};
