//! Platform abstraction layer
//!
//! This module provides hardware access for the store backends.
//! All platform-specific code (bus addresses, volatile accesses) must be
//! isolated to this module.

pub mod sram;

// Re-export commonly used types
pub use sram::{MappedSram, BKPSRAM_BASE, BKPSRAM_SIZE};
