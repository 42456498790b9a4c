//! Collaborator traits for platform-agnostic store logic.
//!
//! This module provides the trait abstractions that decouple the store from
//! vendor drivers and log transports.
//!
//! # Design
//!
//! - Trait definitions are pure and have no feature gates
//! - Mock implementations are always available for host testing
//! - Platform implementations (memory-mapped SRAM, log sink) live in the
//!   root crate

pub mod diagnostics;
pub mod eeprom;
pub mod emulated;
pub mod sram;

pub use diagnostics::{DiagnosticSink, MockSink, NullSink};
pub use eeprom::{EepromDevice, MockEeprom};
pub use emulated::{EmulatedEeprom, MockEmulatedEeprom};
pub use sram::SramRegion;
