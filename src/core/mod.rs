//! Core infrastructure
//!
//! Logging macros and the log-backed diagnostic sink used by the configured
//! store.

pub mod diagnostics;
pub mod logging;

pub use diagnostics::LogSink;
