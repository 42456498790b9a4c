//! Log-backed diagnostic sink
//!
//! Routes store diagnostics to the crate's log macros. Errors are rendered
//! into a fixed-size buffer first so the same message works with defmt and
//! on host.

use heapless::String;
use persistent_store_core::store::{BackendKind, Commit};
use persistent_store_core::traits::DiagnosticSink;
use persistent_store_core::StoreError;

/// Maximum rendered error length
const MESSAGE_LEN: usize = 96;

/// Diagnostic sink writing to the log
///
/// Verification failures are logged at error level, session commits at debug
/// level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl LogSink {
    /// Create a new log sink
    pub const fn new() -> Self {
        Self
    }
}

/// Render `error` into a bounded string
///
/// Formatting pieces that no longer fit are dropped.
pub fn render_error(error: &StoreError) -> String<MESSAGE_LEN> {
    let mut message = String::new();
    let _ = core::fmt::write(&mut message, format_args!("{}", error));
    message
}

/// Render a session commit notice into a bounded string
fn render_session(backend: BackendKind, commit: Commit) -> String<MESSAGE_LEN> {
    let mut message = String::new();
    let _ = core::fmt::write(
        &mut message,
        format_args!(
            "Store session finished ({}): {}",
            backend.name(),
            commit_name(commit)
        ),
    );
    message
}

fn commit_name(commit: Commit) -> &'static str {
    match commit {
        Commit::Flushed => "flushed",
        Commit::Clean => "clean, flush skipped",
        Commit::Immediate => "committed on write",
    }
}

impl DiagnosticSink for LogSink {
    fn report(&mut self, error: &StoreError) {
        let message = render_error(error);
        crate::log_error!("{}", message.as_str());
    }

    fn session_finished(&mut self, backend: BackendKind, commit: Commit) {
        let message = render_session(backend, commit);
        crate::log_debug!("{}", message.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_verify_error() {
        let error = StoreError::WriteVerifyFailed {
            position: 300,
            expected: 0x01,
            actual: 0xFF,
        };
        assert_eq!(
            render_error(&error).as_str(),
            "Error writing to EEPROM at 300: wrote 0x01, read back 0xFF"
        );

        // Reporting goes through the same rendering
        LogSink::new().report(&error);
    }

    #[test]
    fn test_render_largest_error_fits() {
        let message = render_error(&StoreError::OutOfRange {
            position: usize::MAX,
            capacity: usize::MAX,
        });
        assert!(message.len() <= MESSAGE_LEN);
        assert!(message.starts_with("Store position"));
        assert!(message.ends_with(')'));
    }

    #[test]
    fn test_render_session() {
        assert_eq!(
            render_session(BackendKind::FlashEmulated, Commit::Clean).as_str(),
            "Store session finished (flash-emulated EEPROM): clean, flush skipped"
        );
        assert_eq!(
            render_session(BackendKind::BackupSram, Commit::Immediate).as_str(),
            "Store session finished (backup SRAM): committed on write"
        );
        assert_eq!(
            render_session(BackendKind::ExternalEeprom, Commit::Flushed).as_str(),
            "Store session finished (external EEPROM): flushed"
        );
    }
}
