//! Diagnostic sink abstraction
//!
//! The store reports failures through a [`DiagnosticSink`] rather than
//! logging directly, so the core crate stays free of any log transport.

use crate::error::StoreError;
use crate::store::{BackendKind, Commit};

/// Maximum number of reports kept by [`MockSink`]
const MOCK_SINK_CAPACITY: usize = 8;

/// Receiver for store diagnostics
///
/// - `LogSink` (in the root crate) forwards to the log macros
/// - `NullSink` discards everything
/// - `MockSink` records reports for host tests
pub trait DiagnosticSink {
    /// Report an error at the point it was detected
    ///
    /// Called exactly once per failed operation.
    fn report(&mut self, error: &StoreError);

    /// Called after every `access_finish` with what the backend committed
    fn session_finished(&mut self, _backend: BackendKind, _commit: Commit) {}
}

/// Sink that discards all diagnostics
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn report(&mut self, _error: &StoreError) {}
}

// ============================================================================
// Mock Implementation (always available for testing)
// ============================================================================

/// Sink that records reports for test verification
///
/// Keeps the first few reports; later ones are only counted.
#[derive(Debug, Default)]
pub struct MockSink {
    reports: heapless::Vec<StoreError, MOCK_SINK_CAPACITY>,
    report_count: u32,
    last_commit: Option<(BackendKind, Commit)>,
}

impl MockSink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded reports, oldest first
    pub fn reports(&self) -> &[StoreError] {
        &self.reports
    }

    /// Total number of reports, including ones that were not kept
    pub fn report_count(&self) -> u32 {
        self.report_count
    }

    /// Outcome of the most recent `access_finish`
    pub fn last_commit(&self) -> Option<(BackendKind, Commit)> {
        self.last_commit
    }
}

impl DiagnosticSink for MockSink {
    fn report(&mut self, error: &StoreError) {
        self.report_count += 1;
        let _ = self.reports.push(*error);
    }

    fn session_finished(&mut self, backend: BackendKind, commit: Commit) {
        self.last_commit = Some((backend, commit));
    }
}
