//! Reporting sink injected into rules.
//!
//! Rules never talk to the host directly; they hand each finding to a
//! [`Reporter`]. The host decides what to do with it (collect, print,
//! fail the build). This keeps rule evaluation pure apart from the sink.

use crate::types::Diagnostic;

/// Receives diagnostics emitted by rules.
pub trait Reporter {
    /// Reports a single diagnostic.
    fn report(&mut self, diagnostic: Diagnostic);
}

/// A [`Reporter`] that collects diagnostics into a vector.
#[derive(Debug, Default)]
pub struct DiagnosticSink {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of collected diagnostics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Returns true if nothing has been reported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Consumes the sink and returns the collected diagnostics.
    #[must_use]
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl Reporter for DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}
