// clearance-core/src/runtime/diagnostics.rs
// ============================================================================
// Module: Diagnostic Sinks
// Description: Built-in destinations for classification warnings.
// Purpose: Route advisory warnings to stderr, a file, memory, or nowhere.
// Dependencies: crate::interfaces, serde_json
// ============================================================================

//! ## Overview
//! Sinks write each [`ClassificationWarning`] as one JSON line. Write failures
//! are swallowed: diagnostics must never change an access decision.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::OpenOptions;
use std::io;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use crate::interfaces::ClassificationWarning;
use crate::interfaces::DiagnosticSink;

// ============================================================================
// SECTION: Sinks
// ============================================================================

/// Diagnostic sink that logs JSON lines to stderr.
pub struct StderrDiagnosticSink;

impl DiagnosticSink for StderrDiagnosticSink {
    fn warn(&self, event: &ClassificationWarning) {
        if let Ok(payload) = serde_json::to_string(event) {
            let _ = writeln!(std::io::stderr(), "{payload}");
        }
    }
}

/// Diagnostic sink that logs JSON lines to a file.
pub struct FileDiagnosticSink {
    /// File handle used for append-only logging.
    file: Mutex<std::fs::File>,
}

impl FileDiagnosticSink {
    /// Opens the diagnostics file in append mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn new(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }
}

impl DiagnosticSink for FileDiagnosticSink {
    fn warn(&self, event: &ClassificationWarning) {
        if let Ok(payload) = serde_json::to_string(event)
            && let Ok(mut file) = self.file.lock()
        {
            let _ = writeln!(file, "{payload}");
            let _ = file.flush();
        }
    }
}

/// Diagnostic sink that keeps warnings in memory.
#[derive(Default)]
pub struct MemoryDiagnosticSink {
    /// Recorded warnings in emission order.
    events: Mutex<Vec<ClassificationWarning>>,
}

impl MemoryDiagnosticSink {
    /// Creates an empty in-memory sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the recorded warnings.
    #[must_use]
    pub fn events(&self) -> Vec<ClassificationWarning> {
        self.events.lock().map(|events| events.clone()).unwrap_or_default()
    }

    /// Removes and returns the recorded warnings.
    pub fn drain(&self) -> Vec<ClassificationWarning> {
        self.events.lock().map(|mut events| std::mem::take(&mut *events)).unwrap_or_default()
    }
}

impl DiagnosticSink for MemoryDiagnosticSink {
    fn warn(&self, event: &ClassificationWarning) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }
}

/// No-op diagnostic sink.
pub struct NoopDiagnosticSink;

impl DiagnosticSink for NoopDiagnosticSink {
    fn warn(&self, _event: &ClassificationWarning) {}
}
