//! # Mock Sink
//!
//! Utilities for testing trace emission in isolation.
//!
//! Use [`MemorySink`] wherever a [`TraceSink`](crate::framework::TraceSink) is
//! expected, run the traced code, then assert on the recorded lines. No
//! subscriber setup needed, and the assertions see the exact rendered text,
//! not a formatted approximation of it.

use std::sync::{Arc, Mutex};

use crate::framework::TraceSink;

/// Severity of one recorded line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordLevel {
    Info,
    Error,
}

/// A sink that records every delivered line in memory.
///
/// Cloning is cheap and clones share the same buffer, so a test can keep one
/// handle for assertions while the trace manager owns another.
///
/// # Example
/// ```ignore
/// let sink = MemorySink::new();
/// let trace = ThreadLocalTrace::with_sink(sink.clone(), TraceConfig::default());
/// let status = trace.begin("checkout");
/// trace.end(status);
/// assert_eq!(sink.lines().len(), 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    records: Arc<Mutex<Vec<(RecordLevel, String)>>>,
}

impl MemorySink {
    /// Creates an empty recording sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every recorded line with its level, in emission order.
    pub fn records(&self) -> Vec<(RecordLevel, String)> {
        self.records.lock().unwrap().clone()
    }

    /// Every recorded line in emission order, levels dropped.
    pub fn lines(&self) -> Vec<String> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .map(|(_, line)| line.clone())
            .collect()
    }

    /// Only the error-level records, in emission order.
    pub fn errors(&self) -> Vec<String> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .filter(|(level, _)| *level == RecordLevel::Error)
            .map(|(_, line)| line.clone())
            .collect()
    }

    /// Drops everything recorded so far.
    pub fn clear(&self) {
        self.records.lock().unwrap().clear();
    }
}

impl TraceSink for MemorySink {
    fn info(&self, line: &str) {
        self.records
            .lock()
            .unwrap()
            .push((RecordLevel::Info, line.to_string()));
    }

    fn error(&self, line: &str) {
        self.records
            .lock()
            .unwrap()
            .push((RecordLevel::Error, line.to_string()));
    }
}
