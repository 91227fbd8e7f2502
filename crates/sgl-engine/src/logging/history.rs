use std::sync::Arc;

use parking_lot::RwLock;

use super::entry::LogEntry;
use crate::error::{Error, Result};

/// Append-only history of every entry a logger has accepted.
///
/// Positions are stable: entry `i` is the `i`-th append, and nothing is ever
/// removed.
#[derive(Debug, Default)]
pub struct Log {
    entries: RwLock<Vec<Arc<LogEntry>>>,
}

impl Log {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `entry` and returns its position, which is also its sequence.
    pub fn append(&self, entry: LogEntry) -> usize {
        self.push(entry).sequence()
    }

    pub(crate) fn push(&self, entry: LogEntry) -> Arc<LogEntry> {
        let mut entries = self.entries.write();
        let entry = Arc::new(entry.sealed(entries.len()));
        entries.push(Arc::clone(&entry));
        entry
    }

    pub fn get(&self, index: usize) -> Result<Arc<LogEntry>> {
        let entries = self.entries.read();
        entries.get(index).cloned().ok_or(Error::IndexOutOfRange {
            index,
            size: entries.len(),
        })
    }

    pub fn first(&self) -> Option<Arc<LogEntry>> {
        self.entries.read().first().cloned()
    }

    pub fn last(&self) -> Option<Arc<LogEntry>> {
        self.entries.read().last().cloned()
    }

    pub fn size(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Copy of the history as of now.
    pub fn entries(&self) -> Vec<Arc<LogEntry>> {
        self.entries.read().clone()
    }
}
