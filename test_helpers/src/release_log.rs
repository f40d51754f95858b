//! Shared recorder for the order in which resources are released.
//!
//! Clones share one underlying log, so a test can hand a clone to each
//! resource and inspect the combined order afterwards.
//!
//! # Examples
//!
//! ```
//! use sundries_test_helpers::ReleaseLog;
//!
//! let log = ReleaseLog::new();
//! let handle = log.clone();
//! handle.record("inner");
//! log.record("outer");
//! assert_eq!(log.entries(), ["inner", "outer"]);
//! assert_eq!(log.position("outer")?, 2);
//! # Ok::<(), anyhow::Error>(())
//! ```

use std::sync::Arc;

use anyhow::{Result, anyhow};
use parking_lot::Mutex;

/// Append-only list of labels, in the order they were recorded.
#[derive(Debug, Clone, Default)]
pub struct ReleaseLog {
    entries: Arc<Mutex<Vec<String>>>,
}

impl ReleaseLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `label`.
    pub fn record(&self, label: impl Into<String>) {
        self.entries.lock().push(label.into());
    }

    /// Snapshot of every recorded label.
    #[must_use]
    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().clone()
    }

    /// Number of recorded labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// `true` when nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// One-based position of the first record of `label`.
    ///
    /// # Errors
    ///
    /// Returns an error if `label` was never recorded.
    pub fn position(&self, label: &str) -> Result<usize> {
        self.entries
            .lock()
            .iter()
            .position(|entry| entry == label)
            .map(|index| index + 1)
            .ok_or_else(|| anyhow!("label '{label}' was never recorded"))
    }
}

#[cfg(test)]
mod tests {
    use super::ReleaseLog;

    #[test]
    fn clones_share_entries() {
        let log = ReleaseLog::new();
        log.clone().record("a");
        log.record("b");
        assert_eq!(log.entries(), ["a", "b"]);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn position_is_one_based() {
        let log = ReleaseLog::new();
        log.record("first");
        log.record("second");
        assert_eq!(log.position("second").ok(), Some(2));
    }

    #[test]
    fn missing_label_is_an_error() {
        let log = ReleaseLog::new();
        assert!(log.is_empty());
        let err = log.position("ghost").err().map(|e| e.to_string());
        assert_eq!(err.as_deref(), Some("label 'ghost' was never recorded"));
    }
}
