//! Error type used to tell release faults apart after boxing.

use std::{error::Error, fmt};

/// A fault carrying a label, recoverable by downcasting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelledFault {
    label: String,
}

impl LabelledFault {
    /// Create a fault identified by `label`.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    /// The label given at construction.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for LabelledFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} failed to release", self.label)
    }
}

impl Error for LabelledFault {}
