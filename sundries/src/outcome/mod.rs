//! Outcome values: a success flag plus structured error details.
//!
//! [`Outcome`] reports whether an operation succeeded and, if not, why.
//! [`ValueOutcome`] adds a typed output. Both render a stable, human-readable
//! summary through [`fmt::Display`].

mod detail;
mod render;
mod value;

use std::fmt;

use crate::{SundriesResult, ensure::ensure_not_null, truth::CollectionTruthExt};

pub use detail::{Cause, ErrorDetail, to_cause};
pub use render::{ErrorListFormat, render_error_list};
pub(crate) use render::trimmed_render;
pub use value::ValueOutcome;

/// Whether an operation succeeded, plus any errors that explain a failure.
///
/// `failed()` is always the negation of `succeeded()`. Errors are kept in the
/// order they were added; a failed outcome built from a bare flag has none.
///
/// # Examples
///
/// ```
/// use sundries::Outcome;
/// let outcome = Outcome::failure("Upload failed", Some("HTTP 503"), None);
/// assert!(outcome.failed());
/// assert_eq!(
///     outcome.to_string(),
///     "Operation failed with Error(s):\nUpload failed\nTechnical Details: HTTP 503"
/// );
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[must_use]
pub struct Outcome {
    succeeded: bool,
    errors: Vec<ErrorDetail>,
}

impl Default for Outcome {
    fn default() -> Self {
        Self::new()
    }
}

impl Outcome {
    /// A successful outcome with no errors.
    pub const fn new() -> Self {
        Self::from_flag(true)
    }

    /// An outcome with the given success flag and no errors.
    pub const fn from_flag(succeeded: bool) -> Self {
        Self {
            succeeded,
            errors: Vec::new(),
        }
    }

    /// A failed outcome carrying `error`.
    pub fn from_error(error: ErrorDetail) -> Self {
        let mut outcome = Self::from_flag(false);
        outcome.add_error(error);
        outcome
    }

    /// A failed outcome carrying one error synthesised from its parts.
    pub fn failure(
        description: impl Into<String>,
        technical_detail: Option<&str>,
        cause: Option<Cause>,
    ) -> Self {
        let mut detail = ErrorDetail::new().with_description(description);
        if let Some(technical) = technical_detail {
            detail = detail.with_technical_detail(technical);
        }
        if let Some(handle) = cause {
            detail = detail.with_cause_handle(handle);
        }
        Self::from_error(detail)
    }

    /// `true` if the operation succeeded.
    #[must_use]
    pub const fn succeeded(&self) -> bool {
        self.succeeded
    }

    /// `true` if the operation failed.
    #[must_use]
    pub const fn failed(&self) -> bool {
        !self.succeeded
    }

    /// Overwrite the success flag. Errors are left untouched.
    pub const fn set_succeeded(&mut self, succeeded: bool) {
        self.succeeded = succeeded;
    }

    /// Errors in the order they were added.
    #[must_use]
    pub fn errors(&self) -> &[ErrorDetail] {
        &self.errors
    }

    /// Append an error. The success flag is not changed.
    pub fn add_error(&mut self, error: ErrorDetail) {
        self.errors.push(error);
    }

    /// Append an error that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SundriesError::ArgumentNull`] for parameter `error`
    /// when `error` is `None`; nothing is appended in that case.
    pub fn try_add_error(&mut self, error: Option<ErrorDetail>) -> SundriesResult<()> {
        let detail = ensure_not_null(error, Some("error"))?;
        self.add_error(detail);
        Ok(())
    }

    /// Consume the outcome and return its errors.
    #[must_use]
    pub fn into_errors(self) -> Vec<ErrorDetail> {
        self.errors
    }

    /// The summary produced by [`fmt::Display`].
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Everything after `Operation failed with ` in a failure summary.
    fn failure_summary(&self) -> String {
        if self.errors.none() {
            return String::from("no detailed error information.");
        }
        render_error_list(
            &self.errors,
            trimmed_render,
            &ErrorListFormat::default(),
        )
    }

    fn fmt_failure(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Operation failed with {}", self.failure_summary())
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.succeeded {
            f.write_str("Operation succeeded.")
        } else {
            self.fmt_failure(f)
        }
    }
}

impl From<bool> for Outcome {
    fn from(succeeded: bool) -> Self {
        Self::from_flag(succeeded)
    }
}

impl From<ErrorDetail> for Outcome {
    fn from(error: ErrorDetail) -> Self {
        Self::from_error(error)
    }
}
