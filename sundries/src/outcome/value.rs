//! Outcome carrying a typed output.

use std::{any::TypeId, fmt};

use super::{Cause, ErrorDetail, Outcome};
use crate::{SundriesError, SundriesResult};

/// An [`Outcome`] that also carries an output of type `T`.
///
/// Construction goes through named constructors so a payload can never be
/// mistaken for the success flag: [`ValueOutcome::success`] takes an output,
/// [`ValueOutcome::with_flag`] takes an output and a flag, and
/// [`ValueOutcome::from_flag`] takes only a flag.
///
/// # Examples
///
/// ```
/// use sundries::ValueOutcome;
/// let outcome = ValueOutcome::success("hello");
/// assert_eq!(outcome.output(), Some(&"hello"));
/// assert_eq!(outcome.to_string(), "Operation succeeded with output: hello");
///
/// let failed = ValueOutcome::with_flag("hello", false);
/// assert_eq!(
///     failed.to_string(),
///     "Operation failed with no detailed error information."
/// );
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[must_use]
pub struct ValueOutcome<T> {
    #[cfg_attr(feature = "serde", serde(flatten))]
    outcome: Outcome,
    output: Option<T>,
}

impl<T> Default for ValueOutcome<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ValueOutcome<T> {
    /// A successful outcome with no output and no errors.
    pub const fn new() -> Self {
        Self {
            outcome: Outcome::new(),
            output: None,
        }
    }

    /// A successful outcome holding `output`.
    ///
    /// Any `T` is accepted, `bool` included: the name makes the intent
    /// explicit.
    pub const fn success(output: T) -> Self {
        Self::with_flag(output, true)
    }

    /// An outcome holding `output` with an explicit success flag.
    pub const fn with_flag(output: T, succeeded: bool) -> Self {
        Self {
            outcome: Outcome::from_flag(succeeded),
            output: Some(output),
        }
    }

    /// A failed outcome carrying `error` and no output.
    pub fn from_error(error: ErrorDetail) -> Self {
        Self {
            outcome: Outcome::from_error(error),
            output: None,
        }
    }

    /// A failed outcome carrying one error synthesised from its parts.
    pub fn failure(
        description: impl Into<String>,
        technical_detail: Option<&str>,
        cause: Option<Cause>,
    ) -> Self {
        Self {
            outcome: Outcome::failure(description, technical_detail, cause),
            output: None,
        }
    }

    /// `true` if the operation succeeded.
    #[must_use]
    pub const fn succeeded(&self) -> bool {
        self.outcome.succeeded()
    }

    /// `true` if the operation failed.
    #[must_use]
    pub const fn failed(&self) -> bool {
        self.outcome.failed()
    }

    /// Overwrite the success flag.
    pub const fn set_succeeded(&mut self, succeeded: bool) {
        self.outcome.set_succeeded(succeeded);
    }

    /// Errors in the order they were added.
    #[must_use]
    pub fn errors(&self) -> &[ErrorDetail] {
        self.outcome.errors()
    }

    /// Append an error. The success flag is not changed.
    pub fn add_error(&mut self, error: ErrorDetail) {
        self.outcome.add_error(error);
    }

    /// Append an error that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`SundriesError::ArgumentNull`] when `error` is `None`.
    pub fn try_add_error(&mut self, error: Option<ErrorDetail>) -> SundriesResult<()> {
        self.outcome.try_add_error(error)
    }

    /// The output, if one was set.
    #[must_use]
    pub const fn output(&self) -> Option<&T> {
        self.output.as_ref()
    }

    /// Mutable access to the output slot.
    pub const fn output_mut(&mut self) -> &mut Option<T> {
        &mut self.output
    }

    /// Replace the output, returning the previous one.
    pub const fn set_output(&mut self, output: Option<T>) -> Option<T> {
        std::mem::replace(&mut self.output, output)
    }

    /// Consume the outcome and return the output.
    #[must_use]
    pub fn into_output(self) -> Option<T> {
        self.output
    }

    /// The untyped part of this outcome.
    pub const fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Split into the untyped outcome and the output.
    pub fn into_parts(self) -> (Outcome, Option<T>) {
        (self.outcome, self.output)
    }

    /// Convert into a standard [`Result`].
    ///
    /// # Errors
    ///
    /// Returns the collected error details when the outcome failed.
    pub fn into_result(self) -> Result<Option<T>, Vec<ErrorDetail>> {
        if self.outcome.succeeded() {
            Ok(self.output)
        } else {
            Err(self.outcome.into_errors())
        }
    }
}

impl<T: 'static> ValueOutcome<T> {
    /// An outcome with the given success flag and no output.
    ///
    /// # Errors
    ///
    /// Returns [`SundriesError::AmbiguousBoolOutput`] when `T` is `bool`: a
    /// bare boolean here could be meant as the output or as the flag. Use
    /// [`ValueOutcome::success`], [`ValueOutcome::with_flag`] or a plain
    /// [`Outcome`] instead.
    pub fn from_flag(succeeded: bool) -> SundriesResult<Self> {
        if TypeId::of::<T>() == TypeId::of::<bool>() {
            return Err(SundriesError::AmbiguousBoolOutput);
        }
        Ok(Self {
            outcome: Outcome::from_flag(succeeded),
            output: None,
        })
    }
}

impl<T: fmt::Display> fmt::Display for ValueOutcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.outcome.succeeded() {
            return self.outcome.fmt_failure(f);
        }
        match &self.output {
            Some(output) => write!(f, "Operation succeeded with output: {output}"),
            None => f.write_str("Operation succeeded with output: [null]"),
        }
    }
}

impl<T: fmt::Display> ValueOutcome<T> {
    /// The summary produced by [`fmt::Display`].
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl<T> From<ErrorDetail> for ValueOutcome<T> {
    fn from(error: ErrorDetail) -> Self {
        Self::from_error(error)
    }
}

impl<T> From<ValueOutcome<T>> for Outcome {
    fn from(value: ValueOutcome<T>) -> Self {
        value.outcome
    }
}
