//! Primary error enum for programmer-error faults.

use thiserror::Error;

/// Faults raised immediately when a caller breaks a usage contract.
///
/// These are distinct from the failures an [`crate::Outcome`] collects: a
/// `SundriesError` signals a bug at the call site (an absent required value,
/// an inverted range, an ambiguous constructor) and is never recovered
/// internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SundriesError {
    /// A required value was absent.
    #[error("{message}{}", param_suffix(.param.as_deref()))]
    ArgumentNull {
        /// Name of the offending parameter, when the caller supplied one.
        param: Option<String>,
        /// Human-readable explanation.
        message: String,
    },

    /// A value was present but broke the guard's rule.
    #[error("{message}{}", param_suffix(.param.as_deref()))]
    Argument {
        /// Name of the offending parameter, when the caller supplied one.
        param: Option<String>,
        /// Human-readable explanation.
        message: String,
    },

    /// A flag-only constructor was used on a `ValueOutcome<bool>`.
    #[error(
        "ValueOutcome should not be used to store bool outputs from a bare flag. \
         Use Outcome and its success flag, or ValueOutcome::success / ValueOutcome::with_flag."
    )]
    AmbiguousBoolOutput,
}

fn param_suffix(param: Option<&str>) -> String {
    param.map_or_else(String::new, |name| format!(" (Parameter '{name}')"))
}
