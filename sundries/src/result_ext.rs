//! Extension for turning a standard `Result` into a [`ValueOutcome`].
//!
//! # Examples
//!
//! ```
//! use sundries::OutcomeResultExt;
//!
//! let parsed = "42".parse::<u16>().into_outcome("Could not read the port");
//! assert_eq!(parsed.output(), Some(&42));
//!
//! let failed = "port".parse::<u16>().into_outcome("Could not read the port");
//! assert!(failed.failed());
//! assert!(failed.render().starts_with("Operation failed with Error(s):\nCould not read the port"));
//! ```

use std::{error::Error, sync::Arc};

use crate::{Cause, ValueOutcome};

/// Map `Result<T, E>` into a [`ValueOutcome<T>`].
pub trait OutcomeResultExt<T> {
    /// `Ok` becomes a successful outcome holding the value. `Err` becomes a
    /// failed outcome with one error: `description` plus the error as cause.
    fn into_outcome(self, description: &str) -> ValueOutcome<T>;
}

impl<T, E> OutcomeResultExt<T> for Result<T, E>
where
    E: Error + Send + Sync + 'static,
{
    fn into_outcome(self, description: &str) -> ValueOutcome<T> {
        match self {
            Ok(value) => ValueOutcome::success(value),
            Err(err) => {
                let cause: Cause = Arc::new(err);
                ValueOutcome::failure(description, None, Some(cause))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::num::ParseIntError;

    use rstest::rstest;

    use super::OutcomeResultExt;

    #[rstest]
    fn ok_value_becomes_output() {
        let outcome = Ok::<_, ParseIntError>(5).into_outcome("unused");
        assert!(outcome.succeeded());
        assert!(outcome.errors().is_empty());
        assert_eq!(outcome.into_output(), Some(5));
    }

    #[rstest]
    fn error_becomes_cause() {
        let outcome = "x".parse::<i32>().into_outcome("Bad number");
        assert!(outcome.failed());
        assert!(outcome.output().is_none());
        let [error] = outcome.errors() else {
            panic!("expected one error, got {:?}", outcome.errors());
        };
        assert_eq!(error.description(), Some("Bad number"));
        assert!(error.technical_detail().is_none());
        assert_eq!(
            error.render_cause().as_deref(),
            Some("invalid digit found in string")
        );
    }
}
