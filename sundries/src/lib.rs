//! Small building blocks shared across applications.
//!
//! - [`Outcome`] and [`ValueOutcome`] report whether an operation succeeded,
//!   with structured [`ErrorDetail`] records explaining failures.
//! - [`ReleaseStack`] owns resources implementing [`Release`] and releases
//!   them in reverse order, reporting the outermost fault.
//! - [`CollectionTruthExt`] and [`is_between`] answer simple yes/no questions.
//! - The `ensure_*` guards return their input or fail fast with a
//!   [`SundriesError`].

mod ensure;
mod error;
mod outcome;
mod release;
mod result_ext;
mod truth;

pub use ensure::{
    Validatable, ensure_between, ensure_is_valid, ensure_not_empty,
    ensure_not_empty_or_whitespace, ensure_not_equal, ensure_not_null,
    ensure_not_null_empty_or_whitespace, ensure_optional_not_equal, ensure_within_max_items,
    ensure_within_max_len,
};
pub use error::{SundriesError, SundriesResult};
pub use outcome::{
    Cause, ErrorDetail, ErrorListFormat, Outcome, ValueOutcome, render_error_list, to_cause,
};
pub use release::{Release, ReleaseError, ReleaseFn, ReleaseStack, on_release};
pub use result_ext::OutcomeResultExt;
pub use truth::{CollectionTruthExt, NumericTruthExt, is_between};
