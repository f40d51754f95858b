//! Guard clauses that return their input unchanged or fail fast.
//!
//! Every guard takes an optional parameter name which is carried by the
//! resulting [`SundriesError`] and appended to its message.

mod numeric;
mod strings;

use std::fmt;

use crate::{
    ErrorDetail, SundriesError, SundriesResult,
    outcome::{ErrorListFormat, render_error_list},
};

pub use numeric::ensure_between;
pub use strings::{
    ensure_not_empty, ensure_not_empty_or_whitespace, ensure_not_null_empty_or_whitespace,
    ensure_within_max_len,
};

/// Implemented by models that can report whether they are valid.
pub trait Validatable {
    /// `true` when the model is valid.
    fn is_valid(&self) -> bool;

    /// Errors explaining why the model is invalid; empty when valid.
    fn errors(&self) -> &[ErrorDetail];
}

/// Unwrap a required value.
///
/// # Errors
///
/// Returns [`SundriesError::ArgumentNull`] when `value` is `None`.
///
/// # Examples
///
/// ```
/// use sundries::ensure_not_null;
/// assert_eq!(ensure_not_null(Some(3), Some("count"))?, 3);
/// assert!(ensure_not_null(None::<u8>, Some("count")).is_err());
/// # Ok::<(), sundries::SundriesError>(())
/// ```
pub fn ensure_not_null<T>(value: Option<T>, param: Option<&str>) -> SundriesResult<T> {
    value.ok_or_else(|| SundriesError::argument_null(param))
}

/// Ensure an optional slice holds at most `max_len` items.
///
/// An absent slice or an absent limit always passes.
///
/// # Errors
///
/// Returns [`SundriesError::Argument`] when the slice is longer than the limit.
pub fn ensure_within_max_items<'a, T>(
    items: Option<&'a [T]>,
    max_len: Option<usize>,
    param: Option<&str>,
) -> SundriesResult<Option<&'a [T]>> {
    if let (Some(slice), Some(max)) = (items, max_len)
        && slice.len() > max
    {
        return Err(SundriesError::argument(
            format!("Array has exceeded a maximum length of {max}"),
            param,
        ));
    }
    Ok(items)
}

/// Ensure an optional model is valid.
///
/// An absent model passes.
///
/// # Errors
///
/// Returns [`SundriesError::Argument`] whose message lists the model's errors
/// when [`Validatable::is_valid`] returns `false`.
pub fn ensure_is_valid<'a, M>(model: Option<&'a M>, param: Option<&str>) -> SundriesResult<Option<&'a M>>
where
    M: Validatable + ?Sized,
{
    if let Some(candidate) = model
        && !candidate.is_valid()
    {
        let listed = render_error_list(
            candidate.errors(),
            crate::outcome::trimmed_render,
            &ErrorListFormat::default(),
        );
        let message = format!("Supplied model is invalid. {listed}");
        return Err(SundriesError::argument(message.trim(), param));
    }
    Ok(model)
}

/// Ensure `value` differs from `comparison`.
///
/// # Errors
///
/// Returns [`SundriesError::Argument`] when the values are equal, using
/// `message` or a default naming both values.
///
/// # Examples
///
/// ```
/// use sundries::ensure_not_equal;
/// assert_eq!(ensure_not_equal(1, &2, None, None)?, 1);
/// let err = ensure_not_equal(3, &3, None, Some("retries")).unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "Values were found to be equal. Values were 3 and 3 (Parameter 'retries')"
/// );
/// # Ok::<(), sundries::SundriesError>(())
/// ```
pub fn ensure_not_equal<T>(
    value: T,
    comparison: &T,
    message: Option<&str>,
    param: Option<&str>,
) -> SundriesResult<T>
where
    T: PartialEq + fmt::Display,
{
    if value == *comparison {
        return Err(equal_values(message, &value, comparison, param));
    }
    Ok(value)
}

/// [`ensure_not_equal`] for values that may be absent.
///
/// Two absent values are equal; absent values render as `null` in the
/// default message.
///
/// # Errors
///
/// Returns [`SundriesError::Argument`] when the values are equal.
pub fn ensure_optional_not_equal<T>(
    value: Option<T>,
    comparison: Option<&T>,
    message: Option<&str>,
    param: Option<&str>,
) -> SundriesResult<Option<T>>
where
    T: PartialEq + fmt::Display,
{
    if value.as_ref() == comparison {
        return Err(equal_values(
            message,
            &NullOr(value.as_ref()),
            &NullOr(comparison),
            param,
        ));
    }
    Ok(value)
}

fn equal_values(
    message: Option<&str>,
    value: &dyn fmt::Display,
    comparison: &dyn fmt::Display,
    param: Option<&str>,
) -> SundriesError {
    let text = message.map_or_else(
        || format!("Values were found to be equal. Values were {value} and {comparison}"),
        str::to_owned,
    );
    SundriesError::argument(text.trim(), param)
}

struct NullOr<'a, T>(Option<&'a T>);

impl<T: fmt::Display> fmt::Display for NullOr<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => value.fmt(f),
            None => f.write_str("null"),
        }
    }
}
