//! Range guard for ordered values.

use std::fmt;

use crate::{SundriesError, SundriesResult, truth::is_between};

/// Ensure `value` lies in `start..=end`.
///
/// # Errors
///
/// Returns [`SundriesError::Argument`] when `value` is outside the range, or
/// the range fault from [`is_between`] when `start` is greater than `end`.
///
/// # Examples
///
/// ```
/// use sundries::ensure_between;
/// assert_eq!(ensure_between(2, &1, &3, None)?, 2);
/// let err = ensure_between(4, &1, &3, Some("port")).unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "Value must be between 1 and 3. Value was 4. (Parameter 'port')"
/// );
/// # Ok::<(), sundries::SundriesError>(())
/// ```
pub fn ensure_between<T>(value: T, start: &T, end: &T, param: Option<&str>) -> SundriesResult<T>
where
    T: PartialOrd + fmt::Display,
{
    if !is_between(&value, start, end)? {
        return Err(SundriesError::argument(
            format!("Value must be between {start} and {end}. Value was {value}."),
            param,
        ));
    }
    Ok(value)
}
