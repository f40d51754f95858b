//! String guards. Absent strings pass unless the guard says otherwise.

use crate::{SundriesError, SundriesResult};

/// Ensure an optional string is at most `max_len` characters long.
///
/// Length is counted in Unicode scalar values, not bytes.
///
/// # Errors
///
/// Returns [`SundriesError::Argument`] when the string is too long.
///
/// # Examples
///
/// ```
/// use sundries::ensure_within_max_len;
/// assert_eq!(ensure_within_max_len(Some("Test"), 4, None)?, Some("Test"));
/// assert!(ensure_within_max_len(Some("Test"), 3, None).is_err());
/// assert_eq!(ensure_within_max_len(None, 0, None)?, None);
/// # Ok::<(), sundries::SundriesError>(())
/// ```
pub fn ensure_within_max_len<'a>(
    value: Option<&'a str>,
    max_len: usize,
    param: Option<&str>,
) -> SundriesResult<Option<&'a str>> {
    if let Some(text) = value {
        let len = text.chars().count();
        if len > max_len {
            return Err(SundriesError::argument(
                format!("String maximum length of {max_len} exceeded. String length was {len}"),
                param,
            ));
        }
    }
    Ok(value)
}

/// Ensure an optional string is not empty. Whitespace passes.
///
/// # Errors
///
/// Returns [`SundriesError::Argument`] for `Some("")`.
pub fn ensure_not_empty<'a>(
    value: Option<&'a str>,
    param: Option<&str>,
) -> SundriesResult<Option<&'a str>> {
    if value.is_some_and(str::is_empty) {
        return Err(SundriesError::argument("String must not be empty", param));
    }
    Ok(value)
}

/// Ensure an optional string is neither empty nor only whitespace.
///
/// # Errors
///
/// Returns [`SundriesError::Argument`] for an empty or blank string.
pub fn ensure_not_empty_or_whitespace<'a>(
    value: Option<&'a str>,
    param: Option<&str>,
) -> SundriesResult<Option<&'a str>> {
    value
        .map(|text| ensure_has_content(text, param))
        .transpose()
}

/// Ensure a string is present, not empty and not only whitespace.
///
/// # Errors
///
/// Returns [`SundriesError::ArgumentNull`] for `None` and
/// [`SundriesError::Argument`] for an empty or blank string.
///
/// # Examples
///
/// ```
/// use sundries::ensure_not_null_empty_or_whitespace;
/// assert_eq!(ensure_not_null_empty_or_whitespace(Some("ok"), None)?, "ok");
/// let err = ensure_not_null_empty_or_whitespace(None, Some("name")).unwrap_err();
/// assert!(err.is_null_argument());
/// # Ok::<(), sundries::SundriesError>(())
/// ```
pub fn ensure_not_null_empty_or_whitespace<'a>(
    value: Option<&'a str>,
    param: Option<&str>,
) -> SundriesResult<&'a str> {
    let text =
        value.ok_or_else(|| SundriesError::argument_null_with("String must not be null", param))?;
    ensure_has_content(text, param)
}

fn ensure_has_content<'a>(text: &'a str, param: Option<&str>) -> SundriesResult<&'a str> {
    if text.trim().is_empty() {
        return Err(SundriesError::argument(
            "String must not be empty or whitespace",
            param,
        ));
    }
    Ok(text)
}
