//! Joining several error details into a single block of text.

use crate::truth::CollectionTruthExt;

use super::ErrorDetail;

/// Layout used by [`render_error_list`].
///
/// Host applications can load this from their own configuration layers; all
/// fields fall back to their defaults when omitted.
///
/// # Examples
///
/// ```
/// use sundries::ErrorListFormat;
/// let format = ErrorListFormat::default();
/// assert_eq!(format.prefix, "Error(s):");
/// assert_eq!(format.separator, "\n\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ErrorListFormat {
    /// Text written on the first line, before any error.
    pub prefix: String,
    /// Text written between consecutive errors.
    pub separator: String,
}

impl Default for ErrorListFormat {
    fn default() -> Self {
        Self {
            prefix: String::from("Error(s):"),
            separator: String::from("\n\n"),
        }
    }
}

impl ErrorListFormat {
    /// Replace the prefix line.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Replace the separator placed between errors.
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }
}

/// Render `errors` as one multi-line string.
///
/// Returns an empty string when `errors` is empty. Otherwise the result is
/// `format.prefix`, a newline, then the text `extract` returns for each error
/// joined with `format.separator`.
///
/// # Examples
///
/// ```
/// use sundries::{ErrorDetail, ErrorListFormat, render_error_list};
/// let errors = [ErrorDetail::from("first"), ErrorDetail::from("second")];
/// let text = render_error_list(
///     &errors,
///     |e| e.description().unwrap_or_default().to_owned(),
///     &ErrorListFormat::default().with_separator("\n"),
/// );
/// assert_eq!(text, "Error(s):\nfirst\nsecond");
/// ```
#[must_use]
pub fn render_error_list<F>(errors: &[ErrorDetail], extract: F, format: &ErrorListFormat) -> String
where
    F: FnMut(&ErrorDetail) -> String,
{
    if errors.none() {
        return String::new();
    }
    let body = errors
        .iter()
        .map(extract)
        .collect::<Vec<_>>()
        .join(&format.separator);
    format!("{}\n{body}", format.prefix)
}

/// Each error's rendering with surrounding whitespace removed.
pub(crate) fn trimmed_render(detail: &ErrorDetail) -> String {
    detail.render().trim().to_owned()
}
