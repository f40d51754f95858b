//! Structured failure record carried by outcomes.

use std::{error::Error, fmt, sync::Arc};

/// Shared handle to the underlying error that caused a failure.
pub type Cause = Arc<dyn Error + Send + Sync + 'static>;

/// Wrap any error (or message) as a [`Cause`].
///
/// # Examples
///
/// ```
/// use sundries::{ErrorDetail, to_cause};
/// let detail = ErrorDetail::new().with_cause_handle(to_cause("disk full"));
/// assert!(detail.render().contains("Cause Details: disk full"));
/// ```
#[must_use]
pub fn to_cause<E>(err: E) -> Cause
where
    E: Into<Box<dyn Error + Send + Sync + 'static>>,
{
    Arc::from(err.into())
}

/// A human description, a technical detail and an optional cause.
///
/// Every field is optional. Rendering skips absent or empty fields and falls
/// back to `Error - no details provided` when nothing is left.
///
/// # Examples
///
/// ```
/// use sundries::ErrorDetail;
/// let detail = ErrorDetail::new()
///     .with_description("Upload failed")
///     .with_technical_detail("HTTP 503");
/// assert_eq!(
///     detail.render(),
///     "Upload failed\nTechnical Details: HTTP 503\n"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct ErrorDetail {
    description: Option<String>,
    technical_detail: Option<String>,
    cause: Option<Cause>,
}

impl ErrorDetail {
    /// Create an empty detail.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            description: None,
            technical_detail: None,
            cause: None,
        }
    }

    /// Create a detail from all three optional parts at once.
    #[must_use]
    pub fn from_parts(
        description: Option<&str>,
        technical_detail: Option<&str>,
        cause: Option<Cause>,
    ) -> Self {
        Self {
            description: description.map(str::to_owned),
            technical_detail: technical_detail.map(str::to_owned),
            cause,
        }
    }

    /// Set the non-technical description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the technical detail.
    #[must_use]
    pub fn with_technical_detail(mut self, technical_detail: impl Into<String>) -> Self {
        self.technical_detail = Some(technical_detail.into());
        self
    }

    /// Set the underlying cause from any error value.
    #[must_use]
    pub fn with_cause<E>(self, cause: E) -> Self
    where
        E: Into<Box<dyn Error + Send + Sync + 'static>>,
    {
        self.with_cause_handle(to_cause(cause))
    }

    /// Set the underlying cause from an existing shared handle.
    #[must_use]
    pub fn with_cause_handle(mut self, cause: Cause) -> Self {
        self.cause = Some(cause);
        self
    }

    /// The human readable description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The technical reason for the failure, if any.
    #[must_use]
    pub fn technical_detail(&self) -> Option<&str> {
        self.technical_detail.as_deref()
    }

    /// The underlying cause, if any.
    #[must_use]
    pub fn cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Replace the description.
    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
    }

    /// Replace the technical detail.
    pub fn set_technical_detail(&mut self, technical_detail: Option<String>) {
        self.technical_detail = technical_detail;
    }

    /// Replace the cause.
    pub fn set_cause(&mut self, cause: Option<Cause>) {
        self.cause = cause;
    }

    /// Multi-line diagnostic text; every line ends with `\n`.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// The cause rendered with its full `source()` chain, if a cause is set.
    #[must_use]
    pub fn render_cause(&self) -> Option<String> {
        self.cause.as_deref().map(render_chain)
    }
}

fn render_chain(cause: &(dyn Error + Send + Sync + 'static)) -> String {
    let root: &(dyn Error + 'static) = cause;
    std::iter::successors(Some(root), |&err| err.source())
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(": ")
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.is_empty())
}

impl fmt::Display for ErrorDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut wrote_any = false;
        if let Some(description) = non_empty(self.description()) {
            writeln!(f, "{description}")?;
            wrote_any = true;
        }
        if let Some(technical_detail) = non_empty(self.technical_detail()) {
            writeln!(f, "Technical Details: {technical_detail}")?;
            wrote_any = true;
        }
        if let Some(cause) = self.render_cause() {
            writeln!(f, "Cause Details: {cause}")?;
            wrote_any = true;
        }
        if !wrote_any {
            writeln!(f, "Error - no details provided")?;
        }
        Ok(())
    }
}

impl From<&str> for ErrorDetail {
    fn from(description: &str) -> Self {
        Self::new().with_description(description)
    }
}

impl From<String> for ErrorDetail {
    fn from(description: String) -> Self {
        Self::new().with_description(description)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ErrorDetail {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("ErrorDetail", 3)?;
        state.serialize_field("description", &self.description)?;
        state.serialize_field("technical_detail", &self.technical_detail)?;
        state.serialize_field("cause", &self.render_cause())?;
        state.end()
    }
}
