//! Constructors and accessors for `SundriesError`.

use super::SundriesError;

/// Default message for [`SundriesError::ArgumentNull`].
const VALUE_CANNOT_BE_NULL: &str = "Value cannot be null.";

impl SundriesError {
    /// Construct an [`SundriesError::ArgumentNull`] with the default message.
    ///
    /// # Examples
    ///
    /// ```
    /// use sundries::SundriesError;
    /// let err = SundriesError::argument_null(Some("name"));
    /// assert_eq!(err.to_string(), "Value cannot be null. (Parameter 'name')");
    /// ```
    #[must_use]
    pub fn argument_null(param: Option<&str>) -> Self {
        Self::argument_null_with(VALUE_CANNOT_BE_NULL, param)
    }

    /// Construct an [`SundriesError::ArgumentNull`] with a custom message.
    #[must_use]
    pub fn argument_null_with(message: impl Into<String>, param: Option<&str>) -> Self {
        Self::ArgumentNull {
            param: param.map(str::to_owned),
            message: message.into(),
        }
    }

    /// Construct an [`SundriesError::Argument`].
    ///
    /// # Examples
    ///
    /// ```
    /// use sundries::SundriesError;
    /// let err = SundriesError::argument("String must not be empty", None);
    /// assert_eq!(err.to_string(), "String must not be empty");
    /// assert!(err.param().is_none());
    /// ```
    #[must_use]
    pub fn argument(message: impl Into<String>, param: Option<&str>) -> Self {
        Self::Argument {
            param: param.map(str::to_owned),
            message: message.into(),
        }
    }

    /// Name of the parameter that triggered the fault, if known.
    #[must_use]
    pub fn param(&self) -> Option<&str> {
        match self {
            Self::ArgumentNull { param, .. } | Self::Argument { param, .. } => param.as_deref(),
            Self::AmbiguousBoolOutput => None,
        }
    }

    /// Message without the parameter suffix.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::ArgumentNull { message, .. } | Self::Argument { message, .. } => message.clone(),
            Self::AmbiguousBoolOutput => self.to_string(),
        }
    }

    /// Returns `true` for faults caused by an absent required value.
    #[must_use]
    pub const fn is_null_argument(&self) -> bool {
        matches!(self, Self::ArgumentNull { .. })
    }
}
