//! Guard-clause faults raised by the validators and constructors.

mod constructors;
mod types;

pub use types::SundriesError;

/// Convenience alias for results whose error type is [`SundriesError`].
pub type SundriesResult<T> = Result<T, SundriesError>;
