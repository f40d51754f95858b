//! Predicates over collections and ranges.
//!
//! These helpers answer yes/no questions and never modify their input. The
//! only fault they raise is for a range whose start lies after its end.

use crate::{SundriesError, SundriesResult};

/// Emptiness checks for slices, vectors and optional collections.
///
/// An absent collection (`None`) counts as empty.
///
/// # Examples
///
/// ```
/// use sundries::CollectionTruthExt;
/// let names = vec!["Alice", "Bob"];
/// assert!(!names.none());
/// assert!(names.none_matching(|name| *name == "Carol"));
/// assert!(None::<&[u8]>.none());
/// ```
pub trait CollectionTruthExt<T> {
    /// `true` when the collection is absent or has no items.
    fn none(&self) -> bool;

    /// `true` when the collection is absent, empty, or no item matches
    /// `predicate`.
    fn none_matching<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool;
}

impl<T> CollectionTruthExt<T> for [T] {
    fn none(&self) -> bool {
        self.is_empty()
    }

    fn none_matching<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        !self.iter().any(predicate)
    }
}

impl<T> CollectionTruthExt<T> for Option<&[T]> {
    fn none(&self) -> bool {
        self.is_none_or(<[T]>::none)
    }

    fn none_matching<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.is_none_or(|items| items.none_matching(predicate))
    }
}

impl<T> CollectionTruthExt<T> for Option<&Vec<T>> {
    fn none(&self) -> bool {
        self.map(Vec::as_slice).none()
    }

    fn none_matching<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.map(Vec::as_slice).none_matching(predicate)
    }
}

/// Returns whether `value` lies in `start..=end`.
///
/// # Errors
///
/// Returns [`SundriesError::Argument`] when `start` is greater than `end`.
///
/// # Examples
///
/// ```
/// use sundries::is_between;
/// assert!(is_between(&2, &1, &3)?);
/// assert!(is_between(&3, &1, &3)?);
/// assert!(!is_between(&4, &1, &3)?);
/// assert!(is_between(&3, &2, &1).is_err());
/// # Ok::<(), sundries::SundriesError>(())
/// ```
pub fn is_between<T>(value: &T, start: &T, end: &T) -> SundriesResult<bool>
where
    T: PartialOrd + ?Sized,
{
    if start > end {
        return Err(SundriesError::argument(
            "The start of range must not be greater than the end of range parameter.",
            None,
        ));
    }
    Ok(value >= start && value <= end)
}

/// Method form of [`is_between`] for any ordered value.
pub trait NumericTruthExt: PartialOrd {
    /// Returns whether `self` lies in `start..=end`.
    ///
    /// # Errors
    ///
    /// Returns [`SundriesError::Argument`] when `start` is greater than `end`.
    fn is_between(&self, start: &Self, end: &Self) -> SundriesResult<bool> {
        is_between(self, start, end)
    }
}

impl<T: PartialOrd + ?Sized> NumericTruthExt for T {}
