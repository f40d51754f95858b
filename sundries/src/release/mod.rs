//! Scoped resources released in reverse acquisition order.
//!
//! A resource implements [`Release`]; a [`ReleaseStack`] owns a dynamic list
//! of them and releases every one, innermost first, even when some fail.

mod stack;

use std::{cell::Cell, rc::Rc, sync::Arc};

pub use stack::ReleaseStack;

/// Fault raised by a resource while it is being released.
pub type ReleaseError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A resource that must be explicitly released.
///
/// `release` takes `&self` so shared handles (`Rc`, `Arc`) can be registered
/// with a [`ReleaseStack`] while the caller keeps using them. Implementations
/// use interior mutability for any state they change.
pub trait Release {
    /// Release the resource.
    ///
    /// # Errors
    ///
    /// Returns the fault that prevented a clean release.
    fn release(&self) -> Result<(), ReleaseError>;
}

impl<R: Release + ?Sized> Release for Box<R> {
    fn release(&self) -> Result<(), ReleaseError> {
        (**self).release()
    }
}

impl<R: Release + ?Sized> Release for Rc<R> {
    fn release(&self) -> Result<(), ReleaseError> {
        (**self).release()
    }
}

impl<R: Release + ?Sized> Release for Arc<R> {
    fn release(&self) -> Result<(), ReleaseError> {
        (**self).release()
    }
}

/// An absent resource releases as a no-op.
impl<R: Release> Release for Option<R> {
    fn release(&self) -> Result<(), ReleaseError> {
        self.as_ref().map_or(Ok(()), Release::release)
    }
}

/// A closure run once on release.
///
/// # Examples
///
/// ```
/// use std::{cell::Cell, rc::Rc};
/// use sundries::{ReleaseStack, on_release};
///
/// let closed = Rc::new(Cell::new(false));
/// let flag = Rc::clone(&closed);
/// let mut stack = ReleaseStack::new();
/// stack.push(on_release(move || {
///     flag.set(true);
///     Ok(())
/// }));
/// stack.release_all()?;
/// assert!(closed.get());
/// # Ok::<(), sundries::ReleaseError>(())
/// ```
pub struct ReleaseFn<F> {
    action: Cell<Option<F>>,
}

/// Wrap `action` so it can be registered with a [`ReleaseStack`].
pub const fn on_release<F>(action: F) -> ReleaseFn<F>
where
    F: FnOnce() -> Result<(), ReleaseError>,
{
    ReleaseFn {
        action: Cell::new(Some(action)),
    }
}

impl<F> Release for ReleaseFn<F>
where
    F: FnOnce() -> Result<(), ReleaseError>,
{
    fn release(&self) -> Result<(), ReleaseError> {
        self.action.take().map_or(Ok(()), |action| action())
    }
}

impl<F> std::fmt::Debug for ReleaseFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReleaseFn").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests;
