//! Ordered registry that releases its resources last-in, first-out.

use std::fmt;

use super::{Release, ReleaseError};

/// Owns a sequence of resources and releases them in reverse order.
///
/// Every registered resource is released by [`ReleaseStack::release_all`],
/// even when earlier releases fail. If any release fails, the fault from the
/// resource registered earliest (the last one released) is returned and the
/// others are dropped, matching nested scopes where the outermost fault wins.
///
/// Dropping a stack that still owns resources releases them; a fault during
/// that implicit release is logged and discarded.
///
/// The stack is not thread-safe and is neither `Send` nor `Sync`.
///
/// # Examples
///
/// ```
/// use std::{cell::RefCell, rc::Rc};
/// use sundries::{Release, ReleaseError, ReleaseStack};
///
/// struct Named(&'static str, Rc<RefCell<Vec<&'static str>>>);
///
/// impl Release for Named {
///     fn release(&self) -> Result<(), ReleaseError> {
///         self.1.borrow_mut().push(self.0);
///         Ok(())
///     }
/// }
///
/// let log = Rc::new(RefCell::new(Vec::new()));
/// let mut stack = ReleaseStack::new();
/// let outer = stack.add(Rc::new(Named("outer", Rc::clone(&log))));
/// stack.add(Rc::new(Named("inner", Rc::clone(&log))));
/// assert_eq!(outer.0, "outer");
///
/// stack.release_all()?;
/// assert_eq!(*log.borrow(), ["inner", "outer"]);
/// # Ok::<(), ReleaseError>(())
/// ```
#[derive(Default)]
pub struct ReleaseStack {
    items: Vec<Box<dyn Release>>,
}

impl ReleaseStack {
    /// Create an empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Create a stack that owns `resources`, in the order given.
    ///
    /// The first resource yielded is released last.
    #[must_use]
    pub fn with_resources<I>(resources: I) -> Self
    where
        I: IntoIterator,
        I::Item: Release + 'static,
    {
        resources.into_iter().collect()
    }

    /// Register a shared handle and hand it back to the caller.
    ///
    /// The stack keeps a clone of the handle, so `R` is typically an
    /// `Rc<T>` or `Arc<T>`.
    pub fn add<R>(&mut self, resource: R) -> R
    where
        R: Release + Clone + 'static,
    {
        self.push(resource.clone());
        resource
    }

    /// Register a resource the stack takes sole ownership of.
    pub fn push<R>(&mut self, resource: R)
    where
        R: Release + 'static,
    {
        self.items.push(Box::new(resource));
    }

    /// Number of registered resources.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// `true` when nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Release every registered resource, most recently registered first.
    ///
    /// The stack is emptied before any resource is released, so calling this
    /// again is a no-op.
    ///
    /// # Errors
    ///
    /// After all resources have been released, returns the last fault
    /// encountered, which belongs to the earliest registered failing
    /// resource. Earlier faults are discarded.
    pub fn release_all(&mut self) -> Result<(), ReleaseError> {
        let snapshot = std::mem::take(&mut self.items);
        let released = snapshot.len();
        let mut faults = 0_usize;
        let mut last_fault = None;

        for resource in snapshot.into_iter().rev() {
            if let Err(fault) = resource.release() {
                faults += 1;
                last_fault = Some(fault);
            }
        }

        tracing::debug!(released, faults, "released tracked resources");
        last_fault.map_or(Ok(()), Err)
    }
}

impl<R> FromIterator<R> for ReleaseStack
where
    R: Release + 'static,
{
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}

impl<R> Extend<R> for ReleaseStack
where
    R: Release + 'static,
{
    fn extend<I: IntoIterator<Item = R>>(&mut self, iter: I) {
        for resource in iter {
            self.push(resource);
        }
    }
}

impl Drop for ReleaseStack {
    fn drop(&mut self) {
        if self.items.is_empty() {
            return;
        }
        if let Err(fault) = self.release_all() {
            tracing::warn!(error = %fault, "implicit release of tracked resources failed");
        }
    }
}

impl fmt::Debug for ReleaseStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReleaseStack")
            .field("len", &self.items.len())
            .finish()
    }
}
