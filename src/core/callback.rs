use std::{fmt, sync::Arc};

/// A cloneable event handler passed down from a provider or a parent view
pub struct Callback<T> {
    f: Arc<dyn Fn(T) + Send + Sync>,
}

impl<T> Callback<T> {
    pub fn new(f: impl Fn(T) + Send + Sync + 'static) -> Self {
        Self { f: Arc::new(f) }
    }

    /// A handler that does nothing
    pub fn noop() -> Self {
        Self::new(|_| {})
    }

    pub fn emit(&self, value: T) {
        (self.f)(value)
    }
}

impl<T> Clone for Callback<T> {
    fn clone(&self) -> Self {
        Self {
            f: Arc::clone(&self.f),
        }
    }
}

impl<T> fmt::Debug for Callback<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback").finish_non_exhaustive()
    }
}

impl<T> Default for Callback<T> {
    fn default() -> Self {
        Self::noop()
    }
}

/// Setter for the parent's open/closed flag of the mini cart
pub type SetIsOpen = Callback<bool>;
