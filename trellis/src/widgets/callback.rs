//! Change callbacks.

use std::fmt;
use std::sync::Arc;

/// A shareable change callback.
///
/// Widgets invoke callbacks only after releasing their internal locks, so a
/// callback may freely read the widget that invoked it.
pub struct Callback<T: ?Sized>(Arc<dyn Fn(&T) + Send + Sync>);

impl<T: ?Sized> Callback<T> {
    pub fn new(f: impl Fn(&T) + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn call(&self, value: &T) {
        (self.0)(value)
    }
}

impl<T: ?Sized> Clone for Callback<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T: ?Sized> fmt::Debug for Callback<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback")
    }
}

impl<T: ?Sized, F> From<F> for Callback<T>
where
    F: Fn(&T) + Send + Sync + 'static,
{
    fn from(f: F) -> Self {
        Self::new(f)
    }
}
