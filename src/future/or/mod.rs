use core::future::Future;

pub(crate) mod array;
pub(crate) mod vec;

/// Wait for the first of many completion signals.
///
/// The resulting future completes as soon as any of the signals completes, and
/// otherwise never does. The outputs of the signals are ignored. The number of
/// signals only needs to be known at runtime.
///
/// With zero signals the future never completes: guard against an empty set if
/// waiting forever is not what you want. With one signal the future completes
/// exactly when that signal does.
pub trait Or {
    /// The [`Future`] implementation returned by this method.
    type Future: Future<Output = ()>;

    /// Wait for the first of many completion signals.
    ///
    /// # Examples
    ///
    /// ```
    /// use cancel_concurrency::prelude::*;
    /// use cancel_concurrency::signal;
    /// use futures_lite::future::block_on;
    ///
    /// let triggers: Vec<_> = (0..5).map(|_| signal::Trigger::new()).collect();
    /// let signals: Vec<_> = triggers.iter().map(|t| t.signal()).collect();
    ///
    /// triggers[3].fire();
    /// block_on(signals.or());
    /// ```
    fn or(self) -> Self::Future;
}
