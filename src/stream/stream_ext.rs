use futures_core::Stream;

use super::OrDone;
use crate::signal::Signal;

/// An extension trait for the `Stream` trait.
pub trait StreamExt: Stream {
    /// Yield the items of this stream until `cancel` fires.
    ///
    /// Values are passed through in order. Once the signal has fired the
    /// returned stream ends, even if the source still has values ready, and
    /// the source is not polled again.
    ///
    /// # Examples
    ///
    /// ```
    /// use cancel_concurrency::prelude::*;
    /// use cancel_concurrency::signal;
    /// use futures_lite::future::block_on;
    /// use futures_lite::stream;
    ///
    /// block_on(async {
    ///     let (trigger, cancel) = signal::signal();
    ///     let mut s = stream::iter(1..).or_done(cancel);
    ///
    ///     assert_eq!(futures_lite::StreamExt::next(&mut s).await, Some(1));
    ///     assert_eq!(futures_lite::StreamExt::next(&mut s).await, Some(2));
    ///     trigger.fire();
    ///     assert_eq!(futures_lite::StreamExt::next(&mut s).await, None);
    /// })
    /// ```
    fn or_done(self, cancel: Signal) -> OrDone<Self>
    where
        Self: Sized;
}

impl<S> StreamExt for S
where
    S: Stream,
{
    fn or_done(self, cancel: Signal) -> OrDone<Self>
    where
        Self: Sized,
    {
        OrDone::new(self, cancel)
    }
}
