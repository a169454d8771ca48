use futures_core::Stream;

use crate::signal::Signal;

pub(crate) mod array;
pub(crate) mod vec;

/// Merge multiple streams into a single stream of all their outputs, until a
/// signal fires.
///
/// Items are yielded as soon as they're received. The order of items from any
/// single source is preserved; the order between sources is not. The merged
/// stream ends exactly once: after every source has ended, or as soon as the
/// cancellation signal fires, whichever comes first. Merging zero streams
/// yields a stream which has already ended.
///
/// # Examples
///
/// ```
/// use cancel_concurrency::prelude::*;
/// use cancel_concurrency::signal;
/// use futures_lite::stream::{self, StreamExt};
/// use futures_lite::future::block_on;
///
/// block_on(async {
///     let (_trigger, cancel) = signal::signal();
///     let a = stream::once(1);
///     let b = stream::once(2);
///     let c = stream::once(3);
///     let mut s = [a, b, c].fan_in(cancel);
///
///     let mut buf = vec![];
///     s.for_each(|n| buf.push(n)).await;
///     buf.sort_unstable();
///     assert_eq!(&buf, &[1, 2, 3]);
/// })
/// ```
pub trait FanIn {
    /// The resulting output type.
    type Item;

    /// The stream type.
    type Stream: Stream<Item = Self::Item>;

    /// Combine multiple streams into a single stream which stops when
    /// `cancel` fires.
    fn fan_in(self, cancel: Signal) -> Self::Stream;
}
