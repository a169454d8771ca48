//! Cancellable asynchronous iteration.
//!
//! # Examples
//!
//! Merge multiple streams, stopping early once a shared signal fires:
//!
//! ```
//! use cancel_concurrency::prelude::*;
//! use cancel_concurrency::signal;
//! use futures_lite::future::block_on;
//! use futures_lite::{stream, StreamExt};
//!
//! block_on(async {
//!     let (_trigger, cancel) = signal::signal();
//!     let a = stream::iter(vec![10, 20, 30]);
//!     let b = stream::iter(vec![100, 200, 300]);
//!     let c = stream::iter(vec![1000, 2000]);
//!
//!     let mut out: Vec<_> = vec![a, b, c].fan_in(cancel).collect().await;
//!     out.sort_unstable();
//!     assert_eq!(out, [10, 20, 30, 100, 200, 300, 1000, 2000]);
//! })
//! ```
//!
//! # Cancellation
//!
//! Every stream in this module is given a [`Signal`]. Once its trigger fires
//! the stream ends, without yielding values its sources may still have ready.
//!
//! | Name      | Inputs             | When does it end?                            |
//! | ---       | ---                | ---                                          |
//! | `OrDone`  | one stream         | The source ends, or the signal fires.        |
//! | `FanIn`   | `N` streams        | Every source ends, or the signal fires.      |
//!
//! [`Signal`]: crate::signal::Signal
use futures_core::Stream;

use crate::signal::Signal;

pub use fan_in::FanIn;
pub use or_done::OrDone;
pub use stream_ext::StreamExt;

pub(crate) mod fan_in;
mod or_done;
mod stream_ext;

/// Wrap `stream` so that it ends as soon as `cancel` fires.
///
/// See [`StreamExt::or_done`] for more.
pub fn or_done<S>(cancel: Signal, stream: S) -> OrDone<S>
where
    S: Stream,
{
    OrDone::new(stream, cancel)
}

/// Merge `streams` into one stream which ends once every source has ended, or
/// as soon as `cancel` fires.
///
/// See [`FanIn`] for more.
pub fn fan_in<I>(cancel: Signal, streams: I) -> crate::vec::FanIn<I::Item>
where
    I: IntoIterator,
    I::Item: Stream,
{
    crate::vec::FanIn::new(streams.into_iter().collect(), cancel)
}
