//! Cancellable concurrency combinators for [`Future`][core::future::Future]
//! and `Stream`.
//!
//! A handful of building blocks for fanning multiple asynchronous sequences
//! into one, and for short-circuiting on the first of many events, all under a
//! shared cooperative cancellation signal. See the [`signal`], [`stream`] and
//! [`future`] submodules for more.
//!
//! # Operations
//!
//! - [`signal::signal`]: Create a broadcast, one-shot signal and its trigger.
//! - [`stream::StreamExt::or_done`]: Pass a stream through until a signal fires.
//! - [`stream::FanIn`]: Merge many streams into one until a signal fires.
//! - [`future::Or`]: Wait for the first of many completion signals.
//!
//! None of the combinators spawn tasks: each is a plain `Future` or `Stream`
//! which does its work while it is polled, on whichever executor polls it.
//! Spawn one onto your executor to run it in the background.
//!
//! # Examples
//!
//! Merge three producers and stop them all on shutdown:
//!
//! ```rust
//! use cancel_concurrency::prelude::*;
//! use cancel_concurrency::signal;
//! use futures_lite::future::block_on;
//! use futures_lite::{stream, StreamExt};
//!
//! block_on(async {
//!     let (shutdown, cancel) = signal::signal();
//!     let a = stream::iter(vec![10, 20, 30]);
//!     let b = stream::iter(vec![100, 200, 300]);
//!     let c = stream::repeat(1000);
//!
//!     let mut merged = vec![a.boxed(), b.boxed(), c.boxed()].fan_in(cancel);
//!     for _ in 0..8 {
//!         assert!(merged.next().await.is_some());
//!     }
//!     shutdown.fire();
//!     assert_eq!(merged.next().await, None);
//! })
//! ```
//!
//! # Features
//!
//! - `tracing`: emit `tracing` events at trace level when signals fire,
//!   streams end and `or` levels complete.

#![deny(missing_debug_implementations, nonstandard_style)]
#![warn(missing_docs, unreachable_pub)]

mod utils;

/// The cancel concurrency prelude.
pub mod prelude {
    pub use super::future::Or as _;
    pub use super::stream::FanIn as _;
    pub use super::stream::StreamExt as _;
}

pub mod future;
pub mod signal;
pub mod stream;

/// Helper types for contiguous growable array type with heap-allocated contents,
/// written `Vec<T>`.
pub mod vec {
    pub use crate::future::or::vec::Or;
    pub use crate::stream::fan_in::vec::FanIn;
}
