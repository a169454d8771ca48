//! Waiting on the first of many completion signals.
//!
//! A completion signal is any future whose output doesn't matter: only the
//! fact that it completed does. [`Or`] combines a runtime-sized set of them
//! into one future which completes as soon as any of them does.
//!
//! # Examples
//!
//! ```
//! use cancel_concurrency::prelude::*;
//! use futures_lite::future::{self, block_on};
//! use futures_lite::FutureExt;
//!
//! block_on(async {
//!     let signals = vec![
//!         future::pending::<()>().boxed(),
//!         future::ready(()).boxed(),
//!         future::pending::<()>().boxed(),
//!         future::pending::<()>().boxed(),
//!     ];
//!     signals.or().await;
//! })
//! ```
//!
//! Timeouts are just one more signal:
//!
//! ```
//! use cancel_concurrency::future::or;
//! use cancel_concurrency::signal;
//! use futures_lite::future::block_on;
//!
//! block_on(async {
//!     let (shutdown, on_shutdown) = signal::signal();
//!     let (_other, on_other) = signal::signal();
//!     shutdown.fire();
//!     or([on_shutdown, on_other]).await;
//! })
//! ```
use core::future::IntoFuture;

pub use or::Or;

pub(crate) mod or;

/// Wait for the first of `signals` to complete.
///
/// See [`Or`] for more.
pub fn or<I>(signals: I) -> crate::vec::Or<<I::Item as IntoFuture>::IntoFuture>
where
    I: IntoIterator,
    I::Item: IntoFuture,
{
    crate::vec::Or::new(signals.into_iter().map(IntoFuture::into_future).collect())
}
