//! Broadcast, one-shot signals.
//!
//! A [`Trigger`] fires exactly once; every [`Signal`] obtained from it
//! observes the firing. A signal is level-triggered: once fired it stays fired,
//! and any observer created afterwards resolves immediately.
//!
//! Signals are the cancellation mechanism of this crate: [`or_done`] and
//! [`fan_in`] stop as soon as the signal they were given fires.
//!
//! # Examples
//!
//! ```
//! use cancel_concurrency::signal;
//! use futures_lite::future::block_on;
//!
//! let (trigger, signal) = signal::signal();
//! let observer = signal.clone();
//! assert!(!observer.is_fired());
//!
//! trigger.fire();
//! block_on(observer);
//! assert!(signal.is_fired());
//! ```
//!
//! [`or_done`]: crate::stream::or_done
//! [`fan_in`]: crate::stream::fan_in

use core::fmt;
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll, Waker};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use slab::Slab;

/// Create a new trigger together with one observer of it.
pub fn signal() -> (Trigger, Signal) {
    let trigger = Trigger::new();
    let signal = trigger.signal();
    (trigger, signal)
}

struct Inner {
    fired: AtomicBool,
    wakers: Mutex<Slab<Waker>>,
}

impl Inner {
    fn wakers(&self) -> MutexGuard<'_, Slab<Waker>> {
        self.wakers.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn fire(&self) -> bool {
        // Taking the lock orders the flag store with `Signal::poll`'s
        // check-then-register, so no observer can miss the wake-up.
        let mut wakers = self.wakers();
        if self.fired.swap(true, Ordering::AcqRel) {
            return false;
        }
        for (_, waker) in wakers.iter_mut() {
            waker.wake_by_ref();
        }
        wakers.clear();
        true
    }
}

/// The owning side of a [`Signal`].
///
/// Dropping the trigger fires it: an owner that is gone can never fire later,
/// and observers would otherwise wait forever.
pub struct Trigger {
    inner: Arc<Inner>,
}

impl Trigger {
    /// Create a new, not yet fired trigger.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                fired: AtomicBool::new(false),
                wakers: Mutex::new(Slab::new()),
            }),
        }
    }

    /// Create a new observer of this trigger.
    pub fn signal(&self) -> Signal {
        Signal {
            inner: self.inner.clone(),
            key: None,
        }
    }

    /// Fire the trigger, waking every observer.
    ///
    /// Returns `true` if this call fired it, `false` if it had already fired.
    pub fn fire(&self) -> bool {
        let fired = self.inner.fire();
        if fired {
            crate::utils::trace!(observers = Arc::strong_count(&self.inner) - 1, "signal fired");
        }
        fired
    }

    /// Returns `true` if the trigger has fired.
    pub fn is_fired(&self) -> bool {
        self.inner.fired.load(Ordering::Acquire)
    }
}

impl Default for Trigger {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Trigger {
    fn drop(&mut self) {
        self.inner.fire();
    }
}

impl fmt::Debug for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trigger")
            .field("fired", &self.is_fired())
            .finish()
    }
}

/// An observer of a [`Trigger`].
///
/// Awaiting a signal completes once the trigger has fired. Clones observe the
/// same trigger but keep their own waker registration, so any number of tasks
/// can wait on one signal at the same time.
#[must_use = "futures do nothing unless you `.await` or poll them"]
pub struct Signal {
    inner: Arc<Inner>,
    key: Option<usize>,
}

impl Signal {
    /// Returns `true` if the trigger has fired.
    pub fn is_fired(&self) -> bool {
        self.inner.fired.load(Ordering::Acquire)
    }
}

impl Clone for Signal {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            key: None,
        }
    }
}

impl Future for Signal {
    type Output = ();

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        if this.is_fired() {
            return Poll::Ready(());
        }

        let mut wakers = this.inner.wakers();
        // Re-check under the lock: `fire` may have run since the check above.
        if this.is_fired() {
            return Poll::Ready(());
        }
        match this.key {
            Some(key) => match wakers.get_mut(key) {
                Some(waker) => waker.clone_from(cx.waker()),
                None => this.key = Some(wakers.insert(cx.waker().clone())),
            },
            None => this.key = Some(wakers.insert(cx.waker().clone())),
        }
        Poll::Pending
    }
}

impl Drop for Signal {
    fn drop(&mut self) {
        if let Some(key) = self.key.take() {
            let mut wakers = self.inner.wakers();
            if wakers.contains(key) {
                wakers.remove(key);
            }
        }
    }
}

impl fmt::Debug for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("fired", &self.is_fired())
            .finish()
    }
}
