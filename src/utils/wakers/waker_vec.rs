use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::task::Waker;

use super::{InlineWakerVec, ReadinessVec};

/// A collection of wakers, one per source, which share one `ReadinessVec`.
#[derive(Debug)]
pub(crate) struct WakerVec {
    wakers: Vec<Waker>,
    readiness: Arc<Mutex<ReadinessVec>>,
}

impl WakerVec {
    /// Create a new instance of `WakerVec`.
    pub(crate) fn new(len: usize) -> Self {
        let readiness = Arc::new(Mutex::new(ReadinessVec::new(len)));
        let wakers = (0..len)
            .map(|i| Arc::new(InlineWakerVec::new(i, readiness.clone())).into())
            .collect();
        Self { wakers, readiness }
    }

    pub(crate) fn get(&self, index: usize) -> Option<&Waker> {
        self.wakers.get(index)
    }

    /// Lock the `ReadinessVec`.
    pub(crate) fn readiness(&self) -> MutexGuard<'_, ReadinessVec> {
        self.readiness
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
