use super::FanIn as FanInTrait;
use crate::signal::Signal;
use crate::utils::{self, Fuse, Indexer, WakerVec};

use core::fmt;
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use futures_core::stream::{FusedStream, Stream};

/// A stream that merges multiple streams into a single stream until a signal
/// fires.
///
/// This `struct` is created by the [`fan_in`] method on the [`FanIn`] trait, or
/// by the [`fan_in`][crate::stream::fan_in] function. See their documentation
/// for more.
///
/// [`fan_in`]: crate::stream::FanIn::fan_in
/// [`FanIn`]: crate::stream::FanIn
#[pin_project::pin_project]
#[must_use = "streams do nothing unless polled or .awaited"]
pub struct FanIn<S>
where
    S: Stream,
{
    #[pin]
    streams: Vec<Fuse<S>>,
    cancel: Signal,
    wakers: WakerVec,
    indexer: Indexer,
    /// Number of sources which haven't ended yet.
    live: usize,
    done: bool,
}

impl<S> FanIn<S>
where
    S: Stream,
{
    pub(crate) fn new(streams: Vec<S>, cancel: Signal) -> Self {
        let live = streams.len();
        Self {
            wakers: WakerVec::new(live),
            indexer: Indexer::new(live),
            streams: streams.into_iter().map(Fuse::new).collect(),
            cancel,
            live,
            done: live == 0,
        }
    }

    /// Returns the number of sources which haven't ended yet.
    ///
    /// This drops to zero once the merged stream has ended, whether because
    /// every source ended or because the signal fired.
    pub fn live(&self) -> usize {
        if self.done {
            0
        } else {
            self.live
        }
    }
}

impl<S> fmt::Debug for FanIn<S>
where
    S: Stream + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FanIn")
            .field("streams", &self.streams)
            .field("live", &self.live())
            .finish()
    }
}

impl<S> Stream for FanIn<S>
where
    S: Stream,
{
    type Item = S::Item;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        if *this.done {
            return Poll::Ready(None);
        }

        if Pin::new(&mut *this.cancel).poll(cx).is_ready() {
            utils::trace!(live = *this.live, "fan_in: cancelled");
            *this.done = true;
            return Poll::Ready(None);
        }

        let len = this.streams.len();
        let mut readiness = this.wakers.readiness();
        readiness.set_waker(cx.waker());

        // Start one source further along each time so no single source can
        // starve the others.
        let mut index = this.indexer.start();
        loop {
            if !readiness.any_ready() {
                // Nothing is ready yet
                return Poll::Pending;
            }

            index = (index + 1).wrapping_rem(len);

            if !readiness.clear_ready(index) {
                continue;
            }

            // unlock readiness so we don't deadlock when polling
            drop(readiness);

            // Each source is polled with its own waker, which marks only that
            // source as ready again.
            let waker = this.wakers.get(index).unwrap();
            let mut cx = Context::from_waker(waker);

            let stream = utils::get_pin_mut_from_vec(this.streams.as_mut(), index).unwrap();
            let finished = stream.is_done();
            match stream.poll_next(&mut cx) {
                Poll::Ready(Some(item)) => {
                    // Mark ourselves as ready again because we need to poll for the next item.
                    this.wakers.readiness().set_ready(index);
                    return Poll::Ready(Some(item));
                }
                Poll::Ready(None) => {
                    if !finished {
                        *this.live -= 1;
                        utils::trace!(index, live = *this.live, "fan_in: source exhausted");
                    }
                    if *this.live == 0 {
                        utils::trace!("fan_in: all sources exhausted");
                        *this.done = true;
                        return Poll::Ready(None);
                    }
                }
                Poll::Pending => {}
            }

            // Lock readiness so we can use it again
            readiness = this.wakers.readiness();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let upper = self
            .streams
            .iter()
            .try_fold(0usize, |acc, s| acc.checked_add(s.size_hint().1?));
        (0, upper)
    }
}

impl<S> FusedStream for FanIn<S>
where
    S: Stream,
{
    fn is_terminated(&self) -> bool {
        self.done
    }
}

impl<S> FanInTrait for Vec<S>
where
    S: Stream,
{
    type Item = S::Item;
    type Stream = FanIn<S>;

    fn fan_in(self, cancel: Signal) -> Self::Stream {
        FanIn::new(self, cancel)
    }
}
