use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::stream::{FusedStream, Stream};
use pin_project::pin_project;

use crate::signal::Signal;
use crate::utils;

/// Pass through the items of a stream until a signal fires.
///
/// This `struct` is created by the [`or_done`] method on [`StreamExt`]. See its
/// documentation for more.
///
/// [`or_done`]: crate::stream::StreamExt::or_done
/// [`StreamExt`]: crate::stream::StreamExt
#[derive(Debug)]
#[must_use = "streams do nothing unless polled or .awaited"]
#[pin_project]
pub struct OrDone<S> {
    #[pin]
    stream: S,
    cancel: Signal,
    state: State,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Streaming,
    Done,
}

impl<S> OrDone<S> {
    pub(crate) fn new(stream: S, cancel: Signal) -> Self {
        Self {
            stream,
            cancel,
            state: State::Streaming,
        }
    }
}

impl<S> Stream for OrDone<S>
where
    S: Stream,
{
    type Item = S::Item;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.project();

        if *this.state == State::Done {
            return Poll::Ready(None);
        }

        // The signal is checked before every item, so a source with values
        // still ready can't keep the stream going once it has fired. Polling
        // it also registers our waker, so firing wakes a pending consumer.
        if Pin::new(&mut *this.cancel).poll(cx).is_ready() {
            utils::trace!("or_done: cancelled");
            *this.state = State::Done;
            return Poll::Ready(None);
        }

        match this.stream.poll_next(cx) {
            Poll::Ready(Some(item)) => Poll::Ready(Some(item)),
            Poll::Ready(None) => {
                utils::trace!("or_done: source exhausted");
                *this.state = State::Done;
                Poll::Ready(None)
            }
            Poll::Pending => Poll::Pending,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.state {
            State::Done => (0, Some(0)),
            State::Streaming => (0, self.stream.size_hint().1),
        }
    }
}

impl<S> FusedStream for OrDone<S>
where
    S: Stream,
{
    fn is_terminated(&self) -> bool {
        self.state == State::Done
    }
}
