use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::Stream;
use pin_project::pin_project;

/// A stream which is never polled again once it has returned `None`.
#[pin_project]
#[derive(Debug)]
pub(crate) struct Fuse<S> {
    #[pin]
    stream: S,
    done: bool,
}

impl<S> Fuse<S> {
    pub(crate) fn new(stream: S) -> Self {
        Self {
            stream,
            done: false,
        }
    }

    pub(crate) fn is_done(&self) -> bool {
        self.done
    }
}

impl<S: Stream> Stream for Fuse<S> {
    type Item = S::Item;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<S::Item>> {
        let this = self.project();
        if *this.done {
            return Poll::Ready(None);
        }
        let next = futures_lite::ready!(this.stream.poll_next(cx));
        if next.is_none() {
            *this.done = true;
        }
        Poll::Ready(next)
    }
}
