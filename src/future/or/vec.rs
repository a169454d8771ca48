use super::Or as OrTrait;
use crate::signal::{Signal, Trigger};
use crate::utils::{self, Indexer};

use core::fmt;
use core::future::{Future, IntoFuture};
use core::pin::Pin;
use core::task::{Context, Poll};

use pin_project::pin_project;

/// How many signals a level waits on directly before folding the remainder
/// into a nested level.
const PEEL: usize = 3;

/// A future which completes when the first of many signals completes.
///
/// This `struct` is created by the [`or`] method on the [`Or`] trait, or by
/// the [`or`][crate::future::or] function. See their documentation for more.
///
/// A single wait can only poll a fixed number of alternatives, so the signals
/// are split across nested levels. A level with two signals waits on both. A
/// level with more waits on the first three and on a nested level built from
/// the rest plus this level's own completion signal. When any alternative
/// completes the level fires its own trigger, which the level nested under it
/// observes, so completion collapses from the inside out.
///
/// [`or`]: crate::future::Or::or
/// [`Or`]: crate::future::Or
#[pin_project]
#[must_use = "futures do nothing unless you `.await` or poll them"]
pub struct Or<F> {
    #[pin]
    level: Level<F>,
    len: usize,
    done: bool,
}

impl<F> Or<F>
where
    F: Future,
{
    pub(crate) fn new(signals: Vec<F>) -> Self {
        let len = signals.len();
        Self {
            level: Level::build(signals.into_iter().map(Branch::Source).collect()),
            len,
            done: false,
        }
    }

    /// Returns the number of wait levels used to cover every signal.
    ///
    /// This is zero for zero or one signals, and `n / 2` otherwise: every level
    /// waits on three signals directly and hands the rest, plus its own
    /// completion signal, to the next level, so each level past the first
    /// covers two more signals.
    pub fn levels(&self) -> usize {
        self.level.levels()
    }
}

impl<F> fmt::Debug for Or<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Or")
            .field("len", &self.len)
            .field("levels", &self.level.levels())
            .field("done", &self.done)
            .finish()
    }
}

impl<F> Future for Or<F>
where
    F: Future,
{
    type Output = ();

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        // Once complete, stay complete without touching the signals again.
        if *this.done {
            return Poll::Ready(());
        }
        futures_lite::ready!(this.level.poll(cx));
        *this.done = true;
        Poll::Ready(())
    }
}

impl<F> OrTrait for Vec<F>
where
    F: IntoFuture,
{
    type Future = Or<F::IntoFuture>;

    fn or(self) -> Self::Future {
        Or::new(self.into_iter().map(IntoFuture::into_future).collect())
    }
}

/// One alternative of a level: a caller's signal, or the completion signal of
/// the enclosing level.
#[pin_project(project = BranchProj)]
enum Branch<F> {
    Source(#[pin] F),
    Own(Signal),
}

impl<F> Future for Branch<F>
where
    F: Future,
{
    type Output = ();

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match self.project() {
            BranchProj::Source(fut) => fut.poll(cx).map(drop),
            BranchProj::Own(signal) => Pin::new(signal).poll(cx),
        }
    }
}

#[pin_project(project = LevelProj)]
enum Level<F> {
    /// No signals: never completes.
    Never,
    /// One signal, polled as-is.
    One(#[pin] Branch<F>),
    Two {
        #[pin]
        a: Branch<F>,
        #[pin]
        b: Branch<F>,
        indexer: Indexer,
        trigger: Trigger,
    },
    Many {
        #[pin]
        a: Branch<F>,
        #[pin]
        b: Branch<F>,
        #[pin]
        c: Branch<F>,
        rest: Pin<Box<Level<F>>>,
        indexer: Indexer,
        trigger: Trigger,
    },
}

impl<F> Level<F> {
    fn build(mut branches: Vec<Branch<F>>) -> Self {
        match branches.len() {
            0 => Level::Never,
            1 => Level::One(branches.pop().unwrap()),
            2 => {
                let mut pair = branches.drain(..);
                let (a, b) = (pair.next().unwrap(), pair.next().unwrap());
                Level::Two {
                    a,
                    b,
                    indexer: Indexer::new(2),
                    trigger: Trigger::new(),
                }
            }
            _ => {
                let trigger = Trigger::new();
                let mut head = branches.drain(..PEEL);
                let (a, b, c) = (
                    head.next().unwrap(),
                    head.next().unwrap(),
                    head.next().unwrap(),
                );
                drop(head);

                let mut rest = branches;
                rest.push(Branch::Own(trigger.signal()));
                Level::Many {
                    a,
                    b,
                    c,
                    rest: Box::pin(Level::build(rest)),
                    indexer: Indexer::new(PEEL + 1),
                    trigger,
                }
            }
        }
    }

    fn levels(&self) -> usize {
        match self {
            Level::Never | Level::One(_) => 0,
            Level::Two { .. } => 1,
            Level::Many { rest, .. } => 1 + rest.levels(),
        }
    }
}

impl<F> Future for Level<F>
where
    F: Future,
{
    type Output = ();

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match self.project() {
            LevelProj::Never => Poll::Pending,
            LevelProj::One(branch) => branch.poll(cx),
            LevelProj::Two {
                mut a,
                mut b,
                indexer,
                trigger,
            } => {
                if trigger.is_fired() {
                    return Poll::Ready(());
                }
                for index in indexer.iter() {
                    let ready = match index {
                        0 => a.as_mut().poll(cx).is_ready(),
                        _ => b.as_mut().poll(cx).is_ready(),
                    };
                    if ready {
                        utils::trace!(index, "or: level of two completed");
                        trigger.fire();
                        return Poll::Ready(());
                    }
                }
                Poll::Pending
            }
            LevelProj::Many {
                mut a,
                mut b,
                mut c,
                rest,
                indexer,
                trigger,
            } => {
                if trigger.is_fired() {
                    return Poll::Ready(());
                }
                for index in indexer.iter() {
                    let ready = match index {
                        0 => a.as_mut().poll(cx).is_ready(),
                        1 => b.as_mut().poll(cx).is_ready(),
                        2 => c.as_mut().poll(cx).is_ready(),
                        _ => rest.as_mut().poll(cx).is_ready(),
                    };
                    if ready {
                        utils::trace!(index, "or: level completed");
                        trigger.fire();
                        return Poll::Ready(());
                    }
                }
                Poll::Pending
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::signal;
    use futures::executor::LocalPool;
    use futures::task::LocalSpawnExt;
    use futures_lite::future::{self, block_on};
    use futures_lite::FutureExt;
    use std::cell::Cell;
    use std::rc::Rc;

    fn triggers(n: usize) -> (Vec<Trigger>, Vec<Signal>) {
        let triggers: Vec<_> = (0..n).map(|_| Trigger::new()).collect();
        let signals = triggers.iter().map(Trigger::signal).collect();
        (triggers, signals)
    }

    #[test]
    fn levels() {
        let expected = [0, 0, 1, 1, 2, 2, 3, 3, 4, 4, 5];
        for (n, levels) in expected.into_iter().enumerate() {
            let (_triggers, signals) = triggers(n);
            assert_eq!(signals.or().levels(), levels, "n = {n}");
        }
    }

    #[test]
    fn empty_never_completes() {
        block_on(async {
            let mut fut = Vec::<Signal>::new().or();
            for _ in 0..10 {
                assert!(future::poll_once(&mut fut).await.is_none());
            }
        })
    }

    #[test]
    fn single_completes_with_its_signal() {
        block_on(async {
            let (trigger, signal) = signal::signal();
            let mut fut = vec![signal].or();
            assert!(future::poll_once(&mut fut).await.is_none());
            trigger.fire();
            assert!(future::poll_once(&mut fut).await.is_some());
        })
    }

    #[test]
    fn any_position_wins() {
        for n in 1..=12 {
            for winner in 0..n {
                let (triggers, signals) = triggers(n);
                let mut fut = signals.or();
                block_on(async {
                    assert!(future::poll_once(&mut fut).await.is_none());
                    triggers[winner].fire();
                    assert!(
                        future::poll_once(&mut fut).await.is_some(),
                        "n = {n}, winner = {winner}"
                    );
                });
            }
        }
    }

    #[test]
    fn none_fired_stays_pending() {
        let (_triggers, signals) = triggers(9);
        let mut fut = signals.or();
        block_on(async {
            for _ in 0..5 {
                assert!(future::poll_once(&mut fut).await.is_none());
            }
        });
    }

    #[test]
    fn stays_complete() {
        block_on(async {
            let mut fut = vec![future::ready(1).boxed(), future::pending().boxed()].or();
            (&mut fut).await;
            (&mut fut).await;
        })
    }

    #[test]
    fn wakes_the_waiting_task() {
        let mut pool = LocalPool::new();
        let (triggers, signals) = triggers(7);
        let done = Rc::new(Cell::new(false));
        let done2 = done.clone();

        pool.spawner()
            .spawn_local(async move {
                signals.or().await;
                done2.set(true);
            })
            .unwrap();

        pool.run_until_stalled();
        assert!(!done.get());

        triggers[6].fire();
        pool.run_until_stalled();
        assert!(done.get());
    }

    #[test]
    fn inner_level_fires_its_trigger() {
        block_on(async {
            let (triggers, signals) = triggers(4);
            let mut fut = signals.or();
            assert!(future::poll_once(&mut fut).await.is_none());
            triggers[3].fire();
            assert!(future::poll_once(&mut fut).await.is_some());

            match &fut.level {
                Level::Many { rest, trigger, .. } => {
                    assert!(trigger.is_fired());
                    match &**rest {
                        Level::Two { trigger, .. } => assert!(trigger.is_fired()),
                        _ => panic!("expected a nested level of two"),
                    }
                }
                _ => panic!("expected a level of many"),
            }
        })
    }
}
