use super::FanIn as FanInTrait;
use crate::signal::Signal;
use crate::vec::FanIn;

use futures_core::Stream;

impl<S, const N: usize> FanInTrait for [S; N]
where
    S: Stream,
{
    type Item = S::Item;
    type Stream = FanIn<S>;

    fn fan_in(self, cancel: Signal) -> Self::Stream {
        FanIn::new(Vec::from(self), cancel)
    }
}
