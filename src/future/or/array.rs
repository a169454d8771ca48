use super::Or as OrTrait;
use crate::vec::Or;

use core::future::IntoFuture;

impl<F, const N: usize> OrTrait for [F; N]
where
    F: IntoFuture,
{
    type Future = Or<F::IntoFuture>;

    fn or(self) -> Self::Future {
        Or::new(self.into_iter().map(IntoFuture::into_future).collect())
    }
}
