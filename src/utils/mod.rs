//! Utilities to implement the different futures and streams of this crate.

mod fuse;
mod indexer;
mod pin;
mod trace;
mod wakers;

pub(crate) use fuse::Fuse;
pub(crate) use indexer::Indexer;
pub(crate) use pin::get_pin_mut_from_vec;
pub(crate) use trace::trace;
pub(crate) use wakers::WakerVec;
