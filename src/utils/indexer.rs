use core::ops;

/// Generate an iteration sequence. This provides *fair* iteration when a fixed
/// set of alternatives needs to be polled in turn: every call starts one slot
/// further along than the last.
#[derive(Debug)]
pub(crate) struct Indexer {
    offset: usize,
    max: usize,
}

impl Indexer {
    pub(crate) fn new(max: usize) -> Self {
        Self { offset: 0, max }
    }

    /// Returns the starting point for this round and moves the next one along.
    pub(crate) fn start(&mut self) -> usize {
        let offset = self.offset;
        if self.max > 0 {
            self.offset = (self.offset + 1).wrapping_rem(self.max);
        }
        offset
    }

    /// Generate a range between `0..max`, incrementing the starting point
    /// for the next iteration.
    pub(crate) fn iter(&mut self) -> IndexIter {
        let offset = self.start();
        IndexIter {
            iter: (0..self.max),
            offset,
        }
    }
}

pub(crate) struct IndexIter {
    iter: ops::Range<usize>,
    offset: usize,
}

impl Iterator for IndexIter {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter
            .next()
            .map(|pos| (pos + self.offset).wrapping_rem(self.iter.end))
    }
}
