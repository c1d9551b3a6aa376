//! Order-preserving append builder.

use crate::builder::{Builder, SplitBuilder};
use crate::error::{Error, Result};
use alloc::vec::Vec;
use core::mem;

/// The default builder kind: appends elements into a vector in merge order.
///
/// Linear use is tracked with an explicit state flag, so merging into or
/// finishing an already-finished appender is reported as
/// `Error::InvalidBuilderState` instead of silently producing stale data.
#[derive(Clone, Debug)]
pub struct Appender<T> {
    items: Vec<T>,
    finished: bool,
}

impl<T> Default for Appender<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Appender<T> {
    /// Creates a new empty appender.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            finished: false,
        }
    }

    /// Creates a new empty appender with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            finished: false,
        }
    }

    /// Returns the number of elements merged so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if no elements have been merged.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Builder for Appender<T> {
    type Item = T;
    type Output = Vec<T>;

    fn merge(&mut self, item: T) -> Result<()> {
        if self.finished {
            return Err(Error::invalid_builder_state("merge on a finished appender"));
        }
        self.items.push(item);
        Ok(())
    }

    fn finish(&mut self) -> Result<Vec<T>> {
        if self.finished {
            return Err(Error::invalid_builder_state(
                "finish on a finished appender",
            ));
        }
        self.finished = true;
        Ok(mem::take(&mut self.items))
    }

    fn is_finished(&self) -> bool {
        self.finished
    }
}

impl<T> SplitBuilder for Appender<T> {
    fn split(self, parts: usize) -> Result<Vec<Self>> {
        if self.finished {
            return Err(Error::invalid_builder_state("split on a finished appender"));
        }
        if parts == 0 {
            return Err(Error::invalid_builder_state("split into zero parts"));
        }
        let mut out = Vec::with_capacity(parts);
        out.push(self);
        for _ in 1..parts {
            out.push(Appender::new());
        }
        Ok(out)
    }

    fn join(parts: Vec<Self>) -> Result<Self> {
        let mut iter = parts.into_iter();
        let mut joined = match iter.next() {
            Some(first) => first,
            None => return Err(Error::invalid_builder_state("join of zero parts")),
        };
        if joined.finished {
            return Err(Error::invalid_builder_state("join of a finished appender"));
        }
        for part in iter {
            if part.finished {
                return Err(Error::invalid_builder_state("join of a finished appender"));
            }
            joined.items.extend(part.items);
        }
        Ok(joined)
    }
}
