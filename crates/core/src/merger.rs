//! Scalar-reduction builder.

use crate::builder::{Builder, SplitBuilder};
use crate::error::{Error, Result};
use alloc::vec::Vec;
use core::marker::PhantomData;
use core::mem;

/// A binary combine step for reduction builders.
///
/// `combine` must be associative; split parts are always folded back together
/// in ascending part order, so commutativity is not required.
pub trait Combine<T> {
    /// The identity element of the combine.
    fn identity() -> T;

    /// Folds one more value into the accumulator.
    fn combine(acc: T, item: T) -> T;
}

/// Addition combine.
pub struct SumCombine;

impl Combine<i64> for SumCombine {
    fn identity() -> i64 {
        0
    }

    fn combine(acc: i64, item: i64) -> i64 {
        acc + item
    }
}

impl Combine<f64> for SumCombine {
    fn identity() -> f64 {
        0.0
    }

    fn combine(acc: f64, item: f64) -> f64 {
        acc + item
    }
}

/// Minimum combine.
pub struct MinCombine;

impl Combine<i64> for MinCombine {
    fn identity() -> i64 {
        i64::MAX
    }

    fn combine(acc: i64, item: i64) -> i64 {
        if item < acc {
            item
        } else {
            acc
        }
    }
}

impl Combine<f64> for MinCombine {
    fn identity() -> f64 {
        f64::INFINITY
    }

    fn combine(acc: f64, item: f64) -> f64 {
        if item < acc {
            item
        } else {
            acc
        }
    }
}

/// Maximum combine.
pub struct MaxCombine;

impl Combine<i64> for MaxCombine {
    fn identity() -> i64 {
        i64::MIN
    }

    fn combine(acc: i64, item: i64) -> i64 {
        if item > acc {
            item
        } else {
            acc
        }
    }
}

impl Combine<f64> for MaxCombine {
    fn identity() -> f64 {
        f64::NEG_INFINITY
    }

    fn combine(acc: f64, item: f64) -> f64 {
        if item > acc {
            item
        } else {
            acc
        }
    }
}

/// A builder that reduces merged elements to a single value.
///
/// The reduction analog of `Appender`: each merge folds the element into the
/// running accumulator with `C::combine`, and `finish` produces the final
/// value. Split parts start from the identity and are folded back in part
/// order.
#[derive(Clone, Debug)]
pub struct Merger<T, C> {
    acc: T,
    finished: bool,
    _combine: PhantomData<C>,
}

impl<T, C: Combine<T>> Default for Merger<T, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: Combine<T>> Merger<T, C> {
    /// Creates a new merger holding the identity element.
    pub fn new() -> Self {
        Self {
            acc: C::identity(),
            finished: false,
            _combine: PhantomData,
        }
    }

    /// Creates a new merger seeded with an initial value.
    pub fn with_initial(initial: T) -> Self {
        Self {
            acc: initial,
            finished: false,
            _combine: PhantomData,
        }
    }

    /// Returns a reference to the current accumulator.
    #[inline]
    pub fn current(&self) -> &T {
        &self.acc
    }
}

impl<T, C: Combine<T>> Builder for Merger<T, C> {
    type Item = T;
    type Output = T;

    fn merge(&mut self, item: T) -> Result<()> {
        if self.finished {
            return Err(Error::invalid_builder_state("merge on a finished merger"));
        }
        let acc = mem::replace(&mut self.acc, C::identity());
        self.acc = C::combine(acc, item);
        Ok(())
    }

    fn finish(&mut self) -> Result<T> {
        if self.finished {
            return Err(Error::invalid_builder_state("finish on a finished merger"));
        }
        self.finished = true;
        Ok(mem::replace(&mut self.acc, C::identity()))
    }

    fn is_finished(&self) -> bool {
        self.finished
    }
}

impl<T, C: Combine<T>> SplitBuilder for Merger<T, C> {
    fn split(self, parts: usize) -> Result<Vec<Self>> {
        if self.finished {
            return Err(Error::invalid_builder_state("split on a finished merger"));
        }
        if parts == 0 {
            return Err(Error::invalid_builder_state("split into zero parts"));
        }
        let mut out = Vec::with_capacity(parts);
        out.push(self);
        for _ in 1..parts {
            out.push(Merger::new());
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
            return Err(Error::invalid_builder_state("join of a finished merger"));
        }
        for part in iter {
            if part.finished {
                return Err(Error::invalid_builder_state("join of a finished merger"));
            }
            let acc = mem::replace(&mut joined.acc, C::identity());
            joined.acc = C::combine(acc, part.acc);
        }
        Ok(joined)
    }
}
