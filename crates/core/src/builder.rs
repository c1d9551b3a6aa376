//! Builder protocol traits.

use crate::error::Result;
use alloc::vec::Vec;

/// An accumulator threaded through an ordered iteration.
///
/// A builder starts empty, absorbs one logical unit per `merge` call, and is
/// materialized exactly once with `finish`. After `finish` the builder is
/// spent: any further `merge` or `finish` call fails with
/// `Error::InvalidBuilderState`. The element sequence observable after
/// `finish` equals, in order, the elements passed to `merge`.
pub trait Builder {
    /// Element type absorbed by `merge`.
    type Item;
    /// Collection type produced by `finish`.
    type Output;

    /// Appends one logical unit to the builder.
    fn merge(&mut self, item: Self::Item) -> Result<()>;

    /// Materializes the accumulated content and consumes the builder's state.
    fn finish(&mut self) -> Result<Self::Output>;

    /// Returns true once `finish` has been called.
    fn is_finished(&self) -> bool;
}

/// A builder that can be partitioned for parallel execution.
///
/// `split(n)` yields `n` independent builders covering disjoint index ranges
/// of one logical sequence; `join` recombines them in ascending range order.
/// For any partitioning, split, per-part merges, then join must reproduce the
/// single-threaded merge sequence exactly. Merges are combined associatively
/// in index order; commutativity is never assumed.
pub trait SplitBuilder: Builder + Sized {
    /// Splits this builder into `parts` independent builders.
    ///
    /// The first part inherits everything already merged (it covers the
    /// leftmost range); the rest start empty. Fails on a finished builder or
    /// `parts == 0`.
    fn split(self, parts: usize) -> Result<Vec<Self>>;

    /// Joins per-part builders in ascending part order.
    ///
    /// Fails on an empty part list or if any part is already finished.
    fn join(parts: Vec<Self>) -> Result<Self>;
}
