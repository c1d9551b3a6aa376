//! Keyed-consolidation builder.

use crate::builder::{Builder, SplitBuilder};
use crate::error::{Error, Result};
use crate::merger::Combine;
use alloc::vec::Vec;
use core::hash::Hash;
use core::marker::PhantomData;
use core::mem;
use hashbrown::hash_map::Entry;
use hashbrown::HashMap;

/// A builder that consolidates merged `(key, value)` pairs by key.
///
/// Values merged under the same key are folded together with `C::combine`, in
/// merge order within a part and in ascending part order across a split. The
/// finished map's iteration order is unspecified; the per-key fold order is
/// not.
#[derive(Clone, Debug)]
pub struct DictMerger<K, V, C> {
    entries: HashMap<K, V>,
    finished: bool,
    _combine: PhantomData<C>,
}

impl<K: Eq + Hash, V, C: Combine<V>> Default for DictMerger<K, V, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash, V, C: Combine<V>> DictMerger<K, V, C> {
    /// Creates a new empty dict merger.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            finished: false,
            _combine: PhantomData,
        }
    }

    /// Returns the number of distinct keys merged so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no pairs have been merged.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the consolidated value for `key`, if any.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    fn consolidate(&mut self, key: K, value: V) {
        match self.entries.entry(key) {
            Entry::Occupied(mut occupied) => {
                let prior = mem::replace(occupied.get_mut(), C::identity());
                *occupied.get_mut() = C::combine(prior, value);
            }
            Entry::Vacant(vacant) => {
                vacant.insert(value);
            }
        }
    }
}

impl<K: Eq + Hash, V, C: Combine<V>> Builder for DictMerger<K, V, C> {
    type Item = (K, V);
    type Output = HashMap<K, V>;

    fn merge(&mut self, item: (K, V)) -> Result<()> {
        if self.finished {
            return Err(Error::invalid_builder_state(
                "merge on a finished dict merger",
            ));
        }
        let (key, value) = item;
        self.consolidate(key, value);
        Ok(())
    }

    fn finish(&mut self) -> Result<HashMap<K, V>> {
        if self.finished {
            return Err(Error::invalid_builder_state(
                "finish on a finished dict merger",
            ));
        }
        self.finished = true;
        Ok(mem::take(&mut self.entries))
    }

    fn is_finished(&self) -> bool {
        self.finished
    }
}

impl<K: Eq + Hash, V, C: Combine<V>> SplitBuilder for DictMerger<K, V, C> {
    fn split(self, parts: usize) -> Result<Vec<Self>> {
        if self.finished {
            return Err(Error::invalid_builder_state(
                "split on a finished dict merger",
            ));
        }
        if parts == 0 {
            return Err(Error::invalid_builder_state("split into zero parts"));
        }
        let mut out = Vec::with_capacity(parts);
        out.push(self);
        for _ in 1..parts {
            out.push(DictMerger::new());
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
            return Err(Error::invalid_builder_state(
                "join of a finished dict merger",
            ));
        }
        for part in iter {
            if part.finished {
                return Err(Error::invalid_builder_state(
                    "join of a finished dict merger",
                ));
            }
            for (key, value) in part.entries {
                joined.consolidate(key, value);
            }
        }
        Ok(joined)
    }
}
