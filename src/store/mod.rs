//! Canonical interval store
//!
//! Maps every key of a totally ordered key space to a value while storing
//! only the keys where the value changes:
//! - `base` covers everything below the first boundary
//! - each boundary `(k, v)` covers `[k, next boundary)`
//!
//! The boundary sequence is kept canonical: no two adjacent entries carry
//! the same value, and the first entry never restates `base`.

mod assign;

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

/// Which end of an assigned range a check refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// The inclusive start of the range
    Begin,
    /// The exclusive end of the range
    End,
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edge::Begin => write!(f, "begin"),
            Edge::End => write!(f, "end"),
        }
    }
}

/// Reasons an assignment is refused.
///
/// Both leave the store exactly as it was before the call.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignError {
    /// The store was not canonical around the range edge on entry
    #[error("store is not canonical near the {edge} of the assigned range")]
    PrecedingInputInvariantViolation {
        /// Range edge whose neighbourhood failed the check
        edge: Edge,
    },

    /// First assignment into an empty store restates the base value
    #[error("first assignment into an empty store must not restate the base value")]
    RedundantBaseAssignment,
}

/// Piecewise-constant total mapping from `K` to `V`
///
/// Space: O(number of value changes), independent of the key range painted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalStore<K, V> {
    /// Value active below the first boundary
    base: V,

    /// Value changes, strictly increasing by key
    boundaries: BTreeMap<K, V>,
}

impl<K: Ord, V> IntervalStore<K, V> {
    /// Create a store mapping the whole key space to `base`
    pub fn new(base: V) -> Self {
        Self {
            base,
            boundaries: BTreeMap::new(),
        }
    }

    /// Value active at `key`
    ///
    /// The value of the greatest boundary `<= key`, or the base value when
    /// no boundary lies at or below `key`. Total over the key space.
    pub fn lookup(&self, key: &K) -> &V {
        self.boundaries
            .range(..=key)
            .next_back()
            .map(|(_, value)| value)
            .unwrap_or(&self.base)
    }

    /// Value assigned below the first boundary
    pub fn base(&self) -> &V {
        &self.base
    }

    /// Number of stored boundaries
    pub fn len(&self) -> usize {
        self.boundaries.len()
    }

    /// True when the store holds no boundaries (base value everywhere)
    pub fn is_empty(&self) -> bool {
        self.boundaries.is_empty()
    }

    /// Value active strictly before `key`
    fn value_before(&self, key: &K) -> &V {
        self.boundaries
            .range(..key)
            .next_back()
            .map(|(_, value)| value)
            .unwrap_or(&self.base)
    }

    pub(crate) fn boundaries(&self) -> &BTreeMap<K, V> {
        &self.boundaries
    }

    /// Build a store from raw parts without any canonical-form checks.
    #[cfg(test)]
    pub(crate) fn from_raw_parts(base: V, entries: impl IntoIterator<Item = (K, V)>) -> Self {
        Self {
            base,
            boundaries: entries.into_iter().collect(),
        }
    }
}
