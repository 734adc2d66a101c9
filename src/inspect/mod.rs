//! Read-only inspection of an interval store
//!
//! A [`Snapshot`] is the debug view of a store: the base value followed by
//! every boundary in key order. It renders as a console dump, hashes to a
//! fingerprint for cross-run comparison, and can audit the whole sequence
//! for canonical form. Nothing here feeds back into `assign`.

use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::store::IntervalStore;

/// Ordered view of a store's base value and boundaries
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Snapshot<'a, K, V> {
    base: &'a V,
    boundaries: Vec<(&'a K, &'a V)>,
}

/// First place a boundary sequence breaks canonical form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanonicalViolation {
    /// The first boundary restates the base value
    FirstRestatesBase,
    /// Boundary at `index` restates the value of boundary `index - 1`
    AdjacentDuplicate {
        /// Position in the boundary sequence
        index: usize,
    },
}

impl fmt::Display for CanonicalViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CanonicalViolation::FirstRestatesBase => {
                write!(f, "first boundary restates the base value")
            }
            CanonicalViolation::AdjacentDuplicate { index } => {
                write!(f, "boundary {} restates the value of boundary {}", index, index - 1)
            }
        }
    }
}

impl<K: Ord, V> IntervalStore<K, V> {
    /// Capture the current base value and boundaries in key order
    pub fn snapshot(&self) -> Snapshot<'_, K, V> {
        Snapshot {
            base: self.base(),
            boundaries: self.boundaries().iter().collect(),
        }
    }
}

impl<'a, K, V> Snapshot<'a, K, V> {
    /// Base value of the captured store
    pub fn base(&self) -> &'a V {
        self.base
    }

    /// Boundaries in increasing key order
    pub fn boundaries(&self) -> &[(&'a K, &'a V)] {
        &self.boundaries
    }
}

impl<'a, K, V: PartialEq> Snapshot<'a, K, V> {
    /// Check the whole sequence for canonical form
    ///
    /// Returns the first violation found, scanning from the base value.
    pub fn audit(&self) -> Result<(), CanonicalViolation> {
        let mut previous = self.base;
        for (index, (_, value)) in self.boundaries.iter().enumerate() {
            if *value == previous {
                return Err(if index == 0 {
                    CanonicalViolation::FirstRestatesBase
                } else {
                    CanonicalViolation::AdjacentDuplicate { index }
                });
            }
            previous = *value;
        }
        Ok(())
    }
}

impl<'a, K: fmt::Display, V: fmt::Display> Snapshot<'a, K, V> {
    /// BLAKE3 hash of the rendered dump, hex encoded
    pub fn fingerprint(&self) -> String {
        blake3::hash(self.to_string().as_bytes()).to_hex().to_string()
    }
}

impl<'a, K: fmt::Display, V: fmt::Display> fmt::Display for Snapshot<'a, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "base = {}", self.base)?;
        for (key, value) in &self.boundaries {
            writeln!(f, "[{}] = {}", key, value)?;
        }
        Ok(())
    }
}
