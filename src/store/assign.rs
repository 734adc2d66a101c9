//! Interval assignment
//!
//! Painting `[begin, end)` with a value touches the boundary sequence at
//! three places only:
//! 1. boundaries inside `[begin, end)` are overwritten and dropped
//! 2. `begin` gets a boundary unless the value before it already matches
//! 3. `end` gets a boundary restoring the old value unless that value
//!    matches, in which case the painted range merges with its successor

use std::ops::Bound;

use tracing::{debug, trace};

use super::{AssignError, Edge, IntervalStore};

impl<K: Ord, V: Eq + Clone> IntervalStore<K, V> {
    /// Assign `value` to every key in `[begin, end)`
    ///
    /// Keys outside the range keep their values. An empty range
    /// (`!(begin < end)`) is a no-op. On error nothing is modified.
    ///
    /// Cost: O(log n + k) for k boundaries inside the range.
    pub fn assign(&mut self, begin: K, end: K, value: V) -> Result<(), AssignError> {
        if !(begin < end) {
            return Ok(());
        }

        if self.boundaries.is_empty() && value == self.base {
            debug!("rejected assignment restating the base value of an empty store");
            return Err(AssignError::RedundantBaseAssignment);
        }

        self.check_edge(&begin, Edge::Begin)?;
        self.check_edge(&end, Edge::End)?;

        // Value just past the range, read before anything moves
        let tail = self.lookup(&end).clone();

        // [begin, ..) is detached, [end, ..) reattached; [begin, end) drops
        let mut overwritten = self.boundaries.split_off(&begin);
        let mut rest = overwritten.split_off(&end);
        self.boundaries.append(&mut rest);

        let needs_begin = *self.value_before(&begin) != value;

        if tail != value {
            self.boundaries.insert(end, tail);
        } else {
            self.boundaries.remove(&end);
        }

        if needs_begin {
            self.boundaries.insert(begin, value);
        }

        trace!(
            dropped = overwritten.len(),
            boundaries = self.boundaries.len(),
            "assignment applied"
        );

        Ok(())
    }

    /// Verify the entry nearest `anchor` differs from the value before it.
    ///
    /// At `Begin` this is the last boundary below `begin`; at `End` it is
    /// the first boundary above `end`. Those are the entries the painted
    /// range may end up adjacent to.
    fn check_edge(&self, anchor: &K, edge: Edge) -> Result<(), AssignError> {
        let neighbour = match edge {
            Edge::Begin => self.boundaries.range(..anchor).next_back(),
            Edge::End => self
                .boundaries
                .range::<K, _>((Bound::Excluded(anchor), Bound::Unbounded))
                .next(),
        };

        match neighbour {
            Some((key, value)) if self.value_before(key) == value => {
                debug!(%edge, "rejected assignment into a non-canonical store");
                Err(AssignError::PrecedingInputInvariantViolation { edge })
            }
            _ => Ok(()),
        }
    }
}
