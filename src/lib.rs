//! # Piecewise-Constant Interval Store
//!
//! A total mapping from an ordered key space to values that stores only the
//! keys where the value changes. Painting a range costs O(log n + k) and the
//! store never holds more entries than there are value changes.
//!
//! ## Canonical Form
//!
//! 1. **Base value**: every key below the first boundary maps to `base`
//! 2. **Boundaries**: `(k, v)` maps `[k, next boundary)` to `v`
//! 3. **No redundancy**: adjacent boundaries differ, and the first
//!    boundary differs from `base`
//!
//! Exactly one representation exists for each mapping, so two stores built
//! from the same assignments compare equal.
//!
//! ## Usage Example
//!
//! ```
//! use stepmap::IntervalStore;
//!
//! let mut store = IntervalStore::new('x');
//! store.assign(1, 5, 'A')?;
//! assert_eq!(*store.lookup(&0), 'x');
//! assert_eq!(*store.lookup(&4), 'A');
//! assert_eq!(*store.lookup(&5), 'x');
//! # Ok::<(), stepmap::AssignError>(())
//! ```
//!
//! ## Concurrency
//!
//! `lookup` takes `&self` and `assign` takes `&mut self`; share a store
//! across threads behind a lock of your choice.

#![warn(missing_docs, missing_debug_implementations)]

pub mod store;    // Canonical store, lookup and assign
pub mod inspect;  // Debug snapshots and canonical-form audit
pub mod harness;  // Seeded randomized stress driver
pub mod replay;   // Assignment scripts

// Re-exports for convenience
pub use store::{AssignError, Edge, IntervalStore};
pub use inspect::{CanonicalViolation, Snapshot};
pub use harness::{run_stress, HarnessError, StressConfig, StressHarness, StressReport};
pub use replay::{apply_script, ReplayError, ReplaySummary};
