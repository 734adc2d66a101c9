//! Randomized stress harness
//!
//! Drives a store with random assignments and checks after every round:
//! - the value at `end` is unchanged
//! - the value at `begin` is the assigned value (or unchanged for an
//!   empty range)
//! - the boundary sequence is still canonical
//!
//! Rejected assignments are counted and the round skipped.

mod config;

pub use config::StressConfig;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
#[cfg(feature = "serde")]
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::inspect::CanonicalViolation;
use crate::store::IntervalStore;

/// Post-condition checked after each successful assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Property {
    /// `lookup(end)` is unchanged
    RightEdge,
    /// `lookup(begin)` is the assigned value (unchanged for empty ranges)
    LeftEdge,
}

/// Errors raised by the stress harness
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HarnessError {
    /// Configuration cannot be sampled from
    #[error("Invalid stress configuration: {0}")]
    InvalidConfig(String),

    /// An edge post-condition failed
    #[error("Post-condition {property:?} failed in round {round} (seed {seed})")]
    PostCondition {
        /// Round that failed
        round: usize,
        /// Seed that reproduces the run
        seed: u64,
        /// Failed check
        property: Property,
    },

    /// The store lost canonical form
    #[error("Store not canonical after round {round} (seed {seed}): {violation}")]
    NonCanonical {
        /// Round that failed
        round: usize,
        /// Seed that reproduces the run
        seed: u64,
        /// First violation found
        violation: CanonicalViolation,
    },
}

/// Summary of a completed stress run
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct StressReport {
    /// Seed used for sampling
    pub seed: u64,
    /// Base value the store was created with
    pub base: char,
    /// Rounds executed
    pub rounds: usize,
    /// Non-empty assignments that succeeded
    pub applied: usize,
    /// Assignments the store refused
    pub rejected: usize,
    /// Empty ranges (no-ops)
    pub empty: usize,
    /// Boundaries stored at the end of the run
    pub boundaries: usize,
    /// Fingerprint of the final store
    pub fingerprint: String,
}

/// Seeded random driver over an `IntervalStore<i64, char>`
#[derive(Debug)]
pub struct StressHarness {
    config: StressConfig,
    seed: u64,
    rng: StdRng,
    store: IntervalStore<i64, char>,
}

impl StressHarness {
    /// Create a harness; the base value is the first sample drawn
    pub fn new(config: StressConfig) -> Result<Self, HarnessError> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);
        let base = rng.gen_range(config.value_min..=config.value_max);

        Ok(Self {
            config,
            seed,
            rng,
            store: IntervalStore::new(base),
        })
    }

    /// Seed driving this run
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Store under test
    pub fn store(&self) -> &IntervalStore<i64, char> {
        &self.store
    }

    /// Execute all configured rounds
    pub fn run(&mut self) -> Result<StressReport, HarnessError> {
        let mut applied = 0;
        let mut rejected = 0;
        let mut empty = 0;

        for round in 0..self.config.rounds {
            let begin = self.rng.gen_range(self.config.key_min..=self.config.key_max);
            let end = self.rng.gen_range(self.config.key_min..=self.config.key_max);
            let value = self.rng.gen_range(self.config.value_min..=self.config.value_max);

            let begin_before = *self.store.lookup(&begin);
            let end_before = *self.store.lookup(&end);

            if let Err(err) = self.store.assign(begin, end, value) {
                debug!(round, begin, end, %value, %err, "assignment rejected");
                rejected += 1;
                continue;
            }

            let expected_begin = if begin < end {
                applied += 1;
                value
            } else {
                empty += 1;
                begin_before
            };

            if *self.store.lookup(&end) != end_before {
                return Err(self.fail(round, Property::RightEdge));
            }
            if *self.store.lookup(&begin) != expected_begin {
                return Err(self.fail(round, Property::LeftEdge));
            }
            if let Err(violation) = self.store.snapshot().audit() {
                warn!(round, seed = self.seed, %violation, "store lost canonical form");
                return Err(HarnessError::NonCanonical {
                    round,
                    seed: self.seed,
                    violation,
                });
            }
        }

        let report = StressReport {
            seed: self.seed,
            base: *self.store.base(),
            rounds: self.config.rounds,
            applied,
            rejected,
            empty,
            boundaries: self.store.len(),
            fingerprint: self.store.snapshot().fingerprint(),
        };

        info!(
            seed = report.seed,
            applied = report.applied,
            rejected = report.rejected,
            empty = report.empty,
            boundaries = report.boundaries,
            "stress run complete"
        );

        Ok(report)
    }

    fn fail(&self, round: usize, property: Property) -> HarnessError {
        warn!(round, seed = self.seed, ?property, "post-condition failed");
        HarnessError::PostCondition {
            round,
            seed: self.seed,
            property,
        }
    }
}

/// Build a harness from `config` and run it to completion
pub fn run_stress(config: StressConfig) -> Result<StressReport, HarnessError> {
    StressHarness::new(config)?.run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_run_passes() {
        let report = run_stress(StressConfig::default().with_seed(42)).unwrap();
        assert_eq!(report.rounds, 3500);
        assert_eq!(
            report.applied + report.rejected + report.empty,
            report.rounds
        );
    }

    #[test]
    fn test_same_seed_same_report() {
        let config = StressConfig::default().with_seed(1234).with_rounds(500);
        let first = run_stress(config.clone()).unwrap();
        let second = run_stress(config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_single_key_range_only_produces_empty_rounds() {
        let config = StressConfig::default()
            .with_seed(3)
            .with_rounds(50)
            .with_key_range(7, 7);
        let report = run_stress(config).unwrap();
        assert_eq!(report.empty, 50);
        assert_eq!(report.boundaries, 0);
    }

    #[test]
    fn test_single_value_alphabet_is_always_rejected() {
        let config = StressConfig::default()
            .with_seed(9)
            .with_rounds(200)
            .with_value_range('q', 'q');
        let mut harness = StressHarness::new(config).unwrap();
        let report = harness.run().unwrap();
        assert_eq!(report.applied, 0);
        assert_eq!(report.rejected + report.empty, 200);
        assert!(harness.store().is_empty());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = StressConfig::default().with_key_range(1, 0);
        assert!(matches!(
            StressHarness::new(config),
            Err(HarnessError::InvalidConfig(_))
        ));
    }
}
