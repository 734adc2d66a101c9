//! Stress harness configuration
//!
//! Defaults reproduce the classic soak run:
//! - 3500 rounds
//! - keys drawn from [-150, 150]
//! - values drawn from printable ASCII ('!' ..= '~')

use super::HarnessError;

/// Parameters for a randomized stress run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StressConfig {
    /// Number of assignment rounds
    pub rounds: usize,

    /// Smallest key sampled (inclusive)
    pub key_min: i64,

    /// Largest key sampled (inclusive)
    pub key_max: i64,

    /// Smallest value sampled (inclusive)
    pub value_min: char,

    /// Largest value sampled (inclusive)
    pub value_max: char,

    /// RNG seed; a fresh one is drawn when unset
    pub seed: Option<u64>,
}

impl Default for StressConfig {
    fn default() -> Self {
        Self {
            rounds: 3500,
            key_min: -150,
            key_max: 150,
            value_min: '!',
            value_max: '~',
            seed: None,
        }
    }
}

impl StressConfig {
    /// Fix the RNG seed so the run can be reproduced
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Override the number of rounds
    pub fn with_rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds;
        self
    }

    /// Override the sampled key range
    pub fn with_key_range(mut self, key_min: i64, key_max: i64) -> Self {
        self.key_min = key_min;
        self.key_max = key_max;
        self
    }

    /// Override the sampled value range
    pub fn with_value_range(mut self, value_min: char, value_max: char) -> Self {
        self.value_min = value_min;
        self.value_max = value_max;
        self
    }

    /// Reject empty sampling ranges
    pub fn validate(&self) -> Result<(), HarnessError> {
        if self.key_min > self.key_max {
            return Err(HarnessError::InvalidConfig(format!(
                "key range [{}, {}] is empty",
                self.key_min, self.key_max
            )));
        }
        if self.value_min > self.value_max {
            return Err(HarnessError::InvalidConfig(format!(
                "value range ['{}', '{}'] is empty",
                self.value_min, self.value_max
            )));
        }
        Ok(())
    }
}
