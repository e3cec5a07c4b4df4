//! Progress sources for generation runs.
//!
//! The workflow state machine only asks a [`ProgressSource`] for the
//! next increment; where that number comes from is pluggable. The app
//! uses [`SimulatedProgress`], which draws uniform random increments.
//! A real document generator would report its own progress through the
//! same trait.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::{WorkflowConfig, WorkflowError};

/// Trait for anything that reports generation progress in steps.
///
/// Output: the number of percentage points to advance on this tick.
/// The workflow clamps the running total to 100 and treats a zero
/// increment as 1, so a source cannot stall or overshoot a run.
pub trait ProgressSource {
    /// Percentage points to advance on the next tick.
    fn next_increment(&mut self) -> u8;
}

/// Uniform random increments within an inclusive range.
#[derive(Debug, Clone)]
pub struct SimulatedProgress<R = StdRng> {
    rng: R,
    min: u8,
    max: u8,
}

impl SimulatedProgress<StdRng> {
    /// Seed from OS entropy (`crypto.getRandomValues` on WASM).
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::InvalidConfig`] if the configured
    /// increment range is invalid.
    pub fn from_entropy(config: &WorkflowConfig) -> Result<Self, WorkflowError> {
        Self::with_rng(StdRng::from_entropy(), config)
    }

    /// Reproducible increments for tests and demos.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::InvalidConfig`] if the configured
    /// increment range is invalid.
    pub fn seeded(seed: u64, config: &WorkflowConfig) -> Result<Self, WorkflowError> {
        Self::with_rng(StdRng::seed_from_u64(seed), config)
    }
}

impl<R: Rng> SimulatedProgress<R> {
    /// Draw increments from `rng` using the config's increment range.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::InvalidConfig`] if the configured
    /// increment range is invalid.
    pub fn with_rng(rng: R, config: &WorkflowConfig) -> Result<Self, WorkflowError> {
        config.validate()?;
        Ok(Self {
            rng,
            min: config.increment_min,
            max: config.increment_max,
        })
    }
}

impl<R: Rng> ProgressSource for SimulatedProgress<R> {
    fn next_increment(&mut self) -> u8 {
        self.rng.gen_range(self.min..=self.max)
    }
}

/// A constant increment on every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedStep(pub u8);

impl ProgressSource for FixedStep {
    fn next_increment(&mut self) -> u8 {
        self.0
    }
}

impl<S: ProgressSource + ?Sized> ProgressSource for &mut S {
    fn next_increment(&mut self) -> u8 {
        (**self).next_increment()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn simulated_increments_stay_in_range() {
        let config = WorkflowConfig::default();
        let mut source = SimulatedProgress::seeded(7, &config).unwrap();
        for _ in 0..1_000 {
            let inc = source.next_increment();
            assert!(
                (config.increment_min..=config.increment_max).contains(&inc),
                "increment {inc} outside {}..={}",
                config.increment_min,
                config.increment_max,
            );
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let config = WorkflowConfig::default();
        let mut a = SimulatedProgress::seeded(42, &config).unwrap();
        let mut b = SimulatedProgress::seeded(42, &config).unwrap();
        let seq_a: Vec<u8> = (0..20).map(|_| a.next_increment()).collect();
        let seq_b: Vec<u8> = (0..20).map(|_| b.next_increment()).collect();
        assert_eq!(seq_a, seq_b);
    }

    #[test]
    fn degenerate_range_is_constant() {
        let config = WorkflowConfig {
            increment_min: 10,
            increment_max: 10,
            ..WorkflowConfig::default()
        };
        let mut source = SimulatedProgress::seeded(1, &config).unwrap();
        assert!((0..10).all(|_| source.next_increment() == 10));
    }

    #[test]
    fn invalid_range_is_rejected() {
        let config = WorkflowConfig {
            increment_min: 0,
            ..WorkflowConfig::default()
        };
        assert!(matches!(
            SimulatedProgress::seeded(1, &config),
            Err(WorkflowError::InvalidConfig(_))
        ));
    }

    #[test]
    fn fixed_step_repeats() {
        let mut source = FixedStep(25);
        assert_eq!(source.next_increment(), 25);
        assert_eq!(source.next_increment(), 25);
    }
}
