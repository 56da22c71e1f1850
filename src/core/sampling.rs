//! Sources of randomness for the simulator.
//!
//! Every draw the simulator makes goes through [`SampleSource`], so a run can
//! be seeded for reproducibility or scripted draw-by-draw in tests.

use super::errors::{SimError, SimResult};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use std::collections::VecDeque;

pub trait SampleSource {
    /// Draw from a normal distribution with the given mean and standard deviation.
    fn normal(&mut self, mean: f64, std_dev: f64) -> SimResult<f64>;

    /// Draw an integer uniformly from `low..=high`.
    fn uniform_inclusive(&mut self, low: i64, high: i64) -> SimResult<i64>;
}

/// Seedable source backed by `StdRng`.
#[derive(Debug, Clone)]
pub struct StdRngSource {
    rng: StdRng,
}

impl StdRngSource {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl SampleSource for StdRngSource {
    fn normal(&mut self, mean: f64, std_dev: f64) -> SimResult<f64> {
        let normal =
            Normal::new(mean, std_dev).map_err(|e| SimError::Distribution(e.to_string()))?;
        Ok(normal.sample(&mut self.rng))
    }

    fn uniform_inclusive(&mut self, low: i64, high: i64) -> SimResult<i64> {
        if low > high {
            return Err(SimError::Distribution(format!(
                "empty range {}..={}",
                low, high
            )));
        }
        Ok(self.rng.gen_range(low..=high))
    }
}

/// Replays pre-recorded draws in order, ignoring distribution parameters.
///
/// Integer draws are checked against the requested range so a script that
/// drifts out of step with the simulator fails loudly.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    normals: VecDeque<f64>,
    integers: VecDeque<i64>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_normals(mut self, draws: impl IntoIterator<Item = f64>) -> Self {
        self.normals.extend(draws);
        self
    }

    pub fn with_integers(mut self, draws: impl IntoIterator<Item = i64>) -> Self {
        self.integers.extend(draws);
        self
    }
}

impl SampleSource for ScriptedSource {
    fn normal(&mut self, _mean: f64, _std_dev: f64) -> SimResult<f64> {
        self.normals
            .pop_front()
            .ok_or(SimError::ScriptExhausted("normal"))
    }

    fn uniform_inclusive(&mut self, low: i64, high: i64) -> SimResult<i64> {
        let draw = self
            .integers
            .pop_front()
            .ok_or(SimError::ScriptExhausted("integer"))?;
        if draw < low || draw > high {
            return Err(SimError::Distribution(format!(
                "scripted draw {} outside {}..={}",
                draw, low, high
            )));
        }
        Ok(draw)
    }
}
