//! Injectable uniform randomness for gap placement

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Uniform real-number generator over a closed interval
pub trait UniformSource {
    /// Sample from `[lo, hi]`. An empty or inverted range yields `lo`.
    fn uniform(&mut self, lo: f32, hi: f32) -> f32;
}

impl UniformSource for Pcg32 {
    fn uniform(&mut self, lo: f32, hi: f32) -> f32 {
        if empty_range(lo, hi) {
            return lo;
        }
        self.random_range(lo..=hi)
    }
}

/// True for inverted, degenerate or NaN bounds
fn empty_range(lo: f32, hi: f32) -> bool {
    lo.is_nan() || hi.is_nan() || hi <= lo
}

/// Seeded default source
pub fn seeded(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}

/// Replays a fixed list of values, clamped into the requested range
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    values: Vec<f32>,
    next: usize,
}

impl ScriptedSource {
    pub fn new(values: Vec<f32>) -> Self {
        Self {
            values,
            next: 0,
        }
    }
}

impl UniformSource for ScriptedSource {
    fn uniform(&mut self, lo: f32, hi: f32) -> f32 {
        if self.values.is_empty() || empty_range(lo, hi) {
            return lo;
        }
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value.clamp(lo, hi)
    }
}
