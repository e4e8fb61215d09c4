//! Growth increments applied on every vote.

use rand::Rng;

/// Largest growth bump a single vote can give.
pub const MAX_GROWTH_STEP: f64 = 5.0;

/// Supplies the growth increment for each recorded vote
///
/// Implementations should return values in `(0, MAX_GROWTH_STEP]`; the store
/// clamps anything outside that range.
pub trait GrowthSource: Send {
    fn next_increment(&mut self) -> f64;
}

/// Uniform random increments in `(0, MAX_GROWTH_STEP]`
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomGrowth;

impl GrowthSource for RandomGrowth {
    fn next_increment(&mut self) -> f64 {
        // random_range is half-open at the top, flip it so zero is excluded
        MAX_GROWTH_STEP - rand::rng().random_range(0.0..MAX_GROWTH_STEP)
    }
}

/// Deterministic increments for tests and replayable demos
///
/// Cycles through the given steps; an empty list always yields the maximum.
#[derive(Debug, Clone)]
pub struct FixedGrowth {
    steps: Vec<f64>,
    cursor: usize,
}

impl FixedGrowth {
    pub fn new(steps: Vec<f64>) -> Self {
        Self { steps, cursor: 0 }
    }

    pub fn constant(step: f64) -> Self {
        Self::new(vec![step])
    }
}

impl GrowthSource for FixedGrowth {
    fn next_increment(&mut self) -> f64 {
        if self.steps.is_empty() {
            return MAX_GROWTH_STEP;
        }
        let step = self.steps[self.cursor % self.steps.len()];
        self.cursor += 1;
        step
    }
}
