//! Fixed-rate physics stepping decoupled from display refresh.

use crate::constants::{MAX_SUBSTEPS, PHYSICS_HZ};
use std::time::Duration;

// Absorbs float drift when frame time is an exact multiple of the step.
const EPSILON_SEC: f64 = 1e-9;

#[derive(Clone, Debug)]
pub struct FixedTimestep {
    step_sec: f64,
    max_steps: u32,
    accum: f64,
}

impl Default for FixedTimestep {
    fn default() -> Self {
        Self::new(PHYSICS_HZ, MAX_SUBSTEPS)
    }
}

impl FixedTimestep {
    pub fn new(hz: f64, max_steps: u32) -> Self {
        Self {
            step_sec: 1.0 / hz,
            max_steps,
            accum: 0.0,
        }
    }

    /// Add elapsed frame time and return how many whole steps to run now.
    /// Time beyond `max_steps` steps is dropped rather than carried over.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        self.accum += dt.as_secs_f64();
        let mut steps = 0;
        while self.accum + EPSILON_SEC >= self.step_sec {
            self.accum -= self.step_sec;
            steps += 1;
            if steps == self.max_steps {
                self.accum = 0.0;
                break;
            }
        }
        self.accum = self.accum.max(0.0);
        steps
    }

    pub fn reset(&mut self) {
        self.accum = 0.0;
    }
}
