use crate::units::*;

// All timing values in seconds
//
// Fixed time grid 0, dt, 2dt, ... strictly below the duration (half open range).
// Sample times are computed as step * dt instead of accumulating dt, so no rounding error builds up over long runs.
pub struct TimeManager {
    step: usize,
    num_steps: usize,
    timestep: Real,
}

impl TimeManager {
    // Upper bound for the number of steps of a single run. Keeps the trajectory allocation sane.
    pub const MAX_NUM_STEPS: Real = 1.0e8;

    pub fn new(timestep: Real, duration: Real) -> TimeManager {
        TimeManager {
            step: 0,
            num_steps: Self::num_steps_for(timestep, duration),
            timestep,
        }
    }

    // ⌈duration / timestep⌉ as a float, may be infinite or NaN for degenerate input
    pub fn step_ratio(timestep: Real, duration: Real) -> Real {
        (duration / timestep).ceil()
    }

    // ⌈duration / timestep⌉, zero for degenerate input.
    // Callers are expected to reject ratios above MAX_NUM_STEPS beforehand.
    pub fn num_steps_for(timestep: Real, duration: Real) -> usize {
        let num_steps = Self::step_ratio(timestep, duration);
        if num_steps.is_finite() && num_steps > 0.0 {
            num_steps.min(Self::MAX_NUM_STEPS) as usize
        } else {
            0
        }
    }

    // how much physical time has passed in the simulation, i.e. time of the current sample
    pub fn passed_time(&self) -> Real {
        self.step as Real * self.timestep
    }

    pub fn timestep(&self) -> Real {
        self.timestep
    }

    pub fn num_steps(&self) -> usize {
        self.num_steps
    }

    pub fn is_finished(&self) -> bool {
        self.step >= self.num_steps
    }

    // advances to the next sample
    pub(super) fn update_time(&mut self) {
        self.step += 1;
    }
}
