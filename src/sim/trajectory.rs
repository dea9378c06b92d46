use crate::units::*;

/// Time series of a single simulated particle.
///
/// The three sequences are indexed in lockstep, one entry per simulation step.
/// Filled by the simulator, read-only afterwards.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Trajectory {
    times: Vec<Real>,
    velocities: Vec<Velocity>,
    positions: Vec<Position>,
}

impl Trajectory {
    pub(super) fn with_capacity(num_steps: usize) -> Trajectory {
        Trajectory {
            times: Vec::with_capacity(num_steps),
            velocities: Vec::with_capacity(num_steps),
            positions: Vec::with_capacity(num_steps),
        }
    }

    pub(super) fn push(&mut self, t: Real, velocity: Velocity, position: Position) {
        self.times.push(t);
        self.velocities.push(velocity);
        self.positions.push(position);
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn times(&self) -> &[Real] {
        &self.times
    }

    pub fn velocities(&self) -> &[Velocity] {
        &self.velocities
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    // plain scalars for plotting
    pub fn velocity_values(&self) -> impl Iterator<Item = Real> + '_ {
        self.velocities.iter().map(|v| v.x)
    }

    pub fn position_values(&self) -> impl Iterator<Item = Real> + '_ {
        self.positions.iter().map(|p| p.x)
    }

    pub fn last_velocity(&self) -> Option<Velocity> {
        self.velocities.last().copied()
    }

    pub fn last_position(&self) -> Option<Position> {
        self.positions.last().copied()
    }

    // true if the integration blew up somewhere (invalid physical setup or far too large timestep)
    pub fn has_non_finite(&self) -> bool {
        self.velocities.iter().any(|v| !v.x.is_finite()) || self.positions.iter().any(|p| !p.x.is_finite())
    }
}
