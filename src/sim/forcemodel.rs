use super::constants::PhysicalConstants;
use super::particle::ParticleSpec;
use crate::units::*;
use cgmath::Zero;

/// Forces acting on a particle at one instant, not yet combined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Forces {
    pub buoyancy: Force, // buoyancy minus weight, positive is up
    pub drag: Force,     // points along the relative velocity, subtract it to get resistance
    pub mass: Real,      // kg
}

impl Forces {
    // Net force: weight is already part of buoyancy via the density difference.
    #[inline]
    pub fn net(&self) -> Force {
        self.buoyancy - self.drag
    }

    #[inline]
    pub fn accelleration(&self) -> Vector {
        self.net() / self.mass
    }
}

/// Buoyancy and quadratic (turbulent regime) sphere drag.
#[derive(Debug, Clone, Copy)]
pub struct ForceModel {
    constants: PhysicalConstants,
}

impl ForceModel {
    pub fn new(constants: PhysicalConstants) -> ForceModel {
        ForceModel { constants }
    }

    pub fn constants(&self) -> &PhysicalConstants {
        &self.constants
    }

    // Fb = (ρ_fluid - ρ_particle) * V * g
    pub fn buoyancy(&self, particle: &ParticleSpec) -> Force {
        Force::new((self.constants.fluid_density - particle.density) * particle.volume() * self.constants.gravity)
    }

    // 0.5 * Cd * ρ_fluid * A, the factor in front of v_rel * |v_rel|
    fn drag_factor(&self, particle: &ParticleSpec) -> Real {
        0.5 * self.constants.drag_coefficient * self.constants.fluid_density * particle.cross_section_area()
    }

    /// Computes buoyancy, drag and mass for particle velocity `v` in fluid moving with `v_fluid`.
    ///
    /// Drag is `0.5 * Cd * ρ * A * v_rel * |v_rel|`, i.e. `v_rel²` signed like `v_rel`.
    /// It vanishes exactly for `v_rel == 0`.
    #[inline]
    pub fn compute(&self, particle: &ParticleSpec, v: Velocity, v_fluid: Velocity) -> Forces {
        let relative_velocity = v - v_fluid;
        Forces {
            buoyancy: self.buoyancy(particle),
            drag: relative_velocity * (self.drag_factor(particle) * relative_velocity.x.abs()),
            mass: particle.mass(),
        }
    }

    /// Velocity at which drag balances buoyancy in fluid moving with `v_fluid`.
    pub fn terminal_velocity(&self, particle: &ParticleSpec, v_fluid: Velocity) -> Velocity {
        let buoyancy = self.buoyancy(particle).x;
        if buoyancy == 0.0 {
            return v_fluid;
        }
        let relative_speed = (buoyancy.abs() / self.drag_factor(particle)).sqrt();
        v_fluid + Velocity::new(relative_speed.copysign(buoyancy))
    }

    /// Largest timestep for which explicit Euler does not oscillate around the terminal velocity.
    ///
    /// Linearizes the accelleration around the terminal state: |da/dv| = 2 * k * |v_rel| / m.
    /// Returns infinity if there is no restoring force there (neutrally buoyant particle).
    pub fn stability_timestep(&self, particle: &ParticleSpec) -> Real {
        let terminal_relative_speed = self.terminal_velocity(particle, Velocity::zero()).x.abs();
        let stiffness = 2.0 * self.drag_factor(particle) * terminal_relative_speed / particle.mass();
        if stiffness > 0.0 {
            2.0 / stiffness
        } else {
            Real::INFINITY
        }
    }
}

impl Default for ForceModel {
    fn default() -> Self {
        ForceModel::new(PhysicalConstants::water())
    }
}
