use super::error::{ensure_positive, Result};
use crate::units::*;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// A spherical particle. Volume, mass and cross section are derived on every call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParticleSpec {
    pub density: Real, // kg/m³ (ρ, rho)
    pub radius: Real,  // m
}

impl ParticleSpec {
    pub fn new(density: Real, radius: Real) -> ParticleSpec {
        ParticleSpec { density, radius }
    }

    pub fn volume(&self) -> Real {
        4.0 / 3.0 * PI * self.radius.powi(3)
    }

    pub fn mass(&self) -> Real {
        self.density * self.volume()
    }

    // projected area facing the flow
    pub fn cross_section_area(&self) -> Real {
        PI * self.radius * self.radius
    }

    pub fn validate(&self) -> Result<()> {
        ensure_positive("density", self.density)?;
        ensure_positive("radius", self.radius)
    }
}

impl Default for ParticleSpec {
    fn default() -> Self {
        ParticleSpec::new(800.0, 0.01)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn derived_quantities() {
        let particle = ParticleSpec::new(800.0, 0.01);
        assert_relative_eq!(particle.volume(), 4.188_790_204_786_391e-6, max_relative = 1e-12);
        assert_relative_eq!(particle.mass(), 800.0 * particle.volume());
        assert_relative_eq!(particle.cross_section_area(), 3.141_592_653_589_793e-4, max_relative = 1e-12);
    }

    #[test]
    fn validation_names_offending_field() {
        assert!(ParticleSpec::default().validate().is_ok());
        let err = ParticleSpec::new(1000.0, -0.01).validate().unwrap_err();
        assert_eq!(err.to_string(), "radius must be strictly positive, got -0.01");
        let err = ParticleSpec::new(0.0, 0.01).validate().unwrap_err();
        assert_eq!(err.to_string(), "density must be strictly positive, got 0");
    }
}
