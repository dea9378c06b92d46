use super::error::{ensure_positive, Result};
use crate::units::*;
use serde::{Deserialize, Serialize};

/// Physical constants shared by all force evaluations of a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicalConstants {
    pub gravity: Real,          // gravitational accelleration in m/s² (g)
    pub fluid_density: Real,    // kg/m³ of the surrounding fluid (ρ, rho)
    pub drag_coefficient: Real, // dimensionless, 0.47 for a sphere (Cd)
}

impl PhysicalConstants {
    pub const SPHERE_DRAG_COEFFICIENT: Real = 0.47;

    /// Water at room temperature under earth gravity.
    pub fn water() -> PhysicalConstants {
        PhysicalConstants {
            gravity: 9.81,
            fluid_density: 1000.0,
            drag_coefficient: Self::SPHERE_DRAG_COEFFICIENT,
        }
    }

    pub fn validate(&self) -> Result<()> {
        ensure_positive("gravity", self.gravity)?;
        ensure_positive("fluid_density", self.fluid_density)?;
        ensure_positive("drag_coefficient", self.drag_coefficient)
    }
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self::water()
    }
}
