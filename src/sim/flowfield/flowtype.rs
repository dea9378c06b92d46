use super::FlowField;
use crate::sim::error::{ensure_finite, Result};
use crate::units::*;
use cgmath::Zero;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// The flow profiles a scenario can pick from.
///
/// Selected once per scenario. Each variant carries exactly the parameters it needs,
/// `Static` is the same as `Uniform` at zero speed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum FlowType {
    // Resting fluid.
    Static,

    // Constant velocity in m/s, independent of time.
    Uniform { velocity: Real },

    // Sinusoidal oscillation: amplitude * sin(2π * frequency * t)
    Variable {
        amplitude: Real, // m/s
        frequency: Real, // Hz
    },
}

impl FlowType {
    pub const VARIABLE_AMPLITUDE: Real = 0.2;
    pub const VARIABLE_FREQUENCY: Real = 1.0;

    pub fn uniform(velocity: Real) -> FlowType {
        FlowType::Uniform { velocity }
    }

    /// Sinusoidal flow with 0.2 m/s amplitude at 1 Hz.
    pub fn variable() -> FlowType {
        FlowType::Variable {
            amplitude: Self::VARIABLE_AMPLITUDE,
            frequency: Self::VARIABLE_FREQUENCY,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FlowType::Static => "static",
            FlowType::Uniform { .. } => "uniform",
            FlowType::Variable { .. } => "variable",
        }
    }

    pub fn validate(&self) -> Result<()> {
        match *self {
            FlowType::Static => Ok(()),
            FlowType::Uniform { velocity } => ensure_finite("flow velocity", velocity),
            FlowType::Variable { amplitude, frequency } => {
                ensure_finite("flow amplitude", amplitude)?;
                ensure_finite("flow frequency", frequency)
            }
        }
    }
}

impl Default for FlowType {
    fn default() -> Self {
        FlowType::Static
    }
}

impl FlowField for FlowType {
    #[inline]
    fn fluid_velocity(&self, t: Real) -> Velocity {
        match *self {
            FlowType::Static => Velocity::zero(),
            FlowType::Uniform { velocity } => Velocity::new(velocity),
            FlowType::Variable { amplitude, frequency } => Velocity::new(amplitude * (2.0 * PI * frequency * t).sin()),
        }
    }
}
