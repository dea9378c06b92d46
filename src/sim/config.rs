use super::error::{ensure_finite, ensure_positive, Result};
use super::flowfield::FlowType;
use super::particle::ParticleSpec;
use super::timemanager::TimeManager;
use super::error::ConfigError;
use crate::units::*;
use serde::{Deserialize, Serialize};

/// Everything needed for a single particle run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub label: String, // only used for reporting
    pub particle: ParticleSpec,
    pub flow: FlowType,
    pub initial_velocity: Real, // m/s, positive is up. Initial position is always 0.
    pub timestep: Real,         // dt in seconds. Needs to be well below the relaxation time of the particle.
    pub duration: Real,         // t_max in seconds
}

impl SimulationConfig {
    pub const DEFAULT_TIMESTEP: Real = 0.01;
    pub const DEFAULT_DURATION: Real = 5.0;

    pub fn new(particle: ParticleSpec, flow: FlowType) -> SimulationConfig {
        SimulationConfig {
            particle,
            flow,
            ..Default::default()
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_initial_velocity(mut self, initial_velocity: Real) -> Self {
        self.initial_velocity = initial_velocity;
        self
    }

    pub fn with_timestep(mut self, timestep: Real) -> Self {
        self.timestep = timestep;
        self
    }

    pub fn with_duration(mut self, duration: Real) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_flow(mut self, flow: FlowType) -> Self {
        self.flow = flow;
        self
    }

    /// Rejects input that can't describe a physical setup, before any simulation work is done.
    pub fn validate(&self) -> Result<()> {
        self.particle.validate()?;
        self.flow.validate()?;
        ensure_finite("initial_velocity", self.initial_velocity)?;
        ensure_positive("timestep", self.timestep)?;
        ensure_positive("duration", self.duration)?;

        let steps = TimeManager::step_ratio(self.timestep, self.duration);
        if steps.is_finite() && steps <= TimeManager::MAX_NUM_STEPS {
            Ok(())
        } else {
            Err(ConfigError::TooManySteps {
                steps,
                max: TimeManager::MAX_NUM_STEPS,
            })
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            label: String::new(),
            particle: ParticleSpec::default(),
            flow: FlowType::Static,
            initial_velocity: 0.0,
            timestep: Self::DEFAULT_TIMESTEP,
            duration: Self::DEFAULT_DURATION,
        }
    }
}

/// Reference scenario sets: a light (bubble-like) and a heavy particle in water.
pub mod scenarios {
    use super::*;

    pub const LIGHT_DENSITY: Real = 800.0;
    pub const HEAVY_DENSITY: Real = 1200.0;
    pub const RADIUS: Real = 0.01;
    pub const UNIFORM_FLOW_SPEED: Real = 0.5;
    pub const FLOW_COMPARISON_INITIAL_VELOCITY: Real = -1.0;

    pub fn light_particle() -> ParticleSpec {
        ParticleSpec::new(LIGHT_DENSITY, RADIUS)
    }

    pub fn heavy_particle() -> ParticleSpec {
        ParticleSpec::new(HEAVY_DENSITY, RADIUS)
    }

    /// Both particles released from rest in static water.
    pub fn density_comparison() -> Vec<SimulationConfig> {
        vec![
            SimulationConfig::new(light_particle(), FlowType::Static).with_label("light particle (density 800)"),
            SimulationConfig::new(heavy_particle(), FlowType::Static).with_label("heavy particle (density 1200)"),
        ]
    }

    /// Both particles thrown downwards at 1 m/s into static, uniform and variable flow.
    ///
    /// In uniform flow the light particle gets an upward, the heavy one a downward stream.
    pub fn flow_comparison() -> Vec<SimulationConfig> {
        let light = |flow: FlowType| {
            let name = flow.name();
            SimulationConfig::new(light_particle(), flow)
                .with_initial_velocity(FLOW_COMPARISON_INITIAL_VELOCITY)
                .with_label(format!("light particle - {} flow", name))
        };
        let heavy = |flow: FlowType| {
            let name = flow.name();
            SimulationConfig::new(heavy_particle(), flow)
                .with_initial_velocity(FLOW_COMPARISON_INITIAL_VELOCITY)
                .with_label(format!("heavy particle - {} flow", name))
        };
        vec![
            light(FlowType::Static),
            heavy(FlowType::Static),
            light(FlowType::uniform(UNIFORM_FLOW_SPEED)),
            heavy(FlowType::uniform(-UNIFORM_FLOW_SPEED)),
            light(FlowType::variable()),
            heavy(FlowType::variable()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::ConfigError;

    #[test]
    fn defaults() {
        let config = SimulationConfig::default();
        assert_eq!(config.timestep, 0.01);
        assert_eq!(config.duration, 5.0);
        assert_eq!(config.initial_velocity, 0.0);
        assert_eq!(config.flow, FlowType::Static);
        assert_eq!(config.particle, ParticleSpec::new(800.0, 0.01));
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn validation_rejects_each_field() {
        let base = SimulationConfig::default();
        assert_eq!(
            base.clone().with_timestep(0.0).validate(),
            Err(ConfigError::NonPositive { field: "timestep", value: 0.0 })
        );
        assert_eq!(
            base.clone().with_duration(-1.0).validate(),
            Err(ConfigError::NonPositive { field: "duration", value: -1.0 })
        );
        assert!(matches!(
            base.clone().with_initial_velocity(Real::NAN).validate(),
            Err(ConfigError::NonFinite { field: "initial_velocity", .. })
        ));
        assert!(matches!(
            base.clone().with_flow(FlowType::uniform(Real::INFINITY)).validate(),
            Err(ConfigError::NonFinite { field: "flow velocity", .. })
        ));

        assert_eq!(
            base.clone().with_timestep(1.0e-300).with_duration(1.0e300).validate(),
            Err(ConfigError::TooManySteps {
                steps: Real::INFINITY,
                max: 1.0e8
            })
        );
        assert!(matches!(
            base.clone().with_timestep(1.0e-10).with_duration(1.0e10).validate(),
            Err(ConfigError::TooManySteps { steps, .. }) if steps.is_finite() && steps > 1.0e19
        ));
        // right at the limit is still fine
        assert_eq!(base.clone().with_timestep(1.0).with_duration(1.0e8).validate(), Ok(()));

        let mut config = base;
        config.particle.radius = 0.0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositive { field: "radius", value: 0.0 })
        );
    }

    #[test]
    fn reference_scenarios() {
        let densities = scenarios::density_comparison();
        assert_eq!(densities.len(), 2);
        assert!(densities.iter().all(|c| c.initial_velocity == 0.0 && c.flow == FlowType::Static));

        let flows = scenarios::flow_comparison();
        assert_eq!(flows.len(), 6);
        assert!(flows.iter().all(|c| c.initial_velocity == -1.0 && c.validate().is_ok()));
        assert_eq!(flows[2].flow, FlowType::uniform(0.5));
        assert_eq!(flows[3].flow, FlowType::uniform(-0.5));
        assert_eq!(flows[4].flow, FlowType::variable());
        assert_eq!(flows[0].label, "light particle - static flow");
        assert_eq!(flows[3].label, "heavy particle - uniform flow");
    }

    #[test]
    fn deserializes_partial_json() {
        let config: SimulationConfig = serde_json::from_str(
            r#"{
                "label": "sinker",
                "particle": { "density": 1200.0, "radius": 0.02 },
                "flow": { "kind": "Variable", "amplitude": 0.1, "frequency": 2.0 },
                "initial_velocity": -1.0
            }"#,
        )
        .unwrap();
        assert_eq!(config.label, "sinker");
        assert_eq!(config.particle, ParticleSpec::new(1200.0, 0.02));
        assert_eq!(
            config.flow,
            FlowType::Variable {
                amplitude: 0.1,
                frequency: 2.0
            }
        );
        assert_eq!(config.timestep, SimulationConfig::DEFAULT_TIMESTEP);
        assert_eq!(config.duration, SimulationConfig::DEFAULT_DURATION);
    }
}
