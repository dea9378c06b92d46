use super::config::SimulationConfig;
use super::error::Result;
use super::flowfield::FlowField;
use super::forcemodel::ForceModel;
use super::timemanager::TimeManager;
use super::trajectory::Trajectory;
use crate::units::*;
use cgmath::EuclideanSpace;
use microprofile::scope;
use rayon::prelude::*;

/// Integrates the motion of a single particle with semi-implicit (symplectic) Euler.
///
/// Each call to `run` is a pure function of the config: no state is kept between runs.
pub struct Simulator {
    force_model: ForceModel,
}

impl Simulator {
    pub fn new(force_model: ForceModel) -> Simulator {
        Simulator { force_model }
    }

    pub fn force_model(&self) -> &ForceModel {
        &self.force_model
    }

    /// Simulates the full duration of `config` and returns the trajectory.
    ///
    /// Fails only on invalid configuration. Numerical blow-ups are not caught, they show up as NaN/inf in the result.
    pub fn run(&self, config: &SimulationConfig) -> Result<Trajectory> {
        microprofile::scope!("Simulator", "run");
        self.force_model.constants().validate()?;
        config.validate()?;

        let stability_timestep = self.force_model.stability_timestep(&config.particle);
        if config.timestep > stability_timestep {
            log::warn!(
                "'{}': timestep {}s exceeds the explicit Euler stability limit of ~{:.4}s, expect oscillation",
                config.label,
                config.timestep,
                stability_timestep
            );
        }

        let mut time_manager = TimeManager::new(config.timestep, config.duration);
        let mut trajectory = Trajectory::with_capacity(time_manager.num_steps());
        let dt = time_manager.timestep();

        let mut v = Velocity::new(config.initial_velocity);
        let mut y = Position::origin();

        while !time_manager.is_finished() {
            let t = time_manager.passed_time();
            let v_fluid = config.flow.fluid_velocity(t);
            let forces = self.force_model.compute(&config.particle, v, v_fluid);

            // Newton's second law, F_net = m * a
            let a = forces.accelleration();

            // Position uses the already updated velocity.
            v += a * dt;
            y += v * dt;

            trajectory.push(t, v, y);
            time_manager.update_time();
        }

        log::debug!(
            "'{}': {} steps, final velocity {:?}, final position {:?}",
            config.label,
            trajectory.len(),
            trajectory.last_velocity(),
            trajectory.last_position()
        );
        Ok(trajectory)
    }

    /// Runs independent scenarios in parallel. Results are in the order of `configs`.
    ///
    /// An invalid config only fails its own entry.
    pub fn run_batch(&self, configs: &[SimulationConfig]) -> Vec<Result<Trajectory>> {
        microprofile::scope!("Simulator", "run_batch");
        configs.par_iter().map(|config| self.run(config)).collect()
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Simulator::new(ForceModel::default())
    }
}
