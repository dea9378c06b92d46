pub use self::config::{scenarios, SimulationConfig};
pub use self::constants::PhysicalConstants;
pub use self::error::ConfigError;
pub use self::flowfield::*;
pub use self::forcemodel::{ForceModel, Forces};
pub use self::particle::ParticleSpec;
pub use self::simulator::Simulator;
pub use self::timemanager::TimeManager;
pub use self::trajectory::Trajectory;

pub mod config;
mod constants;
mod error;
mod flowfield;
mod forcemodel;
mod particle;
mod simulator;
mod timemanager;
mod trajectory;
