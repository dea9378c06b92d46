use std::path::{Path, PathBuf};
use std::time::Instant;

use buoy1d::sim::*;
use buoy1d::units::*;
use cgmath::Zero;
use thiserror::Error;

use microprofile;

#[derive(Debug, Error)]
enum AppError {
    #[error("could not read scenario file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse scenario file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("usage: buoy1d [scenarios.json]")]
    Usage,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    microprofile::init!();
    microprofile::set_enable_all_groups!(true);

    if let Err(err) = run() {
        log::error!("{}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let batches = match args.as_slice() {
        [] => vec![
            ("Particles with different densities in water", scenarios::density_comparison()),
            ("Particles in static, uniform and variable flow", scenarios::flow_comparison()),
        ],
        [path] => vec![("Scenario file", load_scenarios(Path::new(path))?)],
        _ => return Err(AppError::Usage),
    };

    let simulator = Simulator::default();
    for (title, configs) in batches {
        log::info!("{} ({} runs)", title, configs.len());
        let start = Instant::now();
        let results = simulator.run_batch(&configs);
        microprofile::flip!();

        for (config, result) in configs.iter().zip(results) {
            match result {
                Ok(trajectory) => report(&simulator, config, &trajectory),
                Err(err) => log::error!("'{}': invalid configuration: {}", config.label, err),
            }
        }
        log::info!("batch done in {:.2}ms", start.elapsed().as_secs_f64() * 1000.0);
    }
    Ok(())
}

fn load_scenarios(path: &Path) -> Result<Vec<SimulationConfig>, AppError> {
    let content = std::fs::read_to_string(path).map_err(|source| AppError::Io {
        path: path.to_owned(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| AppError::Json {
        path: path.to_owned(),
        source,
    })
}

fn report(simulator: &Simulator, config: &SimulationConfig, trajectory: &Trajectory) {
    let final_velocity = trajectory.last_velocity().unwrap_or_else(Velocity::zero).x;
    let final_position = trajectory.last_position().map(|p| p.x).unwrap_or(0.0);

    // terminal velocity only makes sense for time independent flows
    let terminal = match config.flow {
        FlowType::Variable { .. } => None,
        flow => Some(
            simulator
                .force_model()
                .terminal_velocity(&config.particle, flow.fluid_velocity(0.0))
                .x,
        ),
    };

    log::info!(
        "  {:<40} steps {:4} | v(end) {:+.4} m/s | y(end) {:+.4} m | terminal {}",
        config.label,
        trajectory.len(),
        final_velocity,
        final_position,
        terminal.map_or_else(|| "-".to_owned(), |v: Real| format!("{:+.4} m/s", v)),
    );
    if trajectory.has_non_finite() {
        log::warn!("  '{}' diverged (non-finite values), timestep too large for this particle?", config.label);
    }
}
