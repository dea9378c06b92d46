use criterion::{black_box, criterion_group, Criterion};

use buoy1d::sim::*;

fn bench_simulator(c: &mut Criterion) {
    let simulator = Simulator::default();

    let config = black_box(
        SimulationConfig::new(scenarios::light_particle(), FlowType::variable())
            .with_initial_velocity(-1.0)
            .with_duration(5.0),
    );
    c.bench_function(
        &format!("Simulator.run, {} steps", TimeManager::num_steps_for(config.timestep, config.duration)),
        |b| b.iter(|| simulator.run(&config)),
    );

    // many long runs so that the parallel batch has something to chew on
    let configs: Vec<SimulationConfig> = scenarios::flow_comparison()
        .into_iter()
        .cycle()
        .take(64)
        .map(|config| config.with_duration(50.0))
        .collect();
    c.bench_function(&format!("Simulator.run_batch, {} scenarios", configs.len()), |b| {
        b.iter(|| simulator.run_batch(&configs))
    });
}

fn config() -> Criterion {
    Criterion::default().warm_up_time(core::time::Duration::new(0, 1000))
}

criterion_group!(
    name = simulator;
    config = config();
    targets = bench_simulator
);
