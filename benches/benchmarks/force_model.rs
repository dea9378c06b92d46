use criterion::{black_box, criterion_group, Criterion};

use buoy1d::sim::*;
use buoy1d::units::*;

fn bench_force_model(c: &mut Criterion) {
    let model = black_box(ForceModel::default());
    let particle = black_box(scenarios::light_particle());
    let v = black_box(Velocity::new(-0.7));
    let v_fluid = black_box(Velocity::new(0.5));

    c.bench_function("ForceModel.compute", |b| b.iter(|| model.compute(&particle, v, v_fluid)));
    c.bench_function("ForceModel.terminal_velocity", |b| b.iter(|| model.terminal_velocity(&particle, v_fluid)));

    let flow = black_box(FlowType::variable());
    c.bench_function("FlowType::Variable.fluid_velocity", |b| b.iter(|| flow.fluid_velocity(black_box(1.234))));
}

fn config() -> Criterion {
    Criterion::default()
        .warm_up_time(core::time::Duration::new(0, 100))
        .sample_size(1000)
        .significance_level(0.1)
}

criterion_group!(
    name = force_model;
    config = config();
    targets = bench_force_model
);
