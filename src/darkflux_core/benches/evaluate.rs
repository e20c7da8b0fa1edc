extern crate criterion;
use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use darkflux_core::flux::CHANNEL_REGISTRY;
use darkflux_core::prelude::*;
use lazy_static::lazy_static;
use pprof::criterion::{Output, PProfProfiler};

lazy_static! {
    /// Yield table over 10 masses and 100 log10(x) values, in the layout of the PPPC
    /// tables.
    static ref TABLE: FluxTable = {
        let header = ["mDM", "Log[10,x]"]
            .into_iter()
            .chain(CHANNEL_REGISTRY.iter().map(|(_, column)| *column))
            .collect::<Vec<_>>()
            .join(" ");
        let mut lines = vec![header];
        for mass_idx in 0..10 {
            let mass = 10_f64.powf(1.0 + 0.5 * mass_idx as f64);
            for x_idx in 0..100 {
                let log10x = -9.0 + 0.09 * x_idx as f64;
                let yields = (0..CHANNEL_REGISTRY.len())
                    .map(|idx| format!("{:?}", (idx + 1) as f64 * (log10x + 9.5).powi(2)))
                    .collect::<Vec<_>>()
                    .join(" ");
                lines.push(format!("{:?} {:?} {}", mass, log10x, yields));
            }
        }
        lines.join("\n").parse().unwrap()
    };
    static ref ENERGIES: Vec<Quantity> = (0..1000)
        .map(|idx| Quantity::gev(10_f64.powf(-2.0 + 0.006 * idx as f64)))
        .collect();
}

fn annihilation(mass: f64) -> DarkMatterAnnihilationSpectralModel {
    let jfactor: Quantity = "3.41e19 GeV2 cm-5".parse().unwrap();
    DarkMatterAnnihilationSpectralModel::from_table(
        &TABLE,
        &Quantity::gev(mass),
        "b",
        Annihilation::default(),
    )
    .unwrap()
    .with_jfactor(jfactor)
}

pub fn construct(c: &mut Criterion) {
    let mut group = c.benchmark_group("Construct");
    for channel in ["b", "tau", "W"] {
        group.bench_with_input(BenchmarkId::new("PrimaryFlux", channel), channel, |b, ch| {
            b.iter(|| PrimaryFlux::from_table(&TABLE, &Quantity::gev(500.0), black_box(ch)).unwrap())
        });
    }
}

pub fn evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("Evaluate");
    for mass in [50.0, 5000.0] {
        let model = annihilation(mass);
        group.bench_with_input(BenchmarkId::new("Many", mass), &model, |b, m| {
            b.iter(|| m.evaluate_many(black_box(&ENERGIES), 1.0).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("Integral", mass), &model, |b, m| {
            b.iter(|| {
                m.integral(black_box(&Quantity::gev(1.0)), &Quantity::gev(mass))
                    .unwrap()
            })
        });
    }
}

criterion_group!(name=benches;
                 config = Criterion::default().sample_size(30).measurement_time(Duration::from_secs(5)).with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
                 targets=evaluate, construct);
criterion_main!(benches);
