//! Criterion benchmarks for the leapfrog kernel and a full solve.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use fdm_travelwave::{wave_step, FieldSpec, Problem};

macro_rules! bench_step {
    ($c:ident, $(($name:expr, $n:expr))+) => {
        $(
        {
            let n = $n;
            let u = vec![1.; n];
            let v = vec![2.; n];
            let h = vec![0.8; n];
            let mut w = vec![1.; n];
            let lambda = 0.5;

            $c.bench_function($name, |b| {
                b.iter(|| {
                    wave_step(&u, black_box(&v), &mut w, &h, lambda);
                });
            });
        }
        )+
    }
}

fn bench_wave_step(c: &mut Criterion) {
    bench_step!{c,
                ("wave_step_301", 301)
                ("wave_step_4097", 4097)
                ("wave_step_65537", 65537)
                }
}

/// The demo run: 301 points, 1000 steps.
fn bench_solve_demo(c: &mut Criterion) {
    let problem = Problem::new(300, 1000, 100., 52.)
        .seabed(FieldSpec::sampled(|x| (-(x - 60f64).powi(2) / 10.).exp()))
        .displacement(FieldSpec::sampled(|x| 1.3 + 2. * (-(x - 15f64).powi(2) / 15.).exp()))
        .velocity(0.);

    c.bench_function("solve_demo", |b| {
        b.iter(|| black_box(problem.solve().unwrap()));
    });
}

criterion_group!(benches, bench_wave_step, bench_solve_demo);
criterion_main!(benches);
