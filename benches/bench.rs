use criterion::{criterion_group, criterion_main, Criterion};
use torus_life::utils::generate_config;
use torus_life::Grid;

const N: usize = 1 << 9;
const SEED: u64 = 42;
const FILL_RATE: f64 = 0.3;

fn random_grid() -> Grid {
    let lines = generate_config(N, N, FILL_RATE, Some(SEED)).unwrap();
    Grid::from_lines(&lines).unwrap()
}

fn bench_sequential(c: &mut Criterion) {
    let mut grid = random_grid();
    c.bench_function("sequential", |b| b.iter(|| grid.advance(1)));
}

fn bench_concurrent<const K: usize>(c: &mut Criterion) {
    let mut grid = random_grid();
    c.bench_function(&format!("concurrent_{}", K), |b| {
        b.iter(|| grid.advance_concurrent(1, K).unwrap())
    });
}

fn bench_construction(c: &mut Criterion) {
    let lines = generate_config(N, N, FILL_RATE, Some(SEED)).unwrap();
    c.bench_function("construction", |b| b.iter(|| Grid::from_lines(&lines).unwrap()));
}

criterion_group!(
    benches,
    bench_sequential,
    bench_concurrent<2>,
    bench_concurrent<4>,
    bench_concurrent<8>,
    bench_construction,
);
criterion_main!(benches);
