use criterion::{criterion_group, criterion_main, Criterion};

use twophase::cubie::CubieCube;
use twophase::moves::Move::*;
use twophase::scramble::random_state;
use twophase::solver::{default_solver, solve};

fn cc_apply_moves() {
    let cc = CubieCube::default();
    let _ = cc.apply_moves(&[R, U, R3, U3]);
}

fn cc_multi_moves() {
    let mut cc = CubieCube::default();
    cc.multiply_moves(&[R, U, R3, U3]);
}

fn bench_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("CubieCube Moves");
    group.bench_function("multiply_moves", |b| b.iter(cc_multi_moves));
    group.bench_function("apply_moves", |b| b.iter(cc_apply_moves));
    group.finish();
}

fn bench_solver(c: &mut Criterion) {
    // build the tables outside of the measurement
    let solver = default_solver();
    c.bench_function("Solver", |b| {
        b.iter(|| solve("RLLBUFUUUBDURRBBUBRLRRFDFDDLLLUDFLRRDDFRLFDBUBFFLBBDUF", 22).unwrap())
    });
    c.bench_function("Solver random state", |b| {
        b.iter(|| solver.solve(&random_state(), 22).unwrap())
    });
}

criterion_group!(benches, bench_solver, bench_moves);
criterion_main!(benches);
