//! # Measurement Benchmarks
//!
//! Measures marginal probability and full measurement. The RNG comes from
//! `config::rng()`, so `SIL_STATEVECTOR_SEED` makes runs reproducible.
//!
//! Run: `cargo bench --bench measurement_bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use sil_statevector::{config, State};

/// Uniform superposition over `n` qubits, built with H on every qubit
fn uniform(n: usize) -> State {
    let mut state = State::zero(n);
    for q in 0..n {
        state.h(q).unwrap();
    }
    state
}

/// Benchmark marginal probabilities
fn bench_marginal(c: &mut Criterion) {
    let mut group = c.benchmark_group("marginal_probabilities");

    for qubits in [2usize, 6, 10] {
        let state = uniform(qubits);
        group.bench_with_input(
            BenchmarkId::new("qubit_0", qubits),
            &state,
            |b, s| {
                b.iter(|| {
                    black_box(s.marginal_probabilities(0).unwrap())
                })
            }
        );
    }

    group.finish();
}

/// Benchmark measurement on a fresh copy of the state
fn bench_measure(c: &mut Criterion) {
    let mut group = c.benchmark_group("measure");
    let mut rng = config::rng();

    for qubits in [2usize, 6, 10] {
        let state = uniform(qubits);
        group.bench_with_input(
            BenchmarkId::new("measure_middle", qubits),
            &state,
            |b, s| {
                b.iter(|| {
                    let mut copy = s.clone();
                    black_box(copy.measure(qubits / 2, &mut rng).unwrap())
                })
            }
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_marginal,
    bench_measure,
);

criterion_main!(benches);
