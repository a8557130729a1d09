//! # Gate Benchmarks
//!
//! Measures single-qubit gate application (full operator lift, O(4^n)) against
//! CNOT (basis permutation, O(2^n)) as the register grows.
//!
//! Run: `cargo bench --bench gate_bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use sil_statevector::expansion::expand_single;
use sil_statevector::{Gate, State};

/// Benchmark single-qubit gates through the Kronecker lift
fn bench_single_qubit(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_qubit_gate");

    for qubits in [2usize, 4, 6, 8] {
        group.bench_with_input(
            BenchmarkId::new("hadamard", qubits),
            &qubits,
            |b, &n| {
                let mut state = State::zero(n);
                b.iter(|| {
                    state.h(n / 2).unwrap();
                    black_box(state.amplitudes()[0])
                })
            }
        );
    }

    group.finish();
}

/// Benchmark operator materialisation alone
fn bench_expansion(c: &mut Criterion) {
    let mut group = c.benchmark_group("expand_single");
    let x = Gate::X.matrix();

    for qubits in [2usize, 4, 6, 8] {
        group.bench_with_input(
            BenchmarkId::new("pauli_x", qubits),
            &qubits,
            |b, &n| {
                b.iter(|| {
                    black_box(expand_single(&x, 0, n))
                })
            }
        );
    }

    group.finish();
}

/// Benchmark CNOT
fn bench_cnot(c: &mut Criterion) {
    let mut group = c.benchmark_group("cnot");

    for qubits in [2usize, 4, 8, 12, 16] {
        group.bench_with_input(
            BenchmarkId::new("cnot_0_last", qubits),
            &qubits,
            |b, &n| {
                let mut state = State::zero(n);
                state.h(0).unwrap();
                b.iter(|| {
                    state.apply_cnot(0, n - 1).unwrap();
                    black_box(state.amplitudes()[0])
                })
            }
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_single_qubit,
    bench_expansion,
    bench_cnot,
);

criterion_main!(benches);
