//! # Composition Benchmarks
//!
//! Measures tensor-product composition of single qubits into registers.
//!
//! Run: `cargo bench --bench compose_bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use sil_statevector::{Complex64, State};

/// Benchmark from_qubits with n single-qubit parts
fn bench_from_qubits(c: &mut Criterion) {
    let mut group = c.benchmark_group("from_qubits");
    let plus = [Complex64::new(0.6, 0.0), Complex64::new(0.0, 0.8)];

    for qubits in [2usize, 6, 10, 14] {
        group.bench_with_input(
            BenchmarkId::new("single_qubit_parts", qubits),
            &qubits,
            |b, &n| {
                b.iter(|| {
                    black_box(State::from_qubits(std::iter::repeat_n(plus, n)).unwrap())
                })
            }
        );
    }

    group.finish();
}

/// Benchmark tensor of two registers
fn bench_tensor(c: &mut Criterion) {
    let mut group = c.benchmark_group("tensor");

    for qubits in [2usize, 5, 8] {
        let left = State::zero(qubits);
        let right = State::zero(qubits);
        group.bench_function(BenchmarkId::new("equal_halves", qubits), |b| {
            b.iter(|| {
                black_box(left.tensor(&right))
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_from_qubits,
    bench_tensor,
);

criterion_main!(benches);
