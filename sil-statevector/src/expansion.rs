//! # Expansão de operadores para o espaço de n qubits
//!
//! Convenção de índices: o qubit `k` de um registrador de `n` qubits ocupa o
//! bit `n − 1 − k` do índice da base (bit 0 = menos significativo). O qubit 0
//! é portanto o bit mais significativo e o fator mais à esquerda de qualquer
//! produto de Kronecker.
//!
//! ```text
//! n = 3, índice 6 = 0b110
//!        qubit:  0 1 2
//!        bit:    1 1 0   → |110⟩
//! ```
//!
//! ## Computational Complexity
//!
//! **Single-qubit lift — O(4^n):** materializa `I ⊗ … ⊗ U ⊗ … ⊗ I`
//! (2^n × 2^n) e multiplica pelo vetor. Aceitável só para n pequeno.
//!
//! **CNOT — O(2^n):** uma passada sobre a base com buffer auxiliar.

use num_complex::Complex64;

use crate::matrix::ComplexMatrix;

/// Posição do bit que guarda o qubit `index`
#[inline]
pub fn bit_position(index: usize, qubit_count: usize) -> usize {
    qubit_count - 1 - index
}

/// Valor (0/1) do qubit `index` no estado da base `basis`
#[inline]
pub fn qubit_value(basis: usize, index: usize, qubit_count: usize) -> u8 {
    ((basis >> bit_position(index, qubit_count)) & 1) as u8
}

/// Eleva uma porta 2×2 para 2^n × 2^n
///
/// Produto de Kronecker iterado sobre todas as posições, com `gate` na
/// posição de `index` e I₂ nas demais.
pub fn expand_single(gate: &ComplexMatrix, index: usize, qubit_count: usize) -> ComplexMatrix {
    debug_assert_eq!(gate.dim(), 2);
    debug_assert!(index < qubit_count);

    let identity = ComplexMatrix::identity(2);
    let factor = |position: usize| if position == index { gate } else { &identity };

    let mut operator = factor(0).clone();
    for position in 1..qubit_count {
        operator = operator.kron(factor(position));
    }
    operator
}

/// Índice de destino de `basis` sob CNOT, ou o próprio índice se o controle é 0
#[inline]
pub fn cnot_destination(basis: usize, control: usize, target: usize, qubit_count: usize) -> usize {
    if qubit_value(basis, control, qubit_count) == 1 {
        basis ^ (1 << bit_position(target, qubit_count))
    } else {
        basis
    }
}

/// Aplica CNOT por manipulação de bits
///
/// Os destinos acumulam (`+=`) em vez de sobrescrever; como o mapa é uma
/// involução, cada destino recebe exatamente uma contribuição.
pub fn apply_cnot(
    amplitudes: &[Complex64],
    control: usize,
    target: usize,
    qubit_count: usize,
) -> Vec<Complex64> {
    debug_assert!(control != target);

    let mut out = vec![Complex64::new(0.0, 0.0); amplitudes.len()];
    for (basis, &amplitude) in amplitudes.iter().enumerate() {
        out[cnot_destination(basis, control, target, qubit_count)] += amplitude;
    }
    out
}
