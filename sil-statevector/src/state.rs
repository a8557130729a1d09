//! Vetor de estado de n qubits

use std::ops::Index;

use num_complex::Complex64;
use tracing::trace;

use crate::config::StateConfig;
use crate::error::{QuantumError, QuantumResult};
use crate::expansion;
use crate::gates::Gate;
use crate::numeric::{abs_squared, euclidean_norm, exact_log2, squared_norm};
use crate::operator::Operator;

/// Estado quântico puro de `n` qubits
///
/// Invariantes, checados na construção e após composição:
/// - o comprimento do vetor é potência de dois;
/// - Σ|aᵢ|² = 1 dentro da tolerância configurada.
///
/// O qubit `k` ocupa o bit `n − 1 − k` do índice (qubit 0 = bit mais
/// significativo).
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    /// Amplitudes na base computacional
    pub(crate) amplitudes: Vec<Complex64>,
    /// Número de qubits (log2 do comprimento)
    pub(crate) qubit_count: usize,
}

impl State {
    /// Cria estado validando forma e normalização
    pub fn new(amplitudes: Vec<Complex64>) -> QuantumResult<Self> {
        Self::with_config(amplitudes, &StateConfig::default())
    }

    /// Cria estado com tolerâncias explícitas
    pub fn with_config(amplitudes: Vec<Complex64>, config: &StateConfig) -> QuantumResult<Self> {
        let qubit_count = exact_log2(amplitudes.len()).ok_or_else(|| {
            QuantumError::InvalidState(format!(
                "statevector length {} is not a power of 2",
                amplitudes.len()
            ))
        })?;

        // NaN não falha `>`: precisa ser barrado antes
        let norm = squared_norm(&amplitudes);
        if !norm.is_finite() || (1.0 - norm).abs() > config.norm_tolerance {
            return Err(QuantumError::InvalidState(format!(
                "squared norm must be 1, got {norm}"
            )));
        }

        Ok(Self { amplitudes, qubit_count })
    }

    /// Cria a partir de amplitudes reais
    pub fn from_real(amplitudes: &[f64]) -> QuantumResult<Self> {
        Self::new(amplitudes.iter().map(|&x| Complex64::new(x, 0.0)).collect())
    }

    /// |0…0⟩ com `qubit_count` qubits
    ///
    /// # Panics
    ///
    /// Se `qubit_count >= usize::BITS` (2^n não cabe em `usize`). Na prática
    /// a memória acaba bem antes, por volta de 30 qubits.
    pub fn zero(qubit_count: usize) -> Self {
        assert!(
            qubit_count < usize::BITS as usize,
            "{qubit_count} qubits do not fit in a statevector"
        );
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); 1 << qubit_count];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Self { amplitudes, qubit_count }
    }

    /// Número de qubits
    pub fn qubit_count(&self) -> usize {
        self.qubit_count
    }

    /// Dimensão do espaço (2^n)
    pub fn dimension(&self) -> usize {
        self.amplitudes.len()
    }

    /// Visão somente leitura das amplitudes
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Consome o estado e devolve as amplitudes
    pub fn into_amplitudes(self) -> Vec<Complex64> {
        self.amplitudes
    }

    /// Norma euclidiana atual
    pub fn norm(&self) -> f64 {
        euclidean_norm(&self.amplitudes)
    }

    /// Probabilidade de cada estado da base
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|&z| abs_squared(z)).collect()
    }

    /// Falha se `index` não for um qubit deste estado
    pub(crate) fn check_index(&self, index: usize) -> QuantumResult<()> {
        if index >= self.qubit_count {
            return Err(QuantumError::IndexOutOfRange {
                index,
                qubits: self.qubit_count,
            });
        }
        Ok(())
    }

    /// Aplica uma porta embutida de um qubit
    pub fn apply_gate(&mut self, gate: Gate, index: usize) -> QuantumResult<()> {
        trace!(gate = gate.name(), index, qubits = self.qubit_count, "apply gate");
        self.apply_unitary(&gate.operator(), index)
    }

    /// Aplica uma unitária 2×2 arbitrária (já validada) ao qubit `index`
    pub fn apply_unitary(&mut self, operator: &Operator, index: usize) -> QuantumResult<()> {
        if operator.dim() != 2 {
            return Err(QuantumError::shape(2, operator.dim(), operator.dim()));
        }
        self.check_index(index)?;

        let full = expansion::expand_single(operator.matrix(), index, self.qubit_count);
        self.amplitudes = full.apply(&self.amplitudes);
        Ok(())
    }

    /// CNOT com controle `control` e alvo `target`
    pub fn apply_cnot(&mut self, control: usize, target: usize) -> QuantumResult<()> {
        self.check_index(control)?;
        self.check_index(target)?;
        if control == target {
            return Err(QuantumError::IdenticalIndices(control));
        }

        trace!(control, target, qubits = self.qubit_count, "apply CNOT");
        self.amplitudes = expansion::apply_cnot(&self.amplitudes, control, target, self.qubit_count);
        Ok(())
    }

    /// Pauli-X no qubit `index`
    pub fn x(&mut self, index: usize) -> QuantumResult<()> {
        self.apply_gate(Gate::X, index)
    }

    /// Pauli-Z no qubit `index`
    pub fn z(&mut self, index: usize) -> QuantumResult<()> {
        self.apply_gate(Gate::Z, index)
    }

    /// Hadamard no qubit `index`
    pub fn h(&mut self, index: usize) -> QuantumResult<()> {
        self.apply_gate(Gate::H, index)
    }
}

impl Index<usize> for State {
    type Output = Complex64;

    fn index(&self, basis: usize) -> &Complex64 {
        &self.amplitudes[basis]
    }
}
