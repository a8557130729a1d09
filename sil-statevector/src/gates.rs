//! # Portas embutidas
//!
//! Conjunto fechado de portas com matrizes conhecidas. Qualquer outra
//! unitária entra pelo caminho validado de [`Operator`].
//!
//! ```text
//! X = | 0  1 |    Z = | 1  0 |    H = 1/√2 | 1  1 |
//!     | 1  0 |        | 0 -1 |             | 1 -1 |
//!
//! CNOT = | 1 0 0 0 |   (controle = qubit mais significativo)
//!        | 0 1 0 0 |
//!        | 0 0 0 1 |
//!        | 0 0 1 0 |
//! ```

use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_1_SQRT_2;
use std::fmt;

use crate::matrix::ComplexMatrix;
use crate::operator::Operator;

/// Porta embutida
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gate {
    /// Pauli-X (bit flip)
    X,
    /// Pauli-Z (phase flip)
    Z,
    /// Hadamard
    H,
    /// NOT controlado
    Cnot,
}

impl Gate {
    /// Portas de um qubit
    pub const SINGLE_QUBIT: [Gate; 3] = [Gate::X, Gate::Z, Gate::H];

    /// Nome curto
    pub fn name(&self) -> &'static str {
        match self {
            Self::X => "X",
            Self::Z => "Z",
            Self::H => "H",
            Self::Cnot => "CNOT",
        }
    }

    /// Número de qubits em que atua
    pub fn arity(&self) -> usize {
        match self {
            Self::X | Self::Z | Self::H => 1,
            Self::Cnot => 2,
        }
    }

    /// Matriz da porta
    pub fn matrix(&self) -> ComplexMatrix {
        match self {
            Self::X => ComplexMatrix::from_real_elements(2, &[0.0, 1.0, 1.0, 0.0]),
            Self::Z => ComplexMatrix::from_real_elements(2, &[1.0, 0.0, 0.0, -1.0]),
            Self::H => ComplexMatrix::from_real_elements(2, &[1.0, 1.0, 1.0, -1.0]).scale(FRAC_1_SQRT_2),
            Self::Cnot => ComplexMatrix::from_real_elements(
                4,
                &[
                    1.0, 0.0, 0.0, 0.0,
                    0.0, 1.0, 0.0, 0.0,
                    0.0, 0.0, 0.0, 1.0,
                    0.0, 0.0, 1.0, 0.0,
                ],
            ),
        }
    }

    /// Operador já validado
    pub fn operator(&self) -> Operator {
        Operator::trusted(self.matrix())
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
