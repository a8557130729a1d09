//! Operadores unitários validados

use num_complex::Complex64;

use crate::config::{self, StateConfig};
use crate::error::{QuantumError, QuantumResult};
use crate::matrix::ComplexMatrix;
use crate::numeric::exact_log2;

/// Matriz unitária 2^k × 2^k já validada
///
/// Construída uma vez por aplicação de porta; o `State` nunca a guarda.
#[derive(Clone, Debug, PartialEq)]
pub struct Operator {
    matrix: ComplexMatrix,
}

impl Operator {
    /// Valida com a tolerância de unitariedade do ambiente
    pub fn new(matrix: ComplexMatrix) -> QuantumResult<Self> {
        Self::with_tolerance(matrix, *config::UNITARY_TOLERANCE)
    }

    /// Valida com a tolerância de um [`StateConfig`]
    pub fn with_config(matrix: ComplexMatrix, config: &StateConfig) -> QuantumResult<Self> {
        Self::with_tolerance(matrix, config.unitary_tolerance)
    }

    /// Valida que a matriz é 2^k × 2^k e que U·U† ≈ I dentro de `tolerance`
    pub fn with_tolerance(matrix: ComplexMatrix, tolerance: f64) -> QuantumResult<Self> {
        let dim = matrix.dim();
        if exact_log2(dim).is_none() {
            return Err(QuantumError::shape(dim.next_power_of_two().max(1), dim, dim));
        }

        if !matrix.is_finite() {
            return Err(QuantumError::NotUnitary { deviation: f64::INFINITY });
        }

        let deviation = unitary_deviation(&matrix);
        if deviation > tolerance {
            return Err(QuantumError::NotUnitary { deviation });
        }

        Ok(Self { matrix })
    }

    /// Atalho: valida a partir de linhas
    pub fn from_rows(rows: Vec<Vec<Complex64>>) -> QuantumResult<Self> {
        Self::new(ComplexMatrix::from_rows(rows)?)
    }

    /// Portas embutidas têm matrizes conhecidas e pulam a validação
    pub(crate) fn trusted(matrix: ComplexMatrix) -> Self {
        debug_assert!(unitary_deviation(&matrix) < 1e-12);
        Self { matrix }
    }

    /// Matriz subjacente
    pub fn matrix(&self) -> &ComplexMatrix {
        &self.matrix
    }

    /// Consome o operador e devolve a matriz
    pub fn into_matrix(self) -> ComplexMatrix {
        self.matrix
    }

    /// Dimensão da matriz
    pub fn dim(&self) -> usize {
        self.matrix.dim()
    }

    /// Número de qubits sobre os quais atua
    pub fn qubit_count(&self) -> usize {
        self.matrix.dim().trailing_zeros() as usize
    }
}

/// max |U·U† − I|
pub fn unitary_deviation(matrix: &ComplexMatrix) -> f64 {
    matrix.mul(&matrix.dagger()).identity_deviation()
}

/// Verifica se a matriz é unitária dentro de `tolerance`
pub fn is_unitary(matrix: &ComplexMatrix, tolerance: f64) -> bool {
    unitary_deviation(matrix) <= tolerance
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_1_SQRT_2;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    #[test]
    fn test_accepts_unitary() {
        let s = Operator::from_rows(vec![vec![c(1.0, 0.0), c(0.0, 0.0)], vec![c(0.0, 0.0), c(0.0, 1.0)]]);
        assert!(s.is_ok());
        assert_eq!(s.unwrap().qubit_count(), 1);
    }

    #[test]
    fn test_accepts_rounded_hadamard() {
        // 0.70710678 arredondado ainda passa em 1e-5
        let h = 0.70710678;
        let op = Operator::from_rows(vec![vec![c(h, 0.0), c(h, 0.0)], vec![c(h, 0.0), c(-h, 0.0)]]);
        assert!(op.is_ok());
    }

    #[test]
    fn test_rejects_non_unitary() {
        let result = Operator::from_rows(vec![vec![c(1.0, 0.0), c(1.0, 0.0)], vec![c(0.0, 0.0), c(1.0, 0.0)]]);
        assert!(matches!(result, Err(QuantumError::NotUnitary { .. })));
    }

    #[test]
    fn test_rejects_non_finite() {
        let nan = c(f64::NAN, 0.0);
        let result = Operator::from_rows(vec![vec![nan, nan], vec![nan, nan]]);
        assert!(matches!(result, Err(QuantumError::NotUnitary { .. })));

        let inf = ComplexMatrix::from_real_rows(&[&[f64::INFINITY, 0.0], &[0.0, 1.0]]).unwrap();
        assert!(Operator::with_tolerance(inf, f64::MAX).is_err());
        assert!(!is_unitary(&ComplexMatrix::from_rows(vec![vec![nan]]).unwrap(), 1.0));
    }

    #[test]
    fn test_rejects_non_square() {
        let result = Operator::from_rows(vec![vec![c(1.0, 0.0), c(0.0, 0.0)]]);
        assert!(matches!(result, Err(QuantumError::ShapeMismatch { .. })));
    }

    #[test]
    fn test_rejects_non_power_of_two() {
        let result = Operator::new(ComplexMatrix::identity(3));
        assert!(matches!(result, Err(QuantumError::ShapeMismatch { expected: 4, .. })));
    }

    #[test]
    fn test_tolerance_is_respected() {
        let h = FRAC_1_SQRT_2 + 1e-3;
        let m = ComplexMatrix::from_real_rows(&[&[h, h], &[h, -h]]).unwrap();
        assert!(Operator::with_tolerance(m.clone(), 1e-5).is_err());
        assert!(Operator::with_tolerance(m, 1e-2).is_ok());
    }

    #[test]
    fn test_with_config() {
        let h = FRAC_1_SQRT_2 + 1e-7;
        let m = ComplexMatrix::from_real_rows(&[&[h, h], &[h, -h]]).unwrap();
        assert!(Operator::with_config(m.clone(), &StateConfig::default()).is_ok());
        assert!(matches!(
            Operator::with_config(m, &StateConfig::strict()),
            Err(QuantumError::NotUnitary { .. })
        ));
    }

    #[test]
    fn test_two_qubit_operator() {
        let op = Operator::new(ComplexMatrix::identity(4)).unwrap();
        assert_eq!(op.dim(), 4);
        assert_eq!(op.qubit_count(), 2);
    }
}
