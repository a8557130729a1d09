//! # Matriz complexa quadrada
//!
//! Matriz densa `dim × dim` em ordem row-major. Só o que o simulador precisa:
//! identidade, produto, transposta conjugada, produto de Kronecker e
//! aplicação a um vetor.

use num_complex::Complex64;

use crate::error::{QuantumError, QuantumResult};

/// Matriz complexa quadrada densa
#[derive(Clone, Debug, PartialEq)]
pub struct ComplexMatrix {
    /// Dimensão (linhas = colunas)
    dim: usize,
    /// Elementos em ordem row-major
    elements: Vec<Complex64>,
}

impl ComplexMatrix {
    /// Matriz identidade
    pub fn identity(dim: usize) -> Self {
        let mut elements = vec![Complex64::new(0.0, 0.0); dim * dim];
        for i in 0..dim {
            elements[i * dim + i] = Complex64::new(1.0, 0.0);
        }
        Self { dim, elements }
    }

    /// Matriz zero
    pub fn zeros(dim: usize) -> Self {
        Self {
            dim,
            elements: vec![Complex64::new(0.0, 0.0); dim * dim],
        }
    }

    /// Cria a partir de linhas; falha se não for quadrada
    pub fn from_rows(rows: Vec<Vec<Complex64>>) -> QuantumResult<Self> {
        let dim = rows.len();
        let mut elements = Vec::with_capacity(dim * dim);
        for row in rows {
            if row.len() != dim {
                return Err(QuantumError::shape(dim, dim, row.len()));
            }
            elements.extend(row);
        }
        Ok(Self { dim, elements })
    }

    /// Cria a partir de linhas reais
    pub fn from_real_rows(rows: &[&[f64]]) -> QuantumResult<Self> {
        Self::from_rows(
            rows.iter()
                .map(|row| row.iter().map(|&x| Complex64::new(x, 0.0)).collect())
                .collect(),
        )
    }

    /// Tabela real row-major de tamanho conhecido
    pub(crate) fn from_real_elements(dim: usize, values: &[f64]) -> Self {
        debug_assert_eq!(values.len(), dim * dim);
        Self {
            dim,
            elements: values.iter().map(|&x| Complex64::new(x, 0.0)).collect(),
        }
    }

    /// Dimensão
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Elemento (row, col)
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Complex64 {
        self.elements[row * self.dim + col]
    }

    #[inline]
    fn set(&mut self, row: usize, col: usize, value: Complex64) {
        self.elements[row * self.dim + col] = value;
    }

    /// Multiplica todos os elementos por um escalar real
    pub fn scale(mut self, factor: f64) -> Self {
        for z in &mut self.elements {
            *z *= factor;
        }
        self
    }

    /// Multiplicação de matrizes
    pub fn mul(&self, other: &ComplexMatrix) -> ComplexMatrix {
        debug_assert_eq!(self.dim, other.dim);
        let n = self.dim;
        let mut out = Self::zeros(n);
        for i in 0..n {
            for k in 0..n {
                let a = self.get(i, k);
                if a.re == 0.0 && a.im == 0.0 {
                    continue;
                }
                for j in 0..n {
                    out.elements[i * n + j] += a * other.get(k, j);
                }
            }
        }
        out
    }

    /// Transposta conjugada (dagger)
    pub fn dagger(&self) -> ComplexMatrix {
        let n = self.dim;
        let mut out = Self::zeros(n);
        for i in 0..n {
            for j in 0..n {
                out.set(j, i, self.get(i, j).conj());
            }
        }
        out
    }

    /// Produto de Kronecker `self ⊗ other`
    ///
    /// O fator da esquerda ocupa os bits mais significativos do índice.
    pub fn kron(&self, other: &ComplexMatrix) -> ComplexMatrix {
        let (a, b) = (self.dim, other.dim);
        let n = a * b;
        let mut out = Self::zeros(n);
        for i in 0..a {
            for j in 0..a {
                let s = self.get(i, j);
                if s.re == 0.0 && s.im == 0.0 {
                    continue;
                }
                for k in 0..b {
                    for l in 0..b {
                        out.set(i * b + k, j * b + l, s * other.get(k, l));
                    }
                }
            }
        }
        out
    }

    /// Aplica a matriz a um vetor (M·v)
    pub fn apply(&self, vector: &[Complex64]) -> Vec<Complex64> {
        debug_assert_eq!(self.dim, vector.len());
        self.elements
            .chunks_exact(self.dim)
            .map(|row| row.iter().zip(vector).map(|(&m, &v)| m * v).sum())
            .collect()
    }

    /// Maior desvio absoluto em relação à identidade
    ///
    /// Qualquer elemento não finito resulta em `f64::INFINITY`.
    pub fn identity_deviation(&self) -> f64 {
        let n = self.dim;
        let mut worst: f64 = 0.0;
        for i in 0..n {
            for j in 0..n {
                let expected = if i == j { 1.0 } else { 0.0 };
                let z = self.get(i, j);
                if !z.re.is_finite() || !z.im.is_finite() {
                    return f64::INFINITY;
                }
                worst = worst.max((z.re - expected).abs()).max(z.im.abs());
            }
        }
        worst
    }

    /// Todos os elementos são finitos
    pub fn is_finite(&self) -> bool {
        self.elements.iter().all(|z| z.re.is_finite() && z.im.is_finite())
    }
}
