//! # Medição parcial
//!
//! 1. Particiona a base pelo bit do qubit medido
//! 2. Soma |a|² em cada partição → (p0, p1)
//! 3. Sorteia o resultado com o RNG injetado
//! 4. Zera as amplitudes incompatíveis com o resultado
//! 5. Renormaliza por √p_resultado
//!
//! O RNG é sempre passado pelo chamador; nada aqui lê estado global.

use num_complex::Complex64;
use rand::Rng;
use tracing::debug;

use crate::error::{QuantumError, QuantumResult};
use crate::expansion::qubit_value;
use crate::numeric::abs_squared;
use crate::state::State;

impl State {
    /// Índices da base em que o qubit `index` vale `outcome`
    pub fn qubit_indices(&self, index: usize, outcome: u8) -> QuantumResult<Vec<usize>> {
        self.check_index(index)?;
        let n = self.qubit_count;
        Ok((0..self.amplitudes.len())
            .filter(|&basis| qubit_value(basis, index, n) == outcome)
            .collect())
    }

    /// Probabilidades marginais (p0, p1) do qubit `index`
    pub fn marginal_probabilities(&self, index: usize) -> QuantumResult<(f64, f64)> {
        self.check_index(index)?;
        let n = self.qubit_count;
        let mut probs = [0.0f64; 2];
        for (basis, &amplitude) in self.amplitudes.iter().enumerate() {
            probs[qubit_value(basis, index, n) as usize] += abs_squared(amplitude);
        }
        Ok((probs[0], probs[1]))
    }

    /// Mede o qubit `index`, colapsando o estado
    pub fn measure<R: Rng + ?Sized>(&mut self, index: usize, rng: &mut R) -> QuantumResult<u8> {
        self.check_index(index)?;
        let draw: f64 = rng.r#gen();
        self.collapse(index, draw)
    }

    /// Núcleo determinístico da medição
    ///
    /// `draw` é uma amostra uniforme em [0, 1): o resultado é 0 se
    /// `draw · (p0 + p1) < p0`. Escalar pela massa total evita escolher um
    /// ramo de probabilidade zero quando a norma desviou levemente de 1.
    ///
    /// `draw` fora de [0, 1) (incluindo NaN) é `InvalidDraw`, sem mutação.
    pub fn collapse(&mut self, index: usize, draw: f64) -> QuantumResult<u8> {
        let (prob0, prob1) = self.marginal_probabilities(index)?;
        if !(0.0..1.0).contains(&draw) {
            return Err(QuantumError::InvalidDraw(draw));
        }
        let outcome: u8 = if draw * (prob0 + prob1) < prob0 { 0 } else { 1 };
        let retained = if outcome == 0 { prob0 } else { prob1 };

        let n = self.qubit_count;
        let scale = 1.0 / retained.sqrt();
        for (basis, amplitude) in self.amplitudes.iter_mut().enumerate() {
            if qubit_value(basis, index, n) == outcome {
                *amplitude *= scale;
            } else {
                *amplitude = Complex64::new(0.0, 0.0);
            }
        }

        debug!(index, prob0, outcome, "measured qubit");
        Ok(outcome)
    }
}
