//! # Composição por produto tensorial
//!
//! O primeiro subsistema ocupa os bits mais significativos, logo recebe os
//! menores índices de qubit no estado composto.
//!
//! ```text
//! from_qubits([|ψ⟩ (1 qubit), |Φ+⟩ (2 qubits)])
//!   qubit 0 ← ψ
//!   qubits 1, 2 ← Φ+
//! ```

use num_complex::Complex64;
use tracing::debug;

use crate::error::QuantumResult;
use crate::state::State;

/// Parte de uma composição: estado já validado ou amplitudes cruas
#[derive(Debug, Clone, PartialEq)]
pub enum Subsystem {
    /// Estado validado
    State(State),
    /// Amplitudes ainda não validadas
    Amplitudes(Vec<Complex64>),
}

impl Subsystem {
    /// Valida amplitudes cruas como estado
    pub fn into_state(self) -> QuantumResult<State> {
        match self {
            Self::State(state) => Ok(state),
            Self::Amplitudes(amplitudes) => State::new(amplitudes),
        }
    }
}

impl From<State> for Subsystem {
    fn from(state: State) -> Self {
        Self::State(state)
    }
}

impl From<Vec<Complex64>> for Subsystem {
    fn from(amplitudes: Vec<Complex64>) -> Self {
        Self::Amplitudes(amplitudes)
    }
}

impl From<[Complex64; 2]> for Subsystem {
    fn from(qubit: [Complex64; 2]) -> Self {
        Self::Amplitudes(qubit.to_vec())
    }
}

/// Produto de Kronecker de dois vetores
pub fn kron(left: &[Complex64], right: &[Complex64]) -> Vec<Complex64> {
    let mut out = Vec::with_capacity(left.len() * right.len());
    for &a in left {
        out.extend(right.iter().map(|&b| a * b));
    }
    out
}

impl State {
    /// Compõe subsistemas independentes em ordem (composeTensor)
    ///
    /// Sem partes, devolve o estado de 0 qubits `[1]`.
    pub fn from_qubits<I, P>(parts: I) -> QuantumResult<State>
    where
        I: IntoIterator<Item = P>,
        P: Into<Subsystem>,
    {
        let mut composed = State::zero(0);
        for part in parts {
            composed.add_qubit(part)?;
        }
        Ok(composed)
    }

    /// Acrescenta um subsistema do lado menos significativo
    ///
    /// Os novos qubits recebem os maiores índices. Em caso de erro o estado
    /// não é alterado.
    pub fn add_qubit<P: Into<Subsystem>>(&mut self, part: P) -> QuantumResult<()> {
        let part = part.into().into_state()?;
        *self = self.tensor(&part);
        debug!(qubits = self.qubit_count, "composed state");
        Ok(())
    }

    /// `self ⊗ other` sem consumir nenhum dos dois
    pub fn tensor(&self, other: &State) -> State {
        let amplitudes = kron(&self.amplitudes, &other.amplitudes);
        debug_assert!(amplitudes.len().is_power_of_two());

        State {
            amplitudes,
            qubit_count: self.qubit_count + other.qubit_count,
        }
    }
}
