//! # ⚛️ sil-statevector — Simulação de vetor de estado
//!
//! Simulador de registradores pequenos de qubits: estado como vetor de
//! amplitudes complexas, portas unitárias, medição parcial com colapso e
//! composição de subsistemas por produto tensorial.
//!
//! ## Convenção de qubits
//!
//! O qubit `k` de um estado de `n` qubits ocupa o bit `n − 1 − k` do índice
//! da base: **o qubit 0 é o bit mais significativo**. A composição segue a
//! mesma regra, com o primeiro subsistema nos bits mais altos.
//!
//! ## Computational Complexity
//!
//! **Single-qubit gate — O(4^n):**
//! - Materializes the full 2^n × 2^n lifted operator per call
//! - Fine for n ≤ 10, the known ceiling of this design
//!
//! **CNOT — O(2^n):**
//! - One pass over the basis with an auxiliary buffer
//!
//! **Measurement — O(2^n):**
//! - Marginal sum, projection and renormalisation in two passes
//!
//! **Composition — O(2^(n+m)):**
//! - Kronecker product of the amplitude vectors
//!
//! ## Arquitetura
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                   State                         │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Amplitudes (2^n) + Invariant Checks      │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌──────────────────┐  ┌────────────────────┐   │
//! │  │  Gate / Operator │  │  Expansion (kron,  │   │
//! │  │  (validated U)   │  │  CNOT bit flips)   │   │
//! │  └──────────────────┘  └────────────────────┘   │
//! │  ┌──────────────────┐  ┌────────────────────┐   │
//! │  │  Measurement     │  │  Composition (⊗)   │   │
//! │  │  (injected RNG)  │  │                    │   │
//! │  └──────────────────┘  └────────────────────┘   │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! ## Exemplo
//!
//! ```ignore
//! use sil_statevector::State;
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let mut state = State::zero(2);
//! state.h(0)?;
//! state.apply_cnot(0, 1)?;
//!
//! let a = state.measure(0, &mut rng)?;
//! let b = state.measure(1, &mut rng)?;
//! assert_eq!(a, b);
//! ```

pub mod compose;
pub mod config;
pub mod error;
pub mod expansion;
pub mod gates;
pub mod matrix;
pub mod measurement;
pub mod numeric;
pub mod operator;
pub mod state;

pub use compose::Subsystem;
pub use config::StateConfig;
pub use error::{QuantumError, QuantumResult};
pub use gates::Gate;
pub use matrix::ComplexMatrix;
pub use num_complex::Complex64;
pub use operator::Operator;
pub use state::State;
