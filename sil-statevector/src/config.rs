//! Environment configuration loading from .env files
//!
//! Tolerances and the default measurement seed come from `.env` or the
//! process environment, falling back to the documented defaults.

use std::env;

use once_cell::sync::Lazy;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

// Automatically load .env when config module is accessed
static DOTENV_INIT: Lazy<()> = Lazy::new(|| {
    let _ = dotenv::dotenv();
});

/// Ensure environment is loaded
#[inline]
fn ensure_loaded() {
    let _ = &*DOTENV_INIT;
}

/// Load normalisation tolerance from environment
/// Default: 1e-5 (|Σ|a|² − 1| at construction)
pub fn norm_tolerance() -> f64 {
    ensure_loaded();
    env::var("SIL_STATEVECTOR_NORM_TOLERANCE")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(1e-5)
}

/// Load unitarity tolerance from environment
/// Default: 1e-5 (max |U·U† − I|)
pub fn unitary_tolerance() -> f64 {
    ensure_loaded();
    env::var("SIL_STATEVECTOR_UNITARY_TOLERANCE")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(1e-5)
}

/// Load default measurement seed from environment
/// Default: none (entropy)
pub fn seed() -> Option<u64> {
    ensure_loaded();
    env::var("SIL_STATEVECTOR_SEED")
        .ok()
        .and_then(|v| v.parse().ok())
}

/// Cached values
pub static NORM_TOLERANCE: Lazy<f64> = Lazy::new(norm_tolerance);
pub static UNITARY_TOLERANCE: Lazy<f64> = Lazy::new(unitary_tolerance);
pub static SEED: Lazy<Option<u64>> = Lazy::new(seed);

/// RNG for measurement: seeded from `SIL_STATEVECTOR_SEED` when set
pub fn rng() -> StdRng {
    match *SEED {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Tolerâncias usadas na validação de estados e operadores
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StateConfig {
    /// Tolerância absoluta de |Σ|a|² − 1|
    pub norm_tolerance: f64,
    /// Tolerância absoluta de |U·U† − I|
    pub unitary_tolerance: f64,
}

impl Default for StateConfig {
    fn default() -> Self {
        Self {
            norm_tolerance: *NORM_TOLERANCE,
            unitary_tolerance: *UNITARY_TOLERANCE,
        }
    }
}

impl StateConfig {
    /// Configuração estrita, usada para checar deriva numérica
    pub fn strict() -> Self {
        Self {
            norm_tolerance: 1e-9,
            unitary_tolerance: 1e-9,
        }
    }
}
