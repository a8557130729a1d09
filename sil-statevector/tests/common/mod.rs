//! Utilitários compartilhados pelos testes de integração

#![allow(dead_code)]

use sil_statevector::Complex64;
use tracing_subscriber::EnvFilter;

/// Instala o subscriber de tracing uma única vez (RUST_LOG controla o nível)
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Número complexo curto
pub fn c(re: f64, im: f64) -> Complex64 {
    Complex64::new(re, im)
}

/// |a − b| ≤ tol
pub fn close(a: Complex64, b: Complex64, tol: f64) -> bool {
    (a - b).norm() <= tol
}
