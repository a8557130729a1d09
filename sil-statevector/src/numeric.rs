//! Utilitários numéricos usados por todos os outros módulos

use num_complex::Complex64;

/// |z|², a probabilidade associada a uma amplitude
#[inline]
pub fn abs_squared(z: Complex64) -> f64 {
    z.norm_sqr()
}

/// Σ|zᵢ|²
///
/// É a quantidade que o invariante de normalização compara com 1.
pub fn squared_norm(vector: &[Complex64]) -> f64 {
    vector.iter().map(|&z| abs_squared(z)).sum()
}

/// Norma euclidiana ‖v‖ = √Σ|zᵢ|²
pub fn euclidean_norm(vector: &[Complex64]) -> f64 {
    squared_norm(vector).sqrt()
}

/// Verifica se `length` é potência de dois (0 não é)
#[inline]
pub fn is_power_of_two(length: usize) -> bool {
    length.is_power_of_two()
}

/// log2 exato de uma potência de dois
pub fn exact_log2(length: usize) -> Option<usize> {
    is_power_of_two(length).then(|| length.trailing_zeros() as usize)
}

/// Comparação complexa com tolerância absoluta em cada componente
#[inline]
pub fn approx_eq(a: Complex64, b: Complex64, tolerance: f64) -> bool {
    (a.re - b.re).abs() <= tolerance && (a.im - b.im).abs() <= tolerance
}

/// Comparação elemento a elemento de dois vetores
pub fn vectors_approx_eq(a: &[Complex64], b: &[Complex64], tolerance: f64) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(&x, &y)| approx_eq(x, y, tolerance))
}
