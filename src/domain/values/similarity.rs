use crate::domain::error::DomainError;

/// Cosine similarity of two equal-length vectors, accumulated in `f64`.
///
/// A zero-norm operand has no direction, so its similarity to anything is
/// `0.0` rather than NaN.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f64, DomainError> {
    if a.len() != b.len() {
        return Err(DomainError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }
    let mut dot = 0.0_f64;
    let mut norm_a = 0.0_f64;
    let mut norm_b = 0.0_f64;
    for (x, y) in a.iter().zip(b.iter()) {
        let x = *x as f64;
        let y = *y as f64;
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom == 0.0 {
        return Ok(0.0);
    }
    // Rounding can push |dot| a hair past denom for near-parallel vectors.
    Ok((dot / denom).clamp(-1.0, 1.0))
}

/// Returns `true` when every component is a finite number.
pub fn is_finite_vector(v: &[f32]) -> bool {
    v.iter().all(|x| x.is_finite())
}
