use crate::error::{CurveError, Result};

/// Check that a radius-like parameter is strictly positive.
///
/// NaN is rejected along with zero and negative values.
pub fn ensure_positive(name: &str, value: f64) -> Result<f64> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(CurveError::InvalidParameter(format!(
            "{} must be positive, got {}",
            name, value
        )))
    }
}
