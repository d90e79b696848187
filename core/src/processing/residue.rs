use crate::error::{ResidueError, Result};
use ndarray::ArrayD;

/// Elementwise difference `left - right`
///
/// Values are widened to `i32`, so differences of 16-bit samples are exact.
///
/// # Errors
///
/// Returns `ShapeMismatch` unless both arrays have the same shape
pub fn subtract(left: &ArrayD<i32>, right: &ArrayD<i32>) -> Result<ArrayD<i32>> {
    if left.shape() != right.shape() {
        return Err(ResidueError::ShapeMismatch {
            left: left.shape().to_vec(),
            right: right.shape().to_vec(),
        });
    }

    Ok(left - right)
}
