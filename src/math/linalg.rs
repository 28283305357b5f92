//! Vector and vector-matrix products used by the forward and backward passes.
//!
//! Every function checks operand lengths up front and returns
//! `DimensionMismatch` instead of truncating or padding.

use crate::error::{ensure_len, Result};
use crate::math::matrix::Matrix;

/// Sum of elementwise products of two equal-length vectors.
pub fn dot(a: &[f64], b: &[f64]) -> Result<f64> {
    ensure_len("dot", a.len(), b.len())?;
    Ok(a.iter().zip(b).map(|(x, y)| x * y).sum())
}

/// Returns a new `C x R` matrix; `m` is left untouched.
pub fn transpose(m: &Matrix) -> Matrix {
    m.transpose()
}

/// `v` (length R) times `m` (R x C): entry `j` is `dot(v, column_j(m))`.
pub fn vector_times_matrix(v: &[f64], m: &Matrix) -> Result<Vec<f64>> {
    ensure_len("vector_times_matrix", m.rows, v.len())?;

    let res: Vec<f64> = (0..m.cols)
        .map(|j| v.iter().zip(m.column(j)).map(|(x, w)| x * w).sum::<f64>())
        .collect();

    Ok(res)
}

/// `v` (length C) times the transpose of `m` (R x C), giving a vector of
/// length R.
///
/// Same result as `vector_times_matrix(v, &transpose(m))`, but reads the rows
/// of `m` directly. Used to push an error signal from a layer of C units back
/// to the R units feeding it through the same weights.
pub fn vector_times_transposed_matrix(v: &[f64], m: &Matrix) -> Result<Vec<f64>> {
    ensure_len("vector_times_transposed_matrix", m.cols, v.len())?;

    m.rows_iter().map(|row| dot(v, row)).collect()
}
