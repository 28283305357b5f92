use rand::Rng;
use std::ops::{Add, Index, IndexMut};

use crate::error::{NetworkError, Result};
use crate::math::random::random_uniform;

/// Dense row-major weight matrix.
///
/// Entry `(i, j)` is the weight from source unit `i` to destination unit `j`,
/// so a matrix with `rows` rows maps a layer of `rows` units onto one of
/// `cols` units.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
    data: Vec<Vec<f64>>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows],
        }
    }

    /// Fills a `rows x cols` matrix with independent draws from `[min, max)`,
    /// row by row.
    pub fn random_uniform<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        min: f64,
        max: f64,
        rng: &mut R,
    ) -> Matrix {
        let mut res = Matrix::zeros(rows, cols);

        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = random_uniform(rng, min, max);
            }
        }

        res
    }

    /// Builds a matrix from explicit rows.
    ///
    /// Fails with `DimensionMismatch` if the rows are not all the same length.
    /// An empty `data` yields a `0 x 0` matrix.
    pub fn from_data(data: Vec<Vec<f64>>) -> Result<Matrix> {
        let cols = data.first().map_or(0, Vec::len);
        if let Some(row) = data.iter().find(|row| row.len() != cols) {
            return Err(NetworkError::dimension_mismatch("Matrix::from_data", cols, row.len()));
        }

        Ok(Matrix {
            rows: data.len(),
            cols,
            data,
        })
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i]
    }

    pub fn rows_iter(&self) -> impl Iterator<Item = &[f64]> + '_ {
        self.data.iter().map(Vec::as_slice)
    }

    /// Column `j` read top to bottom.
    pub fn column(&self, j: usize) -> impl Iterator<Item = f64> + '_ {
        self.data.iter().map(move |row| row[j])
    }

    pub fn transpose(&self) -> Matrix {
        let mut res = Matrix::zeros(self.cols, self.rows);

        for i in 0..res.rows {
            for j in 0..res.cols {
                res.data[i][j] = self.data[j][i];
            }
        }

        res
    }

    pub fn map<F>(&self, functor: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self
                .data
                .iter()
                .map(|row| row.iter().map(|&x| functor(x)).collect())
                .collect(),
        }
    }

    /// Outer product `a^T b`: entry `(i, j)` is `a[i] * b[j]`.
    pub fn outer(a: &[f64], b: &[f64]) -> Matrix {
        Matrix {
            rows: a.len(),
            cols: b.len(),
            data: a.iter().map(|&x| b.iter().map(|&y| x * y).collect()).collect(),
        }
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Matrix { rows: 0, cols: 0, data: vec![] }
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        &self.data[i][j]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        &mut self.data[i][j]
    }
}

impl Add for &Matrix {
    type Output = Matrix;

    /// # Panics
    /// Panics if the two matrices have different shapes.
    fn add(self, rhs: Self) -> Self::Output {
        if self.rows != rhs.rows || self.cols != rhs.cols {
            panic!("Matrices are of incorrect sizes")
        }

        let mut res = Matrix::zeros(self.rows, self.cols);

        for i in 0..self.rows {
            for j in 0..self.cols {
                res.data[i][j] = self.data[i][j] + rhs.data[i][j];
            }
        }

        res
    }
}
