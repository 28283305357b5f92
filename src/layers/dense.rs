use rand::Rng;

use crate::activation::sigmoid::{sigmoid_gradient, sigmoid_vec};
use crate::error::{ensure_len, Result};
use crate::math::linalg::{vector_times_matrix, vector_times_transposed_matrix};
use crate::math::matrix::Matrix;

/// Fully connected sigmoid layer without bias units.
///
/// `weights` has one row per source unit and one column per unit of this
/// layer, so feeding a vector of length `input_size()` yields one of length
/// `size()`.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub weights: Matrix,
}

impl Layer {
    /// Weights drawn independently from `[-range, range)`.
    pub fn random<R: Rng + ?Sized>(input_size: usize, size: usize, range: f64, rng: &mut R) -> Layer {
        Layer {
            weights: Matrix::random_uniform(input_size, size, -range, range, rng),
        }
    }

    pub fn from_weights(weights: Matrix) -> Layer {
        Layer { weights }
    }

    pub fn input_size(&self) -> usize {
        self.weights.rows
    }

    pub fn size(&self) -> usize {
        self.weights.cols
    }

    /// Weighted sums of `input` squashed through the sigmoid.
    pub fn feed_from(&self, input: &[f64]) -> Result<Vec<f64>> {
        let z = vector_times_matrix(input, &self.weights)?;
        Ok(sigmoid_vec(&z))
    }

    /// Error signal for the source layer: `error` pushed back through the
    /// current weights, one entry per source unit.
    pub fn back_propagate(&self, error: &[f64]) -> Result<Vec<f64>> {
        vector_times_transposed_matrix(error, &self.weights)
    }

    /// Unscaled delta-rule step for every weight.
    ///
    /// Entry `(i, j)` is `error[j] * outputs[j] * (1 - outputs[j]) * inputs[i]`,
    /// where `outputs` are this layer's activations and `inputs` the
    /// activations that fed it. `error` is `target - output` in activation
    /// space, so the result points towards lower error and is *added* to the
    /// weights.
    pub fn compute_gradients(&self, error: &[f64], outputs: &[f64], inputs: &[f64]) -> Result<Matrix> {
        ensure_len("Layer::compute_gradients", self.size(), error.len())?;
        ensure_len("Layer::compute_gradients", self.size(), outputs.len())?;
        ensure_len("Layer::compute_gradients", self.input_size(), inputs.len())?;

        let layer_delta: Vec<f64> = error
            .iter()
            .zip(outputs)
            .map(|(e, &y)| e * sigmoid_gradient(y))
            .collect();

        Ok(Matrix::outer(inputs, &layer_delta))
    }

    /// Adds `grad` scaled by `lr` to the weights.
    pub fn apply_gradients(&mut self, grad: &Matrix, lr: f64) {
        self.weights = &self.weights + &grad.map(|g| g * lr);
    }
}
