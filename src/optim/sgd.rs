use crate::{layers::dense::Layer, math::matrix::Matrix};

/// Plain online gradient step: every weight moves by `learning_rate` times
/// its delta-rule gradient. No momentum, no decay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Applies one weight update to a layer given its pre-computed gradients.
    pub fn step(&self, layer: &mut Layer, weights_grad: &Matrix) {
        layer.apply_gradients(weights_grad, self.learning_rate);
    }
}
