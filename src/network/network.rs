use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{ensure_len, Result};
use crate::layers::dense::Layer;
use crate::math::matrix::Matrix;
use crate::network::config::NetworkConfig;
use crate::optim::sgd::Sgd;

/// Initial weights are drawn from `[-INITIAL_WEIGHT_RANGE, INITIAL_WEIGHT_RANGE)`.
pub const INITIAL_WEIGHT_RANGE: f64 = 0.5;

/// Feed-forward network with one sigmoid hidden layer and a sigmoid output
/// layer, trained one example at a time.
///
/// The two weight matrices keep the shapes given by the config for the whole
/// lifetime of the network and change only through [`Network::train`].
#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    config: NetworkConfig,
    hidden: Layer,
    output: Layer,
}

/// Activations retained from a forward pass for the backward pass.
struct ForwardPass {
    hidden: Vec<f64>,
    output: Vec<f64>,
}

/// Unscaled delta-rule gradients for both layers, computed against the
/// pre-update weights.
struct Gradients {
    hidden: Matrix,
    output: Matrix,
}

impl Network {
    /// Builds a network with every weight drawn from `rng`, input-to-hidden
    /// weights first, row by row.
    pub fn new<R: Rng + ?Sized>(config: NetworkConfig, rng: &mut R) -> Result<Network> {
        config.validate()?;

        let hidden = Layer::random(config.input_nodes, config.hidden_nodes, INITIAL_WEIGHT_RANGE, rng);
        let output = Layer::random(config.hidden_nodes, config.output_nodes, INITIAL_WEIGHT_RANGE, rng);

        Ok(Network { config, hidden, output })
    }

    /// Reproducible construction: the same `seed` and `config` always give the
    /// same initial weights.
    pub fn seeded(config: NetworkConfig, seed: u64) -> Result<Network> {
        Network::new(config, &mut StdRng::seed_from_u64(seed))
    }

    /// Unseeded construction from the thread RNG.
    pub fn from_entropy(config: NetworkConfig) -> Result<Network> {
        Network::new(config, &mut rand::thread_rng())
    }

    /// Builds a network around fixed weights.
    ///
    /// `input_weights` must be `input_nodes x hidden_nodes` and
    /// `output_weights` `hidden_nodes x output_nodes`.
    pub fn from_weights(config: NetworkConfig, input_weights: Matrix, output_weights: Matrix) -> Result<Network> {
        config.validate()?;

        ensure_len("Network::from_weights (input rows)", config.input_nodes, input_weights.rows)?;
        ensure_len("Network::from_weights (input cols)", config.hidden_nodes, input_weights.cols)?;
        ensure_len("Network::from_weights (output rows)", config.hidden_nodes, output_weights.rows)?;
        ensure_len("Network::from_weights (output cols)", config.output_nodes, output_weights.cols)?;

        Ok(Network {
            config,
            hidden: Layer::from_weights(input_weights),
            output: Layer::from_weights(output_weights),
        })
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    pub fn learning_rate(&self) -> f64 {
        self.config.learning_rate
    }

    /// `input_nodes x hidden_nodes`.
    pub fn input_weights(&self) -> &Matrix {
        &self.hidden.weights
    }

    /// `hidden_nodes x output_nodes`.
    pub fn output_weights(&self) -> &Matrix {
        &self.output.weights
    }

    /// Forward pass only. Calling it twice without a `train` in between gives
    /// bit-identical results.
    pub fn predict(&self, input: &[f64]) -> Result<Vec<f64>> {
        Ok(self.forward(input)?.output)
    }

    /// One step of online backpropagation on a single example.
    ///
    /// Fails with [`DimensionMismatch`](crate::NetworkError::DimensionMismatch) if `input` or `target`
    /// does not match the configured node counts; in that case no weight is
    /// changed.
    pub fn train(&mut self, input: &[f64], target: &[f64]) -> Result<()> {
        ensure_len("Network::train (target)", self.config.output_nodes, target.len())?;

        let pass = self.forward(input)?;
        let gradients = self.backward(input, target, &pass)?;

        // Both gradients were taken from the old weights; only now are they
        // written.
        let optimizer = Sgd::new(self.config.learning_rate);
        optimizer.step(&mut self.output, &gradients.output);
        optimizer.step(&mut self.hidden, &gradients.hidden);

        Ok(())
    }

    fn forward(&self, input: &[f64]) -> Result<ForwardPass> {
        let hidden = self.hidden.feed_from(input)?;
        let output = self.output.feed_from(&hidden)?;
        Ok(ForwardPass { hidden, output })
    }

    fn backward(&self, input: &[f64], target: &[f64], pass: &ForwardPass) -> Result<Gradients> {
        let output_error: Vec<f64> = target.iter().zip(&pass.output).map(|(t, o)| t - o).collect();

        // Spread each output unit's error over the hidden units in proportion
        // to the connecting weights.
        let hidden_error = self.output.back_propagate(&output_error)?;

        let output = self.output.compute_gradients(&output_error, &pass.output, &pass.hidden)?;
        let hidden = self.hidden.compute_gradients(&hidden_error, &pass.hidden, input)?;

        Ok(Gradients { hidden, output })
    }
}
