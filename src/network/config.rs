use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use crate::error::{NetworkError, Result};

/// Learning rates outside this range still train, but the harness only
/// offers values inside it.
pub const CONVENTIONAL_LEARNING_RATE: RangeInclusive<f64> = 0.1..=0.99;

/// Fixed dimensions and learning rate of a [`Network`](crate::Network).
///
/// `Default` is the two-input, three-hidden, one-output shape used for the
/// truth-table presets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub input_nodes: usize,
    pub hidden_nodes: usize,
    pub output_nodes: usize,
    pub learning_rate: f64,
}

impl NetworkConfig {
    pub fn new(input_nodes: usize, hidden_nodes: usize, output_nodes: usize, learning_rate: f64) -> Self {
        NetworkConfig {
            input_nodes,
            hidden_nodes,
            output_nodes,
            learning_rate,
        }
    }

    /// Rejects zero node counts and learning rates that are not a positive,
    /// finite number.
    pub fn validate(&self) -> Result<()> {
        let counts = [
            ("input_nodes", self.input_nodes),
            ("hidden_nodes", self.hidden_nodes),
            ("output_nodes", self.output_nodes),
        ];
        if let Some((name, _)) = counts.iter().find(|(_, n)| *n == 0) {
            return Err(NetworkError::invalid_configuration(format!("{name} must be > 0")));
        }

        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(NetworkError::invalid_configuration(format!(
                "learning_rate must be a positive finite number, got {}",
                self.learning_rate
            )));
        }

        Ok(())
    }

    pub fn has_conventional_learning_rate(&self) -> bool {
        CONVENTIONAL_LEARNING_RATE.contains(&self.learning_rate)
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        NetworkConfig::new(2, 3, 1, 0.1)
    }
}
