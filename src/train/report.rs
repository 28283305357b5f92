use serde::Serialize;
use std::fmt;

use crate::error::NetworkError;
use crate::loss::mse::MseLoss;
use crate::network::network::Network;
use crate::train::dataset::TrainingSet;

/// A training example next to what the network now predicts for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionRow {
    pub input: Vec<f64>,
    pub target: Vec<f64>,
    pub prediction: Vec<f64>,
}

/// Outcome of a `train_loop` run.
#[derive(Debug, Clone, Serialize)]
pub struct TrainReport {
    /// Number of `train` calls made.
    pub iterations: usize,
    /// Wall-clock duration of the training calls in milliseconds.
    pub elapsed_ms: u64,
    /// Mean over all examples of each example's mean squared error.
    pub mean_squared_error: f64,
    /// One row per example, in training-set order.
    pub rows: Vec<PredictionRow>,
}

/// Predicts every example of `set`, in order.
pub fn predict_all(network: &Network, set: &TrainingSet) -> Result<Vec<PredictionRow>, NetworkError> {
    set.iter()
        .map(|example| {
            Ok(PredictionRow {
                input: example.input.clone(),
                target: example.target.clone(),
                prediction: network.predict(&example.input)?,
            })
        })
        .collect()
}

/// Mean squared error of `network` over the whole set; `0.0` for an empty set.
pub fn mean_squared_error(network: &Network, set: &TrainingSet) -> Result<f64, NetworkError> {
    if set.is_empty() {
        return Ok(0.0);
    }
    let total = set.iter().try_fold(0.0, |acc, example| {
        let prediction = network.predict(&example.input)?;
        Ok::<f64, NetworkError>(acc + MseLoss::loss(&prediction, &example.target)?)
    })?;
    Ok(total / set.len() as f64)
}

impl TrainReport {
    pub fn evaluate(
        network: &Network,
        set: &TrainingSet,
        iterations: usize,
        elapsed_ms: u64,
    ) -> Result<TrainReport, NetworkError> {
        Ok(TrainReport {
            iterations,
            elapsed_ms,
            mean_squared_error: mean_squared_error(network, set)?,
            rows: predict_all(network, set)?,
        })
    }
}

fn write_header(f: &mut fmt::Formatter<'_>, label: &str, n: usize) -> fmt::Result {
    for i in 1..=n {
        write!(f, " {:>8}", format!("{label}{i}"))?;
    }
    Ok(())
}

fn write_values(f: &mut fmt::Formatter<'_>, values: &[f64], precision: usize) -> fmt::Result {
    for v in values {
        write!(f, " {:>8.*}", precision, v)?;
    }
    Ok(())
}

impl fmt::Display for TrainReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (n_in, n_out) = self
            .rows
            .first()
            .map_or((0, 0), |row| (row.input.len(), row.target.len()));

        write_header(f, "x", n_in)?;
        f.write_str(" |")?;
        write_header(f, "y", n_out)?;
        f.write_str(" |")?;
        write_header(f, "p", n_out)?;
        writeln!(f)?;

        for row in &self.rows {
            write_values(f, &row.input, 3)?;
            f.write_str(" |")?;
            write_values(f, &row.target, 3)?;
            f.write_str(" |")?;
            write_values(f, &row.prediction, 4)?;
            writeln!(f)?;
        }

        writeln!(
            f,
            "mse {:.6} after {} iterations ({} ms)",
            self.mean_squared_error, self.iterations, self.elapsed_ms
        )
    }
}
