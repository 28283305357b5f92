use crate::error::{ensure_len, Result};

/// Squared-error bookkeeping for training reports. Training itself follows
/// the delta rule in `Layer::compute_gradients`; this is only used to measure
/// how well a network fits.
pub struct MseLoss;

impl MseLoss {
    /// Scalar MSE: mean((predicted - expected)²)
    pub fn loss(predicted: &[f64], expected: &[f64]) -> Result<f64> {
        ensure_len("MseLoss::loss", expected.len(), predicted.len())?;
        if predicted.is_empty() {
            return Ok(0.0);
        }

        let n = predicted.len() as f64;
        Ok(predicted
            .iter()
            .zip(expected.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>()
            / n)
    }
}
