use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_ITERATIONS: usize = 100_000;

/// How `train_loop` picks the example for each step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sampling {
    /// Uniformly at random, with replacement.
    #[default]
    Random,
    /// In order, wrapping around. Makes runs independent of the sampler.
    Cycle,
}

impl fmt::Display for Sampling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Sampling::Random => "random",
            Sampling::Cycle => "cycle",
        })
    }
}

impl FromStr for Sampling {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(Sampling::Random),
            "cycle" => Ok(Sampling::Cycle),
            other => Err(format!("unknown sampling `{other}` (expected random or cycle)")),
        }
    }
}

/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `iterations`: number of single-example `train` calls
/// - `sampling`: how each call's example is chosen
/// - `log_every`: emit a `debug!` progress line with the current mean
///   squared error every this many iterations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainConfig {
    pub iterations: usize,
    pub sampling: Sampling,
    pub log_every: Option<usize>,
}

impl TrainConfig {
    /// Creates a `TrainConfig` with no progress logging.
    pub fn new(iterations: usize, sampling: Sampling) -> Self {
        TrainConfig {
            iterations,
            sampling,
            log_every: None,
        }
    }

    pub fn with_log_every(mut self, every: usize) -> Self {
        self.log_every = Some(every);
        self
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig::new(DEFAULT_ITERATIONS, Sampling::Random)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_samples_randomly() {
        let config = TrainConfig::default();
        assert_eq!(config.iterations, DEFAULT_ITERATIONS);
        assert_eq!(config.sampling, Sampling::Random);
        assert_eq!(config.log_every, None);
    }

    #[test]
    fn sampling_parses_and_prints() {
        assert_eq!("Cycle".parse::<Sampling>(), Ok(Sampling::Cycle));
        assert_eq!(Sampling::Random.to_string(), "random");
        assert!("shuffle".parse::<Sampling>().is_err());
    }
}
