use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, DatasetError};
use crate::network::config::NetworkConfig;
use crate::train::dataset::TrainingSet;
use crate::train::preset::Preset;
use crate::train::train_config::{Sampling, TrainConfig, DEFAULT_ITERATIONS};

/// Settings for one command-line training run.
///
/// Also defines the config file format; every field may be omitted, and
/// whatever is left unset falls back to the defaults of [`NetworkConfig`] and
/// [`TrainConfig`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Built-in truth table to train on. Ignored when `data` is set.
    pub preset: Option<Preset>,
    /// JSON training-set file.
    pub data: Option<PathBuf>,
    pub hidden_nodes: Option<usize>,
    pub learning_rate: Option<f64>,
    pub iterations: Option<usize>,
    pub sampling: Option<Sampling>,
    pub log_every: Option<usize>,
    /// Seeds weight initialization and example sampling.
    pub seed: Option<u64>,
}

impl RunConfig {
    pub fn from_json(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    // merge configs where the second overwrites the first
    pub fn merge(self, other: Self) -> Self {
        Self {
            preset: other.preset.or(self.preset),
            data: other.data.or(self.data),
            hidden_nodes: other.hidden_nodes.or(self.hidden_nodes),
            learning_rate: other.learning_rate.or(self.learning_rate),
            iterations: other.iterations.or(self.iterations),
            sampling: other.sampling.or(self.sampling),
            log_every: other.log_every.or(self.log_every),
            seed: other.seed.or(self.seed),
        }
    }

    /// Loads `data` if set, otherwise the preset (XOR when none is given).
    pub fn training_set(&self) -> Result<TrainingSet, DatasetError> {
        match &self.data {
            Some(path) => TrainingSet::load_json(path),
            None => Ok(TrainingSet::from_preset(self.preset.unwrap_or(Preset::Xor))),
        }
    }

    /// Input and output widths come from the training set, the rest from this
    /// config or the defaults.
    pub fn network_config(&self, set: &TrainingSet) -> NetworkConfig {
        let defaults = NetworkConfig::default();
        NetworkConfig::new(
            set.input_nodes(),
            self.hidden_nodes.unwrap_or(defaults.hidden_nodes),
            set.output_nodes(),
            self.learning_rate.unwrap_or(defaults.learning_rate),
        )
    }

    pub fn train_config(&self) -> TrainConfig {
        TrainConfig {
            iterations: self.iterations.unwrap_or(DEFAULT_ITERATIONS),
            sampling: self.sampling.unwrap_or_default(),
            log_every: self.log_every,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_config_wins() {
        let file = RunConfig {
            preset: Some(Preset::And),
            hidden_nodes: Some(5),
            seed: Some(1),
            ..Default::default()
        };
        let flags = RunConfig {
            hidden_nodes: Some(8),
            iterations: Some(10),
            ..Default::default()
        };

        let merged = file.merge(flags);
        assert_eq!(merged.preset, Some(Preset::And));
        assert_eq!(merged.hidden_nodes, Some(8));
        assert_eq!(merged.iterations, Some(10));
        assert_eq!(merged.seed, Some(1));
    }

    #[test]
    fn empty_config_uses_defaults() {
        let run = RunConfig::default();
        let set = run.training_set().unwrap();
        assert_eq!(set, TrainingSet::from_preset(Preset::Xor));
        assert_eq!(run.network_config(&set), NetworkConfig::default());
        assert_eq!(run.train_config(), TrainConfig::default());
    }

    #[test]
    fn network_widths_follow_the_training_set() {
        let run = RunConfig {
            hidden_nodes: Some(4),
            learning_rate: Some(0.5),
            ..Default::default()
        };
        let set = TrainingSet::new(3, 2);
        assert_eq!(run.network_config(&set), NetworkConfig::new(3, 4, 2, 0.5));
    }

    #[test]
    fn reads_partial_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.json");
        std::fs::write(&path, r#"{"preset": "nand", "iterations": 2000, "sampling": "cycle"}"#).unwrap();

        let run = RunConfig::from_json(&path).unwrap();
        assert_eq!(run.preset, Some(Preset::Nand));
        assert_eq!(run.train_config(), TrainConfig::new(2000, Sampling::Cycle));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.json");
        std::fs::write(&path, r#"{"epochs": 3}"#).unwrap();
        assert!(matches!(RunConfig::from_json(&path), Err(ConfigError::Parse { .. })));
    }
}
