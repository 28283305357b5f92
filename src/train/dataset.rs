use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ensure_len, DatasetError, NetworkError};
use crate::network::config::NetworkConfig;
use crate::train::preset::Preset;

/// One labeled row: an input vector and the output the network should learn
/// for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingExample {
    pub input: Vec<f64>,
    pub target: Vec<f64>,
}

impl TrainingExample {
    pub fn new(input: Vec<f64>, target: Vec<f64>) -> Self {
        TrainingExample { input, target }
    }
}

/// Examples that all share one input width and one target width.
///
/// The set belongs to whoever drives training; a [`Network`](crate::Network)
/// never holds on to it. Examples are never edited in place, only added,
/// removed or cleared.
///
/// Deserializing goes through the same width check as [`TrainingSet::add`],
/// so a set holding a mis-sized example cannot be built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTrainingSet")]
pub struct TrainingSet {
    input_nodes: usize,
    output_nodes: usize,
    examples: Vec<TrainingExample>,
}

/// Wire form of a [`TrainingSet`] before its examples are checked.
#[derive(Deserialize)]
struct RawTrainingSet {
    input_nodes: usize,
    output_nodes: usize,
    #[serde(default)]
    examples: Vec<TrainingExample>,
}

impl TryFrom<RawTrainingSet> for TrainingSet {
    type Error = NetworkError;

    fn try_from(raw: RawTrainingSet) -> Result<Self, Self::Error> {
        let mut set = TrainingSet::new(raw.input_nodes, raw.output_nodes);
        for example in raw.examples {
            set.check(&example)?;
            set.examples.push(example);
        }
        Ok(set)
    }
}

impl TrainingSet {
    pub fn new(input_nodes: usize, output_nodes: usize) -> Self {
        TrainingSet {
            input_nodes,
            output_nodes,
            examples: Vec::new(),
        }
    }

    /// The four rows of a two-input truth table.
    pub fn from_preset(preset: Preset) -> Self {
        TrainingSet {
            input_nodes: 2,
            output_nodes: 1,
            examples: preset.examples(),
        }
    }

    pub fn input_nodes(&self) -> usize {
        self.input_nodes
    }

    pub fn output_nodes(&self) -> usize {
        self.output_nodes
    }

    /// Appends `example` if its widths match the set.
    pub fn add(&mut self, example: TrainingExample) -> Result<(), DatasetError> {
        self.check(&example)?;
        self.examples.push(example);
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<TrainingExample, DatasetError> {
        if index >= self.examples.len() {
            return Err(DatasetError::IndexOutOfRange {
                index,
                len: self.examples.len(),
            });
        }
        Ok(self.examples.remove(index))
    }

    pub fn clear(&mut self) {
        self.examples.clear();
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TrainingExample> {
        self.examples.get(index)
    }

    pub fn examples(&self) -> &[TrainingExample] {
        &self.examples
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TrainingExample> {
        self.examples.iter()
    }

    /// Checks that a network built from `config` accepts this set's examples.
    pub fn fits(&self, config: &NetworkConfig) -> Result<(), NetworkError> {
        ensure_len("TrainingSet::fits (input_nodes)", config.input_nodes, self.input_nodes)?;
        ensure_len("TrainingSet::fits (output_nodes)", config.output_nodes, self.output_nodes)
    }

    fn check(&self, example: &TrainingExample) -> Result<(), NetworkError> {
        ensure_len("TrainingSet::add (input)", self.input_nodes, example.input.len())?;
        ensure_len("TrainingSet::add (target)", self.output_nodes, example.target.len())
    }

    /// Reads a set from JSON and rejects it if any example has the wrong width.
    pub fn load_json(path: &Path) -> Result<TrainingSet, DatasetError> {
        let contents = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let raw: RawTrainingSet = serde_json::from_str(&contents).map_err(|source| DatasetError::Json {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(TrainingSet::try_from(raw)?)
    }

    /// Writes the set as pretty-printed JSON.
    pub fn save_json(&self, path: &Path) -> Result<(), DatasetError> {
        let json = serde_json::to_string_pretty(self).map_err(|source| DatasetError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        std::fs::write(path, json).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl<'a> IntoIterator for &'a TrainingSet {
    type Item = &'a TrainingExample;
    type IntoIter = std::slice::Iter<'a, TrainingExample>;

    fn into_iter(self) -> Self::IntoIter {
        self.examples.iter()
    }
}
