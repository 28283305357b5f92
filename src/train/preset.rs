use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DatasetError;
use crate::train::dataset::TrainingExample;

/// Built-in two-input truth tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    Or,
    And,
    Xor,
    Nand,
}

impl Preset {
    pub const ALL: [Preset; 4] = [Preset::Or, Preset::And, Preset::Xor, Preset::Nand];

    pub fn name(self) -> &'static str {
        match self {
            Preset::Or => "OR",
            Preset::And => "AND",
            Preset::Xor => "XOR",
            Preset::Nand => "NAND",
        }
    }

    pub fn apply(self, a: bool, b: bool) -> bool {
        match self {
            Preset::Or => a || b,
            Preset::And => a && b,
            Preset::Xor => a ^ b,
            Preset::Nand => !(a && b),
        }
    }

    /// Rows in the order `00, 01, 10, 11`, with `0.0`/`1.0` for false/true.
    pub fn examples(self) -> Vec<TrainingExample> {
        let bit = |b: bool| if b { 1.0 } else { 0.0 };
        [(false, false), (false, true), (true, false), (true, true)]
            .into_iter()
            .map(|(a, b)| TrainingExample::new(vec![bit(a), bit(b)], vec![bit(self.apply(a, b))]))
            .collect()
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = DatasetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DatasetError::UnknownPreset(s.to_owned()))
    }
}
