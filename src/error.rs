//! Error types for the network core, the training driver and the CLI run
//! configuration.
//!
//! ```text
//! NetworkError   (linear algebra, network construction, train/predict)
//! DatasetError   (training sets, presets, training runs)
//! ConfigError    (run configuration files)
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias used throughout the core.
pub type Result<T> = std::result::Result<T, NetworkError>;

// ---------------------------------------------------------------------------
// NetworkError
// ---------------------------------------------------------------------------

/// Errors raised by the linear-algebra primitives and the network itself.
///
/// Both variants are detected before any weight is touched, so a network that
/// returned one of these is still in the state it was in before the call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NetworkError {
    /// An operand's length or shape does not match what the operation needs.
    #[error("dimension mismatch in {operation}: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Operation that rejected its operands.
        operation: &'static str,
        /// Length the operation required.
        expected: usize,
        /// Length it was given.
        actual: usize,
    },

    /// Non-positive node count or learning rate supplied at construction.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl NetworkError {
    /// Construct a [`NetworkError::DimensionMismatch`].
    pub fn dimension_mismatch(operation: &'static str, expected: usize, actual: usize) -> Self {
        NetworkError::DimensionMismatch { operation, expected, actual }
    }

    /// Construct a [`NetworkError::InvalidConfiguration`].
    pub fn invalid_configuration<S: Into<String>>(reason: S) -> Self {
        NetworkError::InvalidConfiguration(reason.into())
    }
}

/// Returns `Ok(())` when `actual == expected`, a `DimensionMismatch` otherwise.
pub(crate) fn ensure_len(operation: &'static str, expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(NetworkError::dimension_mismatch(operation, expected, actual))
    }
}

// ---------------------------------------------------------------------------
// DatasetError
// ---------------------------------------------------------------------------

/// Errors produced while building a training set or running a training loop.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// An example did not fit the network or the set it was added to.
    #[error(transparent)]
    Network(#[from] NetworkError),

    /// Training was requested on a set with no examples.
    #[error("training set is empty")]
    Empty,

    /// `remove` was given an index past the end of the set.
    #[error("index {index} is out of bounds for training set of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A preset name that does not match any built-in truth table.
    #[error("unknown preset `{0}` (expected one of: or, and, xor, nand)")]
    UnknownPreset(String),

    /// A training-set file could not be read or written.
    #[error("I/O error on training set `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A training-set file contains malformed JSON.
    #[error("cannot parse training set `{path}`: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors produced when loading a run configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file `{path}`: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse config file `{path}`: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
