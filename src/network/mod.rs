pub mod config;
pub mod network;

pub use config::{NetworkConfig, CONVENTIONAL_LEARNING_RATE};
pub use network::{Network, INITIAL_WEIGHT_RANGE};
