pub mod activation;
pub mod config;
pub mod error;
pub mod layers;
pub mod logging;
pub mod loss;
pub mod math;
pub mod network;
pub mod optim;
pub mod train;

// Convenience re-exports
pub use activation::sigmoid::sigmoid;
pub use config::RunConfig;
pub use error::{ConfigError, DatasetError, NetworkError};
pub use layers::dense::Layer;
pub use loss::mse::MseLoss;
pub use math::matrix::Matrix;
pub use network::{Network, NetworkConfig};
pub use optim::sgd::Sgd;
pub use train::{train_loop, Preset, Sampling, TrainConfig, TrainReport, TrainingExample, TrainingSet};
