pub mod dataset;
pub mod loop_fn;
pub mod preset;
pub mod report;
pub mod train_config;

pub use dataset::{TrainingExample, TrainingSet};
pub use loop_fn::train_loop;
pub use preset::Preset;
pub use report::{mean_squared_error, predict_all, PredictionRow, TrainReport};
pub use train_config::{Sampling, TrainConfig, DEFAULT_ITERATIONS};
