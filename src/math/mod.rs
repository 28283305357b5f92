pub mod linalg;
pub mod matrix;
pub mod random;

pub use linalg::{dot, transpose, vector_times_matrix, vector_times_transposed_matrix};
pub use matrix::Matrix;
pub use random::random_uniform;
