pub mod matrix;
pub mod shape;
pub mod dtype;
pub mod error;

pub use matrix::Matrix;
pub use shape::Shape;
pub use dtype::Float;
pub use error::{MatrixError, MatrixResult};
