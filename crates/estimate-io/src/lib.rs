pub mod csv_io;
pub mod dataset;
pub mod error;
pub mod model_io;

pub use csv_io::*;
pub use dataset::*;
pub use error::{DatasetError, DatasetResult};
pub use model_io::*;
