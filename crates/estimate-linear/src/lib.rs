pub mod metrics;
pub mod regression;

pub use metrics::*;
pub use regression::*;
