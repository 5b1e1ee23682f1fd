pub mod inverse;
pub mod ops;

#[cfg(test)]
mod testing;

pub use inverse::*;
pub use ops::*;
