use estimate_core::Matrix;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded matrix with entries uniform in [0, 1).
pub(crate) fn random_matrix(rows: usize, cols: usize, seed: u64) -> Matrix<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let data = (0..rows * cols).map(|_| rng.gen::<f64>()).collect();
    Matrix::new(data, rows, cols).unwrap()
}
