use estimate_core::{Float, Matrix, MatrixError, MatrixResult};

/// Transpose: `result[i][j] = a[j][i]`. The source is left untouched.
pub fn transpose<T: Float>(a: &Matrix<T>) -> MatrixResult<Matrix<T>> {
    let rows = a.rows();
    let cols = a.cols();
    let src = a.data();
    let mut data = vec![T::ZERO; a.numel()];
    for i in 0..cols {
        for j in 0..rows {
            data[i * rows + j] = src[j * cols + i];
        }
    }
    Matrix::new(data, cols, rows)
}

/// Accumulating matrix product: `out[i][j] += Σ_k a[i][k]·b[k][j]`.
///
/// `out` is added into, not overwritten. Call [`Matrix::fill_zero`] on a
/// reused destination first, or use [`matmul`] which always starts from zero.
pub fn matmul_acc<T: Float>(a: &Matrix<T>, b: &Matrix<T>, out: &mut Matrix<T>) -> MatrixResult<()> {
    let m = a.rows();
    let k = a.cols();
    let n = b.cols();

    if k != b.rows() {
        return Err(MatrixError::DimensionMismatch(format!(
            "matmul: inner dimensions must match, got {} and {}",
            k,
            b.rows()
        )));
    }
    if out.rows() != m || out.cols() != n {
        return Err(MatrixError::DimensionMismatch(format!(
            "matmul: destination is {} but the product is ({}, {})",
            out.shape(),
            m,
            n
        )));
    }

    let a_data = a.data();
    let b_data = b.data();
    let dst = out.data_mut();
    for i in 0..m {
        for j in 0..n {
            let mut sum = dst[i * n + j];
            for p in 0..k {
                sum += a_data[i * k + p] * b_data[p * n + j];
            }
            dst[i * n + j] = sum;
        }
    }
    Ok(())
}

/// Matrix product `a × b` into a freshly zeroed `(a.rows × b.cols)` matrix.
pub fn matmul<T: Float>(a: &Matrix<T>, b: &Matrix<T>) -> MatrixResult<Matrix<T>> {
    let mut out = Matrix::zeros(a.rows(), b.cols())?;
    matmul_acc(a, b, &mut out)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::random_matrix;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_transpose() {
        let a: Matrix<f64> = Matrix::from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        let t = transpose(&a).unwrap();
        assert_eq!((t.rows(), t.cols()), (3, 2));
        assert_eq!(t.data(), &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
        // source untouched
        assert_eq!(a.data(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_transpose_involution() {
        for (rows, cols, seed) in [(1, 1, 1), (1, 5, 2), (4, 1, 3), (3, 7, 4), (6, 6, 5)] {
            let a: Matrix<f64> = random_matrix(rows, cols, seed);
            assert_eq!(transpose(&transpose(&a).unwrap()).unwrap(), a);
        }
    }

    #[test]
    fn test_matmul() {
        let a: Matrix<f64> = Matrix::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3).unwrap();
        let b: Matrix<f64> = Matrix::new(vec![7.0, 8.0, 9.0, 10.0, 11.0, 12.0], 3, 2).unwrap();
        let c = matmul(&a, &b).unwrap();
        assert_eq!((c.rows(), c.cols()), (2, 2));
        assert_eq!(c.data(), &[58.0, 64.0, 139.0, 154.0]);
    }

    #[test]
    fn test_matmul_cells_are_dot_products() {
        let a: Matrix<f64> = random_matrix(4, 3, 11);
        let b: Matrix<f64> = random_matrix(3, 5, 12);
        let c = matmul(&a, &b).unwrap();
        assert_eq!((c.rows(), c.cols()), (4, 5));
        for i in 0..4 {
            for j in 0..5 {
                let col = b.col(j).unwrap();
                let dot: f64 = a.row(i).iter().zip(col.iter()).map(|(x, y)| x * y).sum();
                assert_abs_diff_eq!(c[(i, j)], dot, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_matmul_inner_mismatch() {
        let a: Matrix<f64> = Matrix::zeros(2, 3).unwrap();
        let b: Matrix<f64> = Matrix::zeros(2, 3).unwrap();
        assert!(matches!(matmul(&a, &b), Err(MatrixError::DimensionMismatch(_))));
    }

    #[test]
    fn test_matmul_acc_accumulates() {
        let a: Matrix<f64> = Matrix::eye(2).unwrap();
        let b: Matrix<f64> = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let mut out = Matrix::zeros(2, 2).unwrap();
        matmul_acc(&a, &b, &mut out).unwrap();
        assert_eq!(out, b);

        // reusing without zeroing adds a second product on top
        matmul_acc(&a, &b, &mut out).unwrap();
        assert_eq!(out.data(), &[2.0, 4.0, 6.0, 8.0]);

        out.fill_zero();
        matmul_acc(&a, &b, &mut out).unwrap();
        assert_eq!(out, b);
    }

    #[test]
    fn test_matmul_acc_destination_checked() {
        let a: Matrix<f64> = Matrix::zeros(2, 3).unwrap();
        let b: Matrix<f64> = Matrix::zeros(3, 4).unwrap();
        let mut out = Matrix::zeros(2, 3).unwrap();
        assert!(matmul_acc(&a, &b, &mut out).is_err());
    }
}
