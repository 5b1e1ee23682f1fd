use estimate_core::{Float, Matrix, MatrixError, MatrixResult};

/// Matrix inverse by Gauss-Jordan elimination, using the default pivot
/// tolerance `n · ε · max|A|`.
///
/// The input is consumed: elimination runs in place on `a`, which ends up as
/// the identity and is dropped. No row swapping is performed, so a zero
/// pivot is reported as [`MatrixError::SingularMatrix`] even when a row
/// exchange would have rescued it.
pub fn inverse<T: Float>(a: Matrix<T>) -> MatrixResult<Matrix<T>> {
    let tol = T::from_usize(a.rows()) * T::EPSILON * a.max_abs();
    inverse_with_tolerance(a, tol)
}

/// Gauss-Jordan inverse with an explicit pivot tolerance.
///
/// A pivot whose magnitude is `<= tol`, or that is not finite, stops the
/// elimination with [`MatrixError::SingularMatrix`]. With `tol = 0` only an
/// exact zero pivot is rejected.
pub fn inverse_with_tolerance<T: Float>(mut a: Matrix<T>, tol: T) -> MatrixResult<Matrix<T>> {
    if !a.is_square() {
        return Err(MatrixError::NotSquare {
            rows: a.rows(),
            cols: a.cols(),
        });
    }
    let n = a.rows();
    let mut inv = Matrix::eye(n)?;

    // Forward phase: unit pivots, zeros below the diagonal.
    for p in 0..n {
        let f = a[(p, p)];
        if !f.is_finite() || f.abs() <= tol {
            log::debug!("gauss-jordan: pivot {} is {} (tolerance {})", p, f, tol);
            return Err(MatrixError::SingularMatrix { pivot: p });
        }
        for v in a.row_mut(p) {
            *v /= f;
        }
        for v in inv.row_mut(p) {
            *v /= f;
        }
        for i in (p + 1)..n {
            let f = a[(i, p)];
            eliminate(&mut a, &mut inv, i, p, f);
        }
    }

    // Backward phase: zeros above the diagonal.
    for p in (0..n).rev() {
        for i in (0..p).rev() {
            let f = a[(i, p)];
            eliminate(&mut a, &mut inv, i, p, f);
        }
    }

    if !inv.all_finite() {
        return Err(MatrixError::NonFinite("gauss-jordan inverse"));
    }
    Ok(inv)
}

/// Row `i` -= f × row `p`, applied to both halves of the augmented system.
fn eliminate<T: Float>(a: &mut Matrix<T>, inv: &mut Matrix<T>, i: usize, p: usize, f: T) {
    let n = a.cols();
    for ct in 0..n {
        let ap = a[(p, ct)];
        a[(i, ct)] -= f * ap;
        let ip = inv[(p, ct)];
        inv[(i, ct)] -= f * ip;
    }
}
