//! Goodness-of-fit measures for a column of predictions against its targets.

use estimate_core::{Float, Matrix, MatrixError, MatrixResult};

/// Pairs of `(target, prediction)` widened to `f64`.
fn paired<'a, T: Float>(
    y_true: &'a Matrix<T>,
    y_pred: &'a Matrix<T>,
) -> MatrixResult<impl Iterator<Item = (f64, f64)> + 'a> {
    if y_true.shape() != y_pred.shape() {
        return Err(MatrixError::DimensionMismatch(format!(
            "metrics: targets are {} but predictions are {}",
            y_true.shape(),
            y_pred.shape()
        )));
    }
    Ok(y_true
        .data()
        .iter()
        .zip(y_pred.data())
        .map(|(t, p)| (t.to_f64(), p.to_f64())))
}

fn residual_sum_of_squares<T: Float>(y_true: &Matrix<T>, y_pred: &Matrix<T>) -> MatrixResult<f64> {
    Ok(paired(y_true, y_pred)?.map(|(t, p)| (t - p).powi(2)).sum())
}

/// Mean Squared Error.
pub fn mse<T: Float>(y_true: &Matrix<T>, y_pred: &Matrix<T>) -> MatrixResult<f64> {
    let rss = residual_sum_of_squares(y_true, y_pred)?;
    Ok(rss / y_true.numel() as f64)
}

/// Root Mean Squared Error.
pub fn rmse<T: Float>(y_true: &Matrix<T>, y_pred: &Matrix<T>) -> MatrixResult<f64> {
    mse(y_true, y_pred).map(f64::sqrt)
}

/// R² (coefficient of determination).
///
/// Constant targets have no variance to explain; the score is then 0.
pub fn r2_score<T: Float>(y_true: &Matrix<T>, y_pred: &Matrix<T>) -> MatrixResult<f64> {
    let rss = residual_sum_of_squares(y_true, y_pred)?;
    let targets: Vec<f64> = y_true.data().iter().map(|t| t.to_f64()).collect();
    let mean = targets.iter().sum::<f64>() / targets.len() as f64;
    let tss: f64 = targets.iter().map(|t| (t - mean).powi(2)).sum();
    if tss < 1e-15 {
        return Ok(0.0);
    }
    Ok(1.0 - rss / tss)
}
