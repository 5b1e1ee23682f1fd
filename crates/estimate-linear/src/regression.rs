use estimate_core::{Float, Matrix, MatrixError, MatrixResult};
use estimate_linalg::{inverse, matmul, transpose};
use serde::{Deserialize, Serialize};

use crate::metrics::r2_score;

/// Solve the normal equations `w = (XᵀX)⁻¹ Xᵀ y`.
///
/// `x` is the design matrix (intercept column included), `y` an `n×1` target
/// column. The steps run in a fixed order, each into a fresh buffer:
/// transpose, `XᵀX`, invert, `(XᵀX)⁻¹Xᵀ`, then multiply by `y`. A singular
/// `XᵀX` is reported as [`MatrixError::SingularMatrix`].
pub fn normal_equations<T: Float>(x: &Matrix<T>, y: &Matrix<T>) -> MatrixResult<Matrix<T>> {
    if y.cols() != 1 || y.rows() != x.rows() {
        return Err(MatrixError::DimensionMismatch(format!(
            "normal equations: targets are {} but X has {} rows",
            y.shape(),
            x.rows()
        )));
    }

    let xt = transpose(x)?;
    let xtx = matmul(&xt, x)?;
    log::debug!("normal equations: X is {}, XᵀX is {}", x.shape(), xtx.shape());
    let xtx_inv = inverse(xtx)?;
    let pseudo = matmul(&xtx_inv, &xt)?;
    matmul(&pseudo, y)
}

/// Apply coefficients `w` to a design matrix: `X · w`.
pub fn predict<T: Float>(x: &Matrix<T>, w: &Matrix<T>) -> MatrixResult<Matrix<T>> {
    if w.cols() != 1 || x.cols() != w.rows() {
        return Err(MatrixError::DimensionMismatch(format!(
            "predict: X has {} columns but the coefficients are {}",
            x.cols(),
            w.shape()
        )));
    }
    matmul(x, w)
}

/// Ordinary Least Squares linear regression.
///
/// Fits `y = Xw` using the normal equation: `w = (XᵀX)⁻¹Xᵀy`. The design
/// matrix carries its own intercept column, so `w[0]` is the intercept.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound = "T: Float")]
pub struct LinearRegression<T: Float> {
    pub coefficients: Option<Matrix<T>>,
}

impl<T: Float> LinearRegression<T> {
    pub fn new() -> Self {
        LinearRegression { coefficients: None }
    }

    /// Wrap an already computed coefficient column.
    pub fn from_coefficients(w: Matrix<T>) -> MatrixResult<Self> {
        if w.cols() != 1 {
            return Err(MatrixError::DimensionMismatch(format!(
                "coefficients must be a column vector, got {}",
                w.shape()
            )));
        }
        Ok(LinearRegression { coefficients: Some(w) })
    }

    pub fn fit(&mut self, x: &Matrix<T>, y: &Matrix<T>) -> MatrixResult<()> {
        let w = normal_equations(x, y)?;
        if !w.all_finite() {
            return Err(MatrixError::NonFinite("normal equations"));
        }
        self.coefficients = Some(w);
        Ok(())
    }

    pub fn is_fitted(&self) -> bool {
        self.coefficients.is_some()
    }

    pub fn coefficients(&self) -> MatrixResult<&Matrix<T>> {
        self.coefficients.as_ref().ok_or(MatrixError::NotFitted)
    }

    pub fn intercept(&self) -> MatrixResult<T> {
        Ok(self.coefficients()?[(0, 0)])
    }

    pub fn predict(&self, x: &Matrix<T>) -> MatrixResult<Matrix<T>> {
        predict(x, self.coefficients()?)
    }

    /// R² of the model's predictions on `(x, y)`.
    pub fn score(&self, x: &Matrix<T>, y: &Matrix<T>) -> MatrixResult<f64> {
        let pred = self.predict(x)?;
        r2_score(y, &pred)
    }
}

impl<T: Float> Default for LinearRegression<T> {
    fn default() -> Self {
        Self::new()
    }
}
