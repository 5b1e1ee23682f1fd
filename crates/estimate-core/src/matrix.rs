use crate::dtype::Float;
use crate::error::{MatrixError, MatrixResult};
use crate::shape::Shape;

use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use std::ops;

/// Dense 2-D matrix: the single owner of its cells.
///
/// Stores data in a flat contiguous `Vec<T>` with row-major (C-order) layout.
/// Every matrix has at least one row and one column, and every row has the
/// same length. Cloning produces an independent copy.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(bound = "T: Float")]
pub struct Matrix<T: Float> {
    data: Vec<T>,
    shape: Shape,
}

/// Serialized form of [`Matrix`], checked by [`Matrix::new`] on the way in.
#[derive(Deserialize)]
#[serde(bound = "T: Float")]
struct RawMatrix<T: Float> {
    data: Vec<T>,
    shape: Shape,
}

impl<'de, T: Float> Deserialize<'de> for Matrix<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawMatrix::<T>::deserialize(deserializer)?;
        Matrix::new(raw.data, raw.shape.rows, raw.shape.cols).map_err(de::Error::custom)
    }
}

// ─── Construction ───────────────────────────────────────────────────────────

impl<T: Float> Matrix<T> {
    /// Create a matrix from row-major data.
    pub fn new(data: Vec<T>, rows: usize, cols: usize) -> MatrixResult<Self> {
        let shape = Shape::new(rows, cols)?;
        if data.len() != shape.numel() {
            return Err(MatrixError::ShapeMismatch {
                expected: shape.numel(),
                got: data.len(),
            });
        }
        Ok(Matrix { data, shape })
    }

    /// Create a matrix filled with zeros.
    pub fn zeros(rows: usize, cols: usize) -> MatrixResult<Self> {
        Matrix::full(rows, cols, T::ZERO)
    }

    /// Create a matrix filled with a constant value.
    pub fn full(rows: usize, cols: usize, value: T) -> MatrixResult<Self> {
        let shape = Shape::new(rows, cols)?;
        Ok(Matrix {
            data: vec![value; shape.numel()],
            shape,
        })
    }

    /// Identity matrix of size n×n.
    pub fn eye(n: usize) -> MatrixResult<Self> {
        let mut m = Matrix::zeros(n, n)?;
        for i in 0..n {
            m.data[i * n + i] = T::ONE;
        }
        Ok(m)
    }

    /// Column vector (n×1) from a slice.
    pub fn column(values: &[T]) -> MatrixResult<Self> {
        Matrix::new(values.to_vec(), values.len(), 1)
    }

    /// Create a matrix from a list of rows. Jagged input is rejected.
    pub fn from_rows(rows: &[Vec<T>]) -> MatrixResult<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        Shape::new(n_rows, n_cols)?;
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n_cols {
                return Err(MatrixError::DimensionMismatch(format!(
                    "row {} has {} columns, expected {}",
                    i,
                    row.len(),
                    n_cols
                )));
            }
        }
        let flat: Vec<T> = rows.iter().flat_map(|r| r.iter().copied()).collect();
        Matrix::new(flat, n_rows, n_cols)
    }

    // ─── Accessors ──────────────────────────────────────────────────────────

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn rows(&self) -> usize {
        self.shape.rows
    }

    pub fn cols(&self) -> usize {
        self.shape.cols
    }

    pub fn numel(&self) -> usize {
        self.data.len()
    }

    pub fn is_square(&self) -> bool {
        self.shape.is_square()
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Checked element read.
    pub fn get(&self, row: usize, col: usize) -> MatrixResult<T> {
        self.offset(row, col).map(|o| self.data[o])
    }

    /// Checked element write.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> MatrixResult<()> {
        let o = self.offset(row, col)?;
        self.data[o] = value;
        Ok(())
    }

    fn offset(&self, row: usize, col: usize) -> MatrixResult<usize> {
        self.shape
            .offset(row, col)
            .ok_or(MatrixError::IndexOutOfBounds {
                row,
                col,
                rows: self.shape.rows,
                cols: self.shape.cols,
            })
    }

    /// Borrow row `i`. Panics when `i` is out of range.
    pub fn row(&self, i: usize) -> &[T] {
        let cols = self.shape.cols;
        &self.data[i * cols..(i + 1) * cols]
    }

    /// Mutably borrow row `i`. Panics when `i` is out of range.
    pub fn row_mut(&mut self, i: usize) -> &mut [T] {
        let cols = self.shape.cols;
        &mut self.data[i * cols..(i + 1) * cols]
    }

    /// Copy out column `j`.
    pub fn col(&self, j: usize) -> MatrixResult<Vec<T>> {
        if j >= self.shape.cols {
            return Err(MatrixError::IndexOutOfBounds {
                row: 0,
                col: j,
                rows: self.shape.rows,
                cols: self.shape.cols,
            });
        }
        Ok((0..self.shape.rows).map(|i| self.data[i * self.shape.cols + j]).collect())
    }

    // ─── Whole-matrix helpers ───────────────────────────────────────────────

    /// Reset every cell to zero, keeping the allocation.
    pub fn fill_zero(&mut self) {
        self.data.iter_mut().for_each(|v| *v = T::ZERO);
    }

    /// Largest absolute value of any cell.
    pub fn max_abs(&self) -> T {
        self.data.iter().fold(T::ZERO, |acc, &v| acc.max(v.abs()))
    }

    pub fn all_finite(&self) -> bool {
        self.data.iter().all(|v| v.is_finite())
    }

    /// Same shape and every pair of cells within `tol` of each other.
    pub fn approx_eq(&self, other: &Matrix<T>, tol: T) -> bool {
        self.shape == other.shape
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(&a, &b)| (a - b).abs() <= tol)
    }
}

// ─── Indexing ───────────────────────────────────────────────────────────────

impl<T: Float> ops::Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        match self.shape.offset(row, col) {
            Some(o) => &self.data[o],
            None => panic!(
                "index ({}, {}) out of bounds for matrix of shape {}",
                row, col, self.shape
            ),
        }
    }
}

impl<T: Float> ops::IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        match self.shape.offset(row, col) {
            Some(o) => &mut self.data[o],
            None => panic!(
                "index ({}, {}) out of bounds for matrix of shape {}",
                row, col, self.shape
            ),
        }
    }
}

// ─── Display ────────────────────────────────────────────────────────────────

impl<T: Float> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.shape.rows;
        let cols = self.shape.cols;
        writeln!(f, "matrix([")?;
        for i in 0..rows.min(8) {
            write!(f, "  [")?;
            for j in 0..cols.min(8) {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{:.4}", self.data[i * cols + j])?;
            }
            if cols > 8 {
                write!(f, ", ...")?;
            }
            writeln!(f, "],")?;
        }
        if rows > 8 {
            writeln!(f, "  ...")?;
        }
        write!(f, "], shape={})", self.shape)
    }
}
