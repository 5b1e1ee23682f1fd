use crate::error::{MatrixError, MatrixResult};
use serde::{Deserialize, Serialize};

/// Row and column count of a dense matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl Shape {
    /// Both dimensions must be at least one.
    pub fn new(rows: usize, cols: usize) -> MatrixResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::EmptyMatrix { rows, cols });
        }
        Ok(Shape { rows, cols })
    }

    /// Total number of elements.
    pub fn numel(&self) -> usize {
        self.rows * self.cols
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Row-major offset of `(row, col)`, or `None` when outside the grid.
    pub fn offset(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.rows && col < self.cols {
            Some(row * self.cols + col)
        } else {
            None
        }
    }

    /// Shape of the transpose.
    pub fn transposed(&self) -> Shape {
        Shape {
            rows: self.cols,
            cols: self.rows,
        }
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.rows, self.cols)
    }
}

impl TryFrom<(usize, usize)> for Shape {
    type Error = MatrixError;

    fn try_from((rows, cols): (usize, usize)) -> MatrixResult<Self> {
        Shape::new(rows, cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_basics() {
        let s = Shape::new(3, 4).unwrap();
        assert_eq!(s.numel(), 12);
        assert!(!s.is_square());
        assert!(Shape::new(2, 2).unwrap().is_square());
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(
            Shape::new(0, 3),
            Err(MatrixError::EmptyMatrix { rows: 0, cols: 3 })
        );
        assert!(Shape::try_from((4, 0)).is_err());
    }

    #[test]
    fn test_offset() {
        let s = Shape::new(2, 3).unwrap();
        assert_eq!(s.offset(0, 0), Some(0));
        assert_eq!(s.offset(1, 2), Some(5));
        assert_eq!(s.offset(2, 0), None);
        assert_eq!(s.offset(0, 3), None);
    }

    #[test]
    fn test_transpose() {
        let s = Shape::new(3, 4).unwrap();
        let t = s.transposed();
        assert_eq!((t.rows, t.cols), (4, 3));
        assert_eq!(t.transposed(), s);
    }

    #[test]
    fn test_display() {
        assert_eq!(Shape::new(5, 1).unwrap().to_string(), "(5, 1)");
    }
}
