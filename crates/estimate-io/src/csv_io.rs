use std::io::Write;
use std::path::Path;

use estimate_core::{Matrix, MatrixError};

use crate::error::{DatasetError, DatasetResult};

/// Write a prediction column as CSV with a `row,prediction` header.
/// Values are written at full precision.
pub fn write_predictions<W: Write>(writer: W, predictions: &Matrix<f64>) -> DatasetResult<()> {
    if predictions.cols() != 1 {
        return Err(MatrixError::DimensionMismatch(format!(
            "predictions must be a column vector, got {}",
            predictions.shape()
        ))
        .into());
    }

    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["row", "prediction"])?;
    for (i, value) in predictions.data().iter().enumerate() {
        wtr.write_record(&[i.to_string(), value.to_string()])?;
    }
    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Write predictions to a CSV file at `path`.
pub fn write_predictions_csv<P: AsRef<Path>>(path: P, predictions: &Matrix<f64>) -> DatasetResult<()> {
    let file = std::fs::File::create(path.as_ref()).map_err(|source| DatasetError::Io {
        path: path.as_ref().to_path_buf(),
        source,
    })?;
    write_predictions(file, predictions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_predictions() {
        let pred = Matrix::column(&[9.0, 12.5]).unwrap();
        let mut buf = Vec::new();
        write_predictions(&mut buf, &pred).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "row,prediction\n0,9\n1,12.5\n");
    }

    #[test]
    fn test_write_predictions_rejects_matrix() {
        let pred: Matrix<f64> = Matrix::zeros(2, 2).unwrap();
        assert!(write_predictions(Vec::new(), &pred).is_err());
    }

    #[test]
    fn test_write_predictions_csv_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pred.csv");
        write_predictions_csv(&path, &Matrix::column(&[1.0]).unwrap()).unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let headers = rdr.headers().unwrap().clone();
        assert_eq!(&headers[1], "prediction");
        let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][1], "1");
    }
}
