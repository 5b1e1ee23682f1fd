use std::fs;
use std::path::Path;

use estimate_linear::LinearRegression;
use serde::{Deserialize, Serialize};

use crate::error::{DatasetError, DatasetResult};

/// A fitted model together with the training set it came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedModel {
    pub dataset: String,
    pub num_attributes: usize,
    pub model: LinearRegression<f64>,
}

impl SavedModel {
    pub fn new(dataset: &str, num_attributes: usize, model: LinearRegression<f64>) -> Self {
        SavedModel {
            dataset: dataset.to_string(),
            num_attributes,
            model,
        }
    }

    /// The coefficient column must hold one intercept plus one weight per attribute.
    pub fn validate(&self) -> DatasetResult<()> {
        let w = self.model.coefficients()?;
        if w.cols() != 1 || w.rows() != self.num_attributes + 1 {
            return Err(DatasetError::InvalidModel(format!(
                "{} attributes need {} coefficients, found shape {}",
                self.num_attributes,
                self.num_attributes + 1,
                w.shape()
            )));
        }
        Ok(())
    }
}

/// Save a fitted model to a JSON file.
pub fn save_model<P: AsRef<Path>>(saved: &SavedModel, path: P) -> DatasetResult<()> {
    saved.validate()?;
    let json = serde_json::to_string_pretty(saved)?;
    fs::write(path.as_ref(), json).map_err(|source| DatasetError::Io {
        path: path.as_ref().to_path_buf(),
        source,
    })
}

/// Load a fitted model from a JSON file.
pub fn load_model<P: AsRef<Path>>(path: P) -> DatasetResult<SavedModel> {
    let json = fs::read_to_string(path.as_ref()).map_err(|source| DatasetError::Io {
        path: path.as_ref().to_path_buf(),
        source,
    })?;
    let saved: SavedModel = serde_json::from_str(&json)?;
    saved.validate()?;
    Ok(saved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use estimate_core::Matrix;

    fn fitted() -> LinearRegression<f64> {
        LinearRegression::from_coefficients(Matrix::column(&[1.0, 2.0]).unwrap()).unwrap()
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        save_model(&SavedModel::new("train", 1, fitted()), &path).unwrap();

        let loaded = load_model(&path).unwrap();
        assert_eq!(loaded.dataset, "train");
        assert_eq!(loaded.num_attributes, 1);
        let x = Matrix::from_rows(&[vec![1.0, 4.0]]).unwrap();
        assert_abs_diff_eq!(loaded.model.predict(&x).unwrap()[(0, 0)], 9.0, epsilon = 1e-12);
    }

    #[test]
    fn test_unfitted_model_not_saved() {
        let dir = tempfile::tempdir().unwrap();
        let saved = SavedModel::new("train", 1, LinearRegression::new());
        assert!(matches!(
            save_model(&saved, dir.path().join("m.json")),
            Err(DatasetError::Matrix(_))
        ));
    }

    #[test]
    fn test_inconsistent_model_rejected() {
        let saved = SavedModel::new("train", 3, fitted());
        assert!(matches!(saved.validate(), Err(DatasetError::InvalidModel(_))));
    }

    #[test]
    fn test_coefficient_data_must_match_shape() {
        let dir = tempfile::tempdir().unwrap();
        let short = dir.path().join("short.json");
        fs::write(
            &short,
            r#"{"dataset":"train","num_attributes":1,
               "model":{"coefficients":{"data":[1.0],"shape":{"rows":2,"cols":1}}}}"#,
        )
        .unwrap();
        let err = load_model(&short).unwrap_err();
        assert!(matches!(err, DatasetError::Json(_)));
        assert!(err.to_string().contains("Shape mismatch"), "{err}");

        let empty = dir.path().join("empty.json");
        fs::write(
            &empty,
            r#"{"dataset":"train","num_attributes":0,
               "model":{"coefficients":{"data":[],"shape":{"rows":0,"cols":1}}}}"#,
        )
        .unwrap();
        assert!(matches!(load_model(&empty), Err(DatasetError::Json(_))));
    }

    #[test]
    fn test_load_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(load_model(&path), Err(DatasetError::Json(_))));
        assert!(matches!(
            load_model(dir.path().join("missing.json")),
            Err(DatasetError::Io { .. })
        ));
    }
}
