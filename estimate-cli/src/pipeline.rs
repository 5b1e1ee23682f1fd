use std::io::Write;

use anyhow::{anyhow, Context, Result};
use estimate_io::{
    check_compatible, load_text, parse_dataset, parse_header, save_model, write_predictions_csv,
    DatasetKind, SavedModel,
};
use estimate_linear::{r2_score, rmse, LinearRegression};

use crate::config::EstimateConfig;

/// Predictions are printed with no decimal places.
pub fn format_prediction(value: f64) -> String {
    format!("{:.0}", value)
}

/// Train on `config.train_path`, predict `config.data_path`, print one line per
/// query row to `out`.
///
/// When the two files declare different attribute counts the literal line
/// `error` is written to `out` and the attribute mismatch is returned before
/// any regression work starts.
pub fn run<W: Write>(config: &EstimateConfig, out: &mut W) -> Result<()> {
    let train_text = load_text(&config.train_path)?;
    let query_text = load_text(&config.data_path)?;

    let train_header = parse_header(&train_text)
        .with_context(|| format!("reading header of {}", config.train_path.display()))?;
    let query_header = parse_header(&query_text)
        .with_context(|| format!("reading header of {}", config.data_path.display()))?;
    if let Err(e) = check_compatible(&train_header, &query_header) {
        writeln!(out, "error")?;
        return Err(e.into());
    }

    let training = parse_dataset(&train_text, DatasetKind::Training)
        .with_context(|| format!("parsing training set {}", config.train_path.display()))?;
    let query = parse_dataset(&query_text, DatasetKind::Query)
        .with_context(|| format!("parsing query set {}", config.data_path.display()))?;
    let targets = training
        .targets
        .as_ref()
        .ok_or_else(|| anyhow!("training set `{}` has no targets", training.name()))?;

    let mut model = LinearRegression::new();
    model
        .fit(&training.features, targets)
        .with_context(|| format!("fitting training set `{}`", training.name()))?;

    let fitted = model.predict(&training.features)?;
    log::info!(
        "fit on {} rows, {} attributes: R² = {:.4}, RMSE = {:.4}",
        training.num_rows(),
        training.num_attributes(),
        r2_score(targets, &fitted)?,
        rmse(targets, &fitted)?
    );

    if config.print_coefficients {
        for (i, w) in model.coefficients()?.data().iter().enumerate() {
            eprintln!("w[{}] = {}", i, w);
        }
    }

    if let Some(path) = &config.save_model {
        let saved = SavedModel::new(training.name(), training.num_attributes(), model.clone());
        save_model(&saved, path)?;
        log::info!("saved model to {}", path.display());
    }

    let predictions = model.predict(&query.features)?;
    for value in predictions.data() {
        writeln!(out, "{}", format_prediction(*value))?;
    }

    if let Some(path) = &config.output {
        write_predictions_csv(path, &predictions)?;
        log::info!("wrote {} predictions to {}", predictions.rows(), path.display());
    }

    Ok(())
}
