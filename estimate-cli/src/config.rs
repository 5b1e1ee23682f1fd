use std::path::PathBuf;

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};

/// Everything one `estimate` run needs, collected from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimateConfig {
    pub train_path: PathBuf,
    pub data_path: PathBuf,
    pub output: Option<PathBuf>,
    pub save_model: Option<PathBuf>,
    pub print_coefficients: bool,
    pub verbosity: u8,
}

impl EstimateConfig {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        EstimateConfig {
            train_path: matches
                .get_one::<PathBuf>("train")
                .cloned()
                .unwrap_or_default(),
            data_path: matches
                .get_one::<PathBuf>("data")
                .cloned()
                .unwrap_or_default(),
            output: matches.get_one::<PathBuf>("output").cloned(),
            save_model: matches.get_one::<PathBuf>("save_model").cloned(),
            print_coefficients: matches.get_flag("coefficients"),
            verbosity: matches.get_count("verbose"),
        }
    }

    /// Default log filter for the chosen verbosity; `ESTIMATE_LOG` overrides it.
    pub fn log_filter(&self) -> &'static str {
        match self.verbosity {
            0 => "error,estimate=warn",
            1 => "error,estimate=info",
            _ => "error,estimate=debug",
        }
    }
}

pub fn command() -> Command {
    Command::new("estimate")
        .version(clap::crate_version!())
        .about("Fit ordinary least squares on a training set and predict a second dataset")
        .arg(
            Arg::new("train")
                .help("Training set: name, attribute count, row count, then rows of attributes and target")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("data")
                .help("Query set: same header, rows of attributes only")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Also write full-precision predictions to this CSV file")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("save_model")
                .long("save-model")
                .help("Write the fitted coefficients to this JSON file")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("coefficients")
                .long("coefficients")
                .help("Print the fitted coefficients to stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Increase log verbosity (-v info, -vv debug)")
                .action(ArgAction::Count),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_paths() {
        let matches = command()
            .try_get_matches_from(["estimate", "train.txt", "data.txt"])
            .unwrap();
        let config = EstimateConfig::from_matches(&matches);
        assert_eq!(config.train_path, PathBuf::from("train.txt"));
        assert_eq!(config.data_path, PathBuf::from("data.txt"));
        assert_eq!(config.output, None);
        assert_eq!(config.save_model, None);
        assert!(!config.print_coefficients);
        assert_eq!(config.log_filter(), "error,estimate=warn");
    }

    #[test]
    fn test_optional_flags() {
        let matches = command()
            .try_get_matches_from([
                "estimate",
                "train.txt",
                "data.txt",
                "-o",
                "pred.csv",
                "--save-model",
                "model.json",
                "--coefficients",
                "-vv",
            ])
            .unwrap();
        let config = EstimateConfig::from_matches(&matches);
        assert_eq!(config.output, Some(PathBuf::from("pred.csv")));
        assert_eq!(config.save_model, Some(PathBuf::from("model.json")));
        assert!(config.print_coefficients);
        assert_eq!(config.verbosity, 2);
        assert_eq!(config.log_filter(), "error,estimate=debug");
    }

    #[test]
    fn test_missing_query_path() {
        assert!(command().try_get_matches_from(["estimate", "train.txt"]).is_err());
    }
}
