use std::io::{self, Write};
use std::process::ExitCode;

use estimate_io::DatasetError;
use log::LevelFilter;

mod config;
mod pipeline;

use config::EstimateConfig;

/// Exit status when the training and query attribute counts differ.
const EXIT_ATTRIBUTE_MISMATCH: u8 = 2;

fn main() -> ExitCode {
    let matches = config::command().get_matches();
    let config = EstimateConfig::from_matches(&matches);

    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("ESTIMATE_LOG", config.log_filter()))
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = pipeline::run(&config, &mut out);
    let _ = out.flush();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{:#}", e);
            match e.downcast_ref::<DatasetError>() {
                Some(DatasetError::AttributeMismatch { .. }) => {
                    ExitCode::from(EXIT_ATTRIBUTE_MISMATCH)
                }
                _ => ExitCode::FAILURE,
            }
        }
    }
}
