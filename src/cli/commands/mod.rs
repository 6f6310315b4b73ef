pub mod averages;
pub mod config;
pub mod counts;
pub mod export;
pub mod heatmap;
pub mod init;
pub mod load;
pub mod pairs;

use crate::cli::parser::Cli;
use crate::errors::{AppError, AppResult};
use crate::ingest::{LoadReport, load_dataset};
use crate::models::Dataset;
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;

/// Load the file named by `--file`, warning about degraded fields.
pub fn open_dataset(cli: &Cli) -> AppResult<(Dataset, LoadReport)> {
    let file = cli.file.as_deref().ok_or(AppError::NoDataset)?;
    let (ds, report) = load_dataset(&expand_tilde(file))?;

    if report.degraded() > 0 {
        warning(format!(
            "{} value(s) could not be parsed and were left empty (Start: {}, End: {}, Duration: {})",
            report.degraded(),
            report.unparsed_starts,
            report.unparsed_ends,
            report.unparsed_durations
        ));
    }

    Ok((ds, report))
}
