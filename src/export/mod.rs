// src/export/mod.rs

mod excel_date;
mod fs_utils;
mod json_csv;
pub mod logic;
pub mod model;
mod xlsx;

pub use logic::{ExportLogic, ExportRequest};
pub use model::Report;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Common completion message for every export.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
        }
    }
}

/// Which result table to export.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportKind {
    /// Events per day for one type
    Counts,
    /// Average duration and events/day over a range
    Averages,
    /// Hour × day matrix
    Heatmap,
    /// Hour-of-day histogram
    Hours,
    /// Close-interval pairs
    Pairs,
}
