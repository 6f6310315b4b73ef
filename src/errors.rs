//! Unified application error type.
//! All modules (ingest, core, export, cli, utils) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Ingestion
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The header row is not exactly the expected column list.
    #[error("CSV format does not match the expected columns")]
    SchemaMismatch { found: Vec<String> },

    #[error("The file '{0}' contains no header row")]
    EmptyFile(String),

    #[error("No dataset loaded: pass a CSV file with --file <PATH>")]
    NoDataset,

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_mismatch_message_is_human_readable() {
        let err = AppError::SchemaMismatch {
            found: vec!["Type".into(), "Start".into()],
        };
        assert_eq!(
            err.to_string(),
            "CSV format does not match the expected columns"
        );
    }
}
