// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::{Report, notify_export_success};
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed, wrapped with the report title.
pub(crate) fn export_json(report: &Report, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let doc = serde_json::json!({
        "title": report.title,
        "data": report.json,
    });
    let json_data = serde_json::to_string_pretty(&doc)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV with the report headers as first row.
pub(crate) fn export_csv(report: &Report, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(&report.headers)?;
    for row in &report.rows {
        wtr.write_record(row)?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
