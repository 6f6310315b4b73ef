// src/export/logic.rs

use crate::config::Config;
use crate::core::calculator::heatmap::HeatmapGrouping;
use crate::core::logic::Core;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::Report;
use crate::export::xlsx::export_xlsx;
use crate::export::{ExportFormat, ReportKind};
use crate::models::Dataset;
use crate::models::summary::Heatmap;
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;
use tracing::debug;

/// What to export and where.
#[derive(Debug, Clone)]
pub struct ExportRequest {
    pub report: ReportKind,
    pub format: ExportFormat,
    pub out: String,
    pub force: bool,
    /// Type filter; required by counts/heatmap/hours, optional for averages.
    pub kind: Option<String>,
    pub range: Option<String>,
    pub first: Option<String>,
    pub second: Option<String>,
    pub window: Option<i64>,
}

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    pub fn export(ds: &Dataset, cfg: &Config, req: &ExportRequest) -> AppResult<()> {
        let report = Self::build_report(ds, cfg, req)?;

        if report.is_empty() {
            warning("No events found for the selected type and range: nothing exported.");
            return Ok(());
        }

        let path = expand_tilde(&req.out);
        ensure_writable(&path, req.force)?;

        debug!(
            report = ?req.report,
            format = req.format.as_str(),
            rows = report.rows.len(),
            "writing report"
        );

        match req.format {
            ExportFormat::Csv => export_csv(&report, &path),
            ExportFormat::Json => export_json(&report, &path),
            ExportFormat::Xlsx => export_xlsx(&report, &path),
        }
    }

    /// Compute the requested result table without writing anything.
    pub fn build_report(ds: &Dataset, cfg: &Config, req: &ExportRequest) -> AppResult<Report> {
        match req.report {
            ReportKind::Counts => {
                let kind = required_type(req)?;
                Report::counts(kind, &Core::counts(ds, kind))
            }
            ReportKind::Averages => {
                match Core::averages(ds, cfg, req.kind.as_deref(), req.range.as_deref())? {
                    Some(avg) => Report::averages(&avg),
                    None => Err(AppError::InvalidRange(
                        "the dataset has no dated events; pass --range".to_string(),
                    )),
                }
            }
            ReportKind::Heatmap => {
                let kind = required_type(req)?;
                match Core::heatmap(ds, kind, HeatmapGrouping::HourAndDay, req.range.as_deref())? {
                    Heatmap::HourAndDay { matrix } => Report::heatmap(kind, &matrix),
                    Heatmap::Hour { .. } => Err(AppError::Other("unexpected heatmap shape".into())),
                }
            }
            ReportKind::Hours => {
                let kind = required_type(req)?;
                match Core::heatmap(ds, kind, HeatmapGrouping::Hour, req.range.as_deref())? {
                    Heatmap::Hour { hours } => Report::hours(kind, &hours),
                    Heatmap::HourAndDay { .. } => {
                        Err(AppError::Other("unexpected heatmap shape".into()))
                    }
                }
            }
            ReportKind::Pairs => {
                let first = req.first.as_deref().unwrap_or(&cfg.pairing_first_type);
                let second = req.second.as_deref().unwrap_or(&cfg.pairing_second_type);
                let pairs = Core::pairs(ds, cfg, Some(first), Some(second), req.window)?;
                Report::pairs(first, second, &pairs)
            }
        }
    }
}

fn required_type(req: &ExportRequest) -> AppResult<&str> {
    req.kind.as_deref().ok_or_else(|| {
        AppError::Export(format!(
            "--type is required for the '{:?}' report",
            req.report
        ))
    })
}
