use crate::config::Config;
use crate::core::calculator::heatmap::{HeatmapGrouping, HeatmapQuery};
use crate::core::calculator::{averages, counts, heatmap, pairing};
use crate::errors::{AppError, AppResult};
use crate::models::Dataset;
use crate::models::summary::{ClosePair, DayCount, Heatmap, RangeAverages};
use crate::utils::date::parse_range;
use chrono::{Duration, NaiveDate};
use tracing::debug;

/// Entry points used by the CLI: resolve user selections against the
/// configuration and the dataset, then run the calculators.
pub struct Core;

impl Core {
    /// `None` or `"all"` → the dataset's own date bounds (which may be absent);
    /// anything else goes through `parse_range`.
    pub fn resolve_range(
        ds: &Dataset,
        range: Option<&str>,
    ) -> AppResult<Option<(NaiveDate, NaiveDate)>> {
        match range {
            None => Ok(ds.date_bounds()),
            Some(r) if r.eq_ignore_ascii_case("all") => Ok(ds.date_bounds()),
            Some(r) => parse_range(r).map(Some),
        }
    }

    pub fn counts(ds: &Dataset, kind: &str) -> Vec<DayCount> {
        counts::count_by_day(ds, kind)
    }

    /// Range averages for `kind` (default: `cfg.averages_type`).
    /// `Ok(None)` when no range was given and the dataset has no dated events.
    pub fn averages(
        ds: &Dataset,
        cfg: &Config,
        kind: Option<&str>,
        range: Option<&str>,
    ) -> AppResult<Option<RangeAverages>> {
        let kind = kind.unwrap_or(&cfg.averages_type);
        let Some((from, to)) = Self::resolve_range(ds, range)? else {
            debug!("no date range available for averages");
            return Ok(None);
        };
        Ok(Some(averages::range_averages(ds, kind, from, to)))
    }

    pub fn heatmap(
        ds: &Dataset,
        kind: &str,
        grouping: HeatmapGrouping,
        range: Option<&str>,
    ) -> AppResult<Heatmap> {
        let range = match range {
            Some(_) => Self::resolve_range(ds, range)?,
            None => None,
        };
        let query = HeatmapQuery {
            kind,
            range,
            grouping,
        };
        Ok(heatmap::build_heatmap(ds, &query))
    }

    /// Close-interval pairs; unset arguments fall back to the configuration.
    pub fn pairs(
        ds: &Dataset,
        cfg: &Config,
        first: Option<&str>,
        second: Option<&str>,
        window_minutes: Option<i64>,
    ) -> AppResult<Vec<ClosePair>> {
        let first = first.unwrap_or(&cfg.pairing_first_type);
        let second = second.unwrap_or(&cfg.pairing_second_type);
        let window = pairing_window(window_minutes.unwrap_or(cfg.pairing_window_minutes))?;
        Ok(pairing::close_pairs(ds, first, second, window))
    }
}

/// Window in minutes as a `Duration`; must be non-negative and representable.
fn pairing_window(minutes: i64) -> AppResult<Duration> {
    if minutes < 0 {
        return Err(AppError::InvalidRange(format!(
            "pairing window must not be negative (got {minutes})"
        )));
    }
    Duration::try_minutes(minutes)
        .ok_or_else(|| AppError::InvalidRange(format!("pairing window too large: {minutes} minutes")))
}
