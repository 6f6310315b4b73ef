use crate::cli::parser::Commands;
use crate::config::{Config, HeatmapStyle};
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::models::Dataset;
use crate::models::summary::{Heatmap, HeatmapMatrix, HourCount};
use crate::ui::messages::{header, info, warning};
use crate::utils::colors::{digit_cell, shade_cell};
use crate::utils::formatting::{fmt_hour, pad_left};
use crate::utils::table::Table;
use chrono::Datelike;

const BAR_WIDTH: usize = 30;

pub fn handle(cmd: &Commands, cfg: &Config, ds: &Dataset) -> AppResult<()> {
    if let Commands::Heatmap {
        kind,
        by_hour,
        range,
    } = cmd
    {
        let grouping = Commands::grouping(*by_hour);

        match Core::heatmap(ds, kind, grouping, range.as_deref())? {
            Heatmap::HourAndDay { matrix } => {
                header(format!(
                    "Calendar Heatmap of Events by Hour and Day for {kind}"
                ));
                if matrix.days.is_empty() {
                    warning(format!("No '{kind}' events with a valid Start date."));
                    return Ok(());
                }
                print!("{}", render_matrix(&matrix, cfg.heatmap_style));
                if cfg.heatmap_style == HeatmapStyle::Shade {
                    info(format!(
                        "Scale: {} 1 … {} {}",
                        shade_cell(1, matrix.max()),
                        shade_cell(matrix.max(), matrix.max()),
                        matrix.max()
                    ));
                }
                info(format!(
                    "{} events over {} days",
                    matrix.total(),
                    matrix.days.len()
                ));
            }
            Heatmap::Hour { hours } => {
                header(format!("Events by Hour of Day for {kind}"));
                if hours.is_empty() {
                    warning(format!("No '{kind}' events in the selected range."));
                    return Ok(());
                }
                print!("{}", render_hours(&hours, &cfg.separator_char));
            }
        }
    }
    Ok(())
}

/// 24 hour rows × one column per day; empty cells are drawn, never skipped.
pub fn render_matrix(matrix: &HeatmapMatrix, style: HeatmapStyle) -> String {
    let same_year = match (matrix.days.first(), matrix.days.last()) {
        (Some(a), Some(b)) => a.year() == b.year(),
        _ => true,
    };
    let label_fmt = if same_year { "%m-%d" } else { "%Y-%m-%d" };

    let digits = matrix.max().to_string().len();
    let label_len = if same_year { 5 } else { 10 };
    let width = label_len.max(digits);
    let max = matrix.max();

    let mut out = String::from("Hour ");
    for day in &matrix.days {
        out.push(' ');
        out.push_str(&pad_left(&day.format(label_fmt).to_string(), width));
    }
    out.push('\n');

    for (hour, row) in matrix.counts.iter().enumerate() {
        out.push_str(&fmt_hour(hour as u32));
        for &count in row {
            out.push(' ');
            match style {
                HeatmapStyle::Digits => out.push_str(&digit_cell(count, width)),
                HeatmapStyle::Shade => {
                    out.push_str(&" ".repeat(width.saturating_sub(2)));
                    out.push_str(&shade_cell(count, max));
                }
            }
        }
        out.push('\n');
    }

    out
}

pub fn render_hours(hours: &[HourCount], separator: &str) -> String {
    let max = hours.iter().map(|h| h.count).max().unwrap_or(0);

    let mut table = Table::new(["Hour", "Event Count", ""]).with_separator(separator);
    for h in hours {
        let bar_len = if max == 0 {
            0
        } else {
            (h.count * BAR_WIDTH).div_ceil(max)
        };
        table.add_row(vec![
            fmt_hour(h.hour),
            h.count.to_string(),
            "█".repeat(bar_len),
        ]);
    }
    table.render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::table::visible_width;
    use chrono::NaiveDate;

    fn matrix() -> HeatmapMatrix {
        let mut counts = vec![vec![0; 2]; 24];
        counts[3][0] = 1;
        counts[14][1] = 12;
        HeatmapMatrix {
            days: vec![
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            ],
            counts,
        }
    }

    #[test]
    fn digits_matrix_shows_every_hour_with_zeros() {
        let out = render_matrix(&matrix(), HeatmapStyle::Digits);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 25);
        assert_eq!(lines[0], "Hour  01-01 01-02");
        assert!(lines[4].starts_with("03:00     1"));
        assert!(lines[15].ends_with("   12"));
        // zero cells are rendered (greyed), not blank
        assert!(lines[1].contains('0'));
    }

    #[test]
    fn shaded_rows_keep_column_alignment() {
        let out = render_matrix(&matrix(), HeatmapStyle::Shade);
        let widths: Vec<usize> = out.lines().map(visible_width).collect();
        assert!(widths.iter().all(|w| *w == widths[0]));
    }

    #[test]
    fn hour_bars_scale_to_the_busiest_hour() {
        let out = render_hours(
            &[HourCount { hour: 3, count: 1 }, HourCount { hour: 14, count: 2 }],
            "-",
        );
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[2].starts_with("03:00"));
        assert_eq!(lines[2].matches('█').count(), 15);
        assert_eq!(lines[3].matches('█').count(), 30);
    }
}
