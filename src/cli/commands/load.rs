use crate::cli::commands::open_dataset;
use crate::cli::parser::Cli;
use crate::errors::AppResult;
use crate::ui::messages::{info, status_success, success, warning};
use crate::utils::date::fmt_date;

/// Handle the `load` command: status line, types and default date range.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let (ds, report) = open_dataset(cli)?;

    success(status_success(ds.source_name()));
    info(format!("Rows: {}", report.rows));

    let types = ds.types();
    if types.is_empty() {
        warning("No event types found.");
    } else {
        info(format!("Types: {}", types.join(", ")));
    }

    match ds.date_bounds() {
        Some((from, to)) => info(format!(
            "Default date range: {} → {}",
            fmt_date(from),
            fmt_date(to)
        )),
        None => warning("No parsable Start dates: no default date range."),
    }

    Ok(())
}
