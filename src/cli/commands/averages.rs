use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::models::Dataset;
use crate::ui::messages::{header, warning};
use crate::utils::date::fmt_date;
use crate::utils::formatting::fmt_average;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config, ds: &Dataset) -> AppResult<()> {
    if let Commands::Averages { kind, range } = cmd {
        let Some(avg) = Core::averages(ds, cfg, kind.as_deref(), range.as_deref())? else {
            warning("No parsable Start dates in the file: pass --range to choose a period.");
            return Ok(());
        };

        header(format!(
            "Average daily values for {} ({} → {})",
            avg.kind,
            fmt_date(avg.from),
            fmt_date(avg.to)
        ));

        let mut table = Table::new(["Average Duration (Minutes)", "Average Number of Events"])
            .with_separator(&cfg.separator_char);
        table.add_row(vec![
            fmt_average(avg.average_duration),
            fmt_average(avg.average_events),
        ]);
        print!("{}", table.render());

        if avg.matched == 0 {
            warning(format!(
                "No '{}' events in the selected range: averages are undefined.",
                avg.kind
            ));
        }
    }
    Ok(())
}
