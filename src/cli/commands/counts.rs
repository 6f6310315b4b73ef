use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::models::Dataset;
use crate::ui::messages::{header, info, warning};
use crate::utils::date::fmt_date;
use crate::utils::formatting::plural;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config, ds: &Dataset) -> AppResult<()> {
    if let Commands::Counts { kind } = cmd {
        let counts = Core::counts(ds, kind);

        header(format!("Event Count Over Time for {kind}"));

        if counts.is_empty() {
            warning(format!("No '{kind}' events with a valid Start date."));
            return Ok(());
        }

        let mut table = Table::new(["Start", "Event Count"]).with_separator(&cfg.separator_char);
        for c in &counts {
            table.add_row(vec![fmt_date(c.day), c.count.to_string()]);
        }
        print!("{}", table.render());

        let total: usize = counts.iter().map(|c| c.count).sum();
        info(format!(
            "Total: {} on {}",
            plural(total, "event", "events"),
            plural(counts.len(), "day", "days")
        ));
    }
    Ok(())
}
