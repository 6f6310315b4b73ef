use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::models::Dataset;
use crate::ui::messages::{header, info};
use crate::utils::formatting::plural;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config, ds: &Dataset) -> AppResult<()> {
    if let Commands::Pairs {
        first,
        second,
        window,
    } = cmd
    {
        let first = first.as_deref().unwrap_or(&cfg.pairing_first_type);
        let second = second.as_deref().unwrap_or(&cfg.pairing_second_type);
        let minutes = window.unwrap_or(cfg.pairing_window_minutes);

        let pairs = Core::pairs(ds, cfg, Some(first), Some(second), Some(minutes))?;

        header(format!(
            "{first} within {minutes} min of a {second} ending at the same location"
        ));

        if pairs.is_empty() {
            info("No close pairs found.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            "Start Location".to_string(),
            format!("{first} Start"),
            format!("{second} End"),
            "Gap (min)".to_string(),
        ])
        .with_separator(&cfg.separator_char);

        for p in &pairs {
            table.add_row(vec![
                p.location.clone(),
                p.first_start.format("%Y-%m-%d %H:%M").to_string(),
                p.second_end.format("%Y-%m-%d %H:%M").to_string(),
                format!("{:+}", p.gap_minutes),
            ]);
        }
        print!("{}", table.render());
        info(plural(pairs.len(), "pair", "pairs"));
    }
    Ok(())
}
