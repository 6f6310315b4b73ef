use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::{ExportLogic, ExportRequest};
use crate::models::Dataset;

pub fn handle(cmd: &Commands, cfg: &Config, ds: &Dataset) -> AppResult<()> {
    if let Commands::Export {
        report,
        format,
        out,
        kind,
        range,
        first,
        second,
        window,
        force,
    } = cmd
    {
        let req = ExportRequest {
            report: *report,
            format: *format,
            out: out.clone(),
            force: *force,
            kind: kind.clone(),
            range: range.clone(),
            first: first.clone(),
            second: second.clone(),
            window: *window,
        };
        ExportLogic::export(ds, cfg, &req)?;
    }
    Ok(())
}
