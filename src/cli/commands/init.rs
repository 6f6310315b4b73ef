use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `init` command: write the default configuration file.
pub fn handle(cli: &Cli) -> AppResult<()> {
    println!("⚙️  Initializing rCareLog…");
    Config::init_all(cli.test)?;
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🎉 rCareLog initialization completed!");
    Ok(())
}
