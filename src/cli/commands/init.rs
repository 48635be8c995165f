use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;

/// Handle the `init` command: write the default configuration file.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let target = cli.config.as_deref().map(expand_tilde);
    let path = Config::init(target.as_deref())?;

    success(format!("Config file: {}", path.display()));
    Ok(())
}
