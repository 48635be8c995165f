use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::models::TripLogs;
use crate::utils::path::expand_tilde;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Render {
        input,
        format,
        out,
        force,
    } = &cli.command
    {
        let logs = TripLogs::load(&expand_tilde(input))?;
        log::info!("loaded {} daily log(s) from {}", logs.len(), input);

        ExportLogic::export(&logs, cfg, *format, &expand_tilde(out), *force)?;
    }
    Ok(())
}
