use crate::cli::parser::{Cli, Commands};
use crate::config::{Config, check::missing_keys};
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::utils::path::expand_tilde;
use std::fs;

/// Handle the `config` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = &cli.command
    {
        let path = cli
            .config
            .as_deref()
            .map(expand_tilde)
            .unwrap_or_else(Config::config_file);

        // ---- PRINT CONFIG ----
        if *print_config {
            info(format!("Current configuration ({}):", path.display()));
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        // ---- CHECK CONFIG ----
        if *check {
            if !path.exists() {
                warning(format!(
                    "No config file at {}, defaults are in use.",
                    path.display()
                ));
                return Ok(());
            }

            // `cfg` was already validated while loading
            let missing = missing_keys(&fs::read_to_string(&path)?)?;
            if missing.is_empty() {
                success("Configuration is valid and complete.");
            } else {
                warning(format!(
                    "Configuration is valid; missing fields use defaults: {}",
                    missing.join(", ")
                ));
            }
        }
    }

    Ok(())
}
