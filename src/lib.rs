//! eldsheet library root.
//! Exposes the sheet rendering engine, its exporters, the CLI parser and the
//! high-level run() function.

pub mod cli;
pub mod config;
pub mod errors;
pub mod export;
pub mod models;
pub mod render;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use utils::path::expand_tilde;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
        Commands::Render { .. } => cli::commands::render::handle(cli, cfg),
        Commands::Summary { .. } => cli::commands::summary::handle(cli),
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    // a second init (e.g. from tests) is harmless
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp_secs()
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // 2️⃣ `init` writes the config, everything else reads it once
    let cfg = match cli.command {
        Commands::Init => Config::default(),
        _ => Config::load(cli.config.as_deref().map(expand_tilde).as_deref())?,
    };

    // 3️⃣ dispatch
    dispatch(&cli, &cfg)
}
