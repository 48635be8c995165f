use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for eldsheet
/// Render driver's daily log sheets from HOS engine output
#[derive(Parser)]
#[command(
    name = "eldsheet",
    version = env!("CARGO_PKG_VERSION"),
    about = "Render FMCSA driver's daily log sheets (24-hour duty-status grids) from ELD log JSON",
    long_about = None
)]
pub struct Cli {
    /// Use this configuration file instead of ~/.eldsheet/eldsheet.conf
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Show debug diagnostics (same as RUST_LOG=debug)
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a configuration file with the default layout and palette
    Init,

    /// Show or check the configuration
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(
            long = "check",
            help = "Validate the configuration file and list missing fields"
        )]
        check: bool,
    },

    /// Render one sheet per daily log
    Render {
        /// Trip JSON: an array of daily logs or an object with `eld_logs`
        input: String,

        #[arg(long, value_enum, default_value = "pdf")]
        format: ExportFormat,

        /// Output file (pdf, json) or directory (svg)
        #[arg(long, short = 'o', value_name = "PATH")]
        out: String,

        #[arg(long, short = 'f', help = "Overwrite existing output without asking")]
        force: bool,
    },

    /// Print driving/on-duty/off-duty hours and miles per day
    Summary {
        /// Trip JSON: an array of daily logs or an object with `eld_logs`
        input: String,

        #[arg(long, value_name = "FILE", help = "Also write the summary as CSV")]
        csv: Option<String>,
    },
}
