// src/export/mod.rs

mod csv;
mod fs_utils;
mod json;
pub mod logic;
mod pdf;
mod svg;

pub use csv::{SummaryRow, write_summary_csv};
pub use json::sheets_to_json;
pub use logic::ExportLogic;
pub use pdf::PdfManager;
pub use svg::SvgSurface;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Messaggio comune di fine export.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Pdf,
    Svg,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Svg => "svg",
            ExportFormat::Json => "json",
        }
    }
}
