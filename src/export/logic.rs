// src/export/logic.rs

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::{ensure_dir, ensure_writable};
use crate::export::json::sheets_to_json;
use crate::export::pdf::PdfManager;
use crate::export::svg::SvgSurface;
use crate::export::{ExportFormat, notify_export_success};
use crate::models::LogEntry;
use crate::render::trip::{DayFailure, partition, render_trip_scenes};
use crate::render::{RenderedSheet, Scene, SheetComposer};
use crate::ui::messages::{error, info, warning};
use std::fs;
use std::path::{Path, PathBuf};

/// Logica di alto livello per l'export dei fogli.
pub struct ExportLogic;

impl ExportLogic {
    /// Render every day and write the ones that succeeded.
    ///
    /// - `pdf`: `out` is a file, one page per day
    /// - `svg`: `out` is a directory, one `day-NN.svg` per day
    /// - `json`: `out` is a file with each day's summary and scene
    ///
    /// Failed days are reported and skipped; the call then ends with
    /// `AppError::DaysFailed`.
    pub fn export(
        logs: &[LogEntry],
        cfg: &Config,
        format: ExportFormat,
        out: &Path,
        force: bool,
    ) -> AppResult<()> {
        if logs.is_empty() {
            warning("No daily logs to render.");
            return Ok(());
        }

        let composer = SheetComposer::new(&cfg.layout, &cfg.palette);
        let (sheets, failures) = partition(render_trip_scenes(logs, &composer));

        for failure in &failures {
            report_failure(failure);
        }

        if !sheets.is_empty() {
            info(format!(
                "Exporting {} sheet(s) to {}: {}",
                sheets.len(),
                format.as_str().to_uppercase(),
                out.display()
            ));

            match format {
                ExportFormat::Pdf => export_pdf(&sheets, cfg, out, force)?,
                ExportFormat::Svg => {
                    export_svg(&sheets, cfg, out, force)?;
                }
                ExportFormat::Json => export_json(&sheets, out, force)?,
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(AppError::DaysFailed {
                failed: failures.len(),
                total: logs.len(),
            })
        }
    }
}

fn report_failure(failure: &DayFailure) {
    let date = failure
        .date
        .map(|d| d.to_string())
        .unwrap_or_else(|| "unknown date".to_string());
    log::warn!("day {} ({}) rejected: {}", failure.day_number, date, failure.error);
    error(failure);
}

pub(crate) fn export_pdf(
    sheets: &[RenderedSheet<Scene>],
    cfg: &Config,
    path: &Path,
    force: bool,
) -> AppResult<()> {
    ensure_writable(path, force)?;

    let mut pdf = PdfManager::new(&cfg.font, &cfg.bold_font);
    for sheet in sheets {
        pdf.add_sheet(&sheet.surface);
    }

    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}

/// Returns the written files, in day order. Earlier `day-NN.svg` files left
/// in `dir` are removed with `force`, otherwise reported.
pub(crate) fn export_svg(
    sheets: &[RenderedSheet<Scene>],
    cfg: &Config,
    dir: &Path,
    force: bool,
) -> AppResult<Vec<PathBuf>> {
    ensure_dir(dir)?;

    let mut written = Vec::with_capacity(sheets.len());
    for sheet in sheets {
        let path = dir.join(svg_file_name(sheet.day_number));
        ensure_writable(&path, force)?;

        let mut svg = SvgSurface::new(&cfg.font);
        sheet.surface.replay(&mut svg);
        fs::write(&path, svg.finish())?;

        log::info!("wrote {}", path.display());
        written.push(path);
    }

    let stale = stale_svg_files(dir, &written)?;
    if !stale.is_empty() {
        if force {
            for path in &stale {
                fs::remove_file(path)?;
                log::info!("removed stale {}", path.display());
            }
        } else {
            let names: Vec<String> = stale
                .iter()
                .filter_map(|p| p.file_name())
                .map(|n| n.to_string_lossy().into_owned())
                .collect();
            warning(format!(
                "Stale sheets from an earlier render left in {}: {} (use --force to remove them)",
                dir.display(),
                names.join(", ")
            ));
        }
    }

    notify_export_success("SVG", dir);
    Ok(written)
}

/// `day-NN.svg` files in `dir` that this export did not write.
fn stale_svg_files(dir: &Path, written: &[PathBuf]) -> AppResult<Vec<PathBuf>> {
    let mut stale = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_sheet = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(is_svg_sheet_name);
        if is_sheet && path.is_file() && !written.contains(&path) {
            stale.push(path);
        }
    }
    stale.sort();
    Ok(stale)
}

pub(crate) fn export_json(sheets: &[RenderedSheet<Scene>], path: &Path, force: bool) -> AppResult<()> {
    ensure_writable(path, force)?;
    fs::write(path, sheets_to_json(sheets)?)?;
    notify_export_success("JSON", path);
    Ok(())
}

pub fn svg_file_name(day_number: usize) -> String {
    format!("day-{day_number:02}.svg")
}

fn is_svg_sheet_name(name: &str) -> bool {
    name.strip_prefix("day-")
        .and_then(|rest| rest.strip_suffix(".svg"))
        .is_some_and(|n| !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()))
}
