// src/export/json.rs

use crate::errors::AppResult;
use crate::render::{RenderedSheet, Scene, SheetSummary};
use serde::Serialize;

#[derive(Serialize)]
struct SheetDocument<'a> {
    day_number: usize,
    summary: &'a SheetSummary,
    scene: &'a Scene,
}

/// Pretty-printed JSON array with each day's summary and recorded scene.
pub fn sheets_to_json(sheets: &[RenderedSheet<Scene>]) -> AppResult<String> {
    let docs: Vec<SheetDocument<'_>> = sheets
        .iter()
        .map(|s| SheetDocument {
            day_number: s.day_number,
            summary: &s.summary,
            scene: &s.surface,
        })
        .collect();

    Ok(serde_json::to_string_pretty(&docs)?)
}
