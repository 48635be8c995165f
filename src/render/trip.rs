//! Multi-day rendering: one sheet per `DailyLog`, numbered by position.

use super::sheet::{SheetComposer, SheetSummary};
use super::surface::{DrawingSurface, Scene};
use crate::errors::AppError;
use crate::models::LogEntry;
use chrono::NaiveDate;
use std::fmt;

/// A sheet drawn onto its own surface.
#[derive(Debug)]
pub struct RenderedSheet<S> {
    pub day_number: usize,
    pub surface: S,
    pub summary: SheetSummary,
}

/// A day whose log was rejected before drawing.
#[derive(Debug)]
pub struct DayFailure {
    pub day_number: usize,
    /// `None` when the entry was too malformed to read its date.
    pub date: Option<NaiveDate>,
    pub error: AppError,
}

impl fmt::Display for DayFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "log for day {} could not be rendered: {}",
            self.day_number, self.error
        )
    }
}

pub type DayOutcome<S> = Result<RenderedSheet<S>, DayFailure>;

/// Render every entry onto a fresh surface from `new_surface`.
///
/// Day numbers start at 1 and follow input order, whatever the dates say.
/// A failing day, malformed entries included, does not stop the others.
/// An empty batch yields nothing.
pub fn render_trip<S, F>(
    entries: &[LogEntry],
    composer: &SheetComposer<'_>,
    mut new_surface: F,
) -> Vec<DayOutcome<S>>
where
    S: DrawingSurface,
    F: FnMut() -> S,
{
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let day_number = i + 1;
            let fail = |error: AppError| DayFailure {
                day_number,
                date: entry.date(),
                error,
            };

            let log = match entry.as_log() {
                Ok(log) => log,
                Err(error) => return Err(fail(error)),
            };
            let mut surface = new_surface();
            match composer.compose(log, day_number, &mut surface) {
                Ok(summary) => Ok(RenderedSheet {
                    day_number,
                    surface,
                    summary,
                }),
                Err(error) => Err(fail(error)),
            }
        })
        .collect()
}

/// `render_trip` onto recording scenes.
pub fn render_trip_scenes(
    entries: &[LogEntry],
    composer: &SheetComposer<'_>,
) -> Vec<DayOutcome<Scene>> {
    render_trip(entries, composer, Scene::new)
}

/// Split outcomes into rendered sheets and failures, keeping order.
pub fn partition<S>(outcomes: Vec<DayOutcome<S>>) -> (Vec<RenderedSheet<S>>, Vec<DayFailure>) {
    let mut sheets = Vec::new();
    let mut failures = Vec::new();
    for outcome in outcomes {
        match outcome {
            Ok(sheet) => sheets.push(sheet),
            Err(failure) => failures.push(failure),
        }
    }
    (sheets, failures)
}
