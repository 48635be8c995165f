//! Sheet composition: validate one `DailyLog`, then draw grid, bars and
//! text onto a freshly cleared surface.

use super::bars::{Palette, draw_activity_bars};
use super::grid::draw_grid;
use super::layout::Layout;
use super::surface::{DrawingSurface, Scene};
use super::text::draw_text_blocks;
use crate::errors::{AppError, AppResult};
use crate::models::{Activity, DailyLog, DutyStatus, RecapValues};
use crate::utils::formatting::labeled_fixed2;
use crate::utils::time::{format_hours, parse_hours};
use chrono::NaiveDate;
use serde::Serialize;

/// Activity with its times resolved to fractional hours.
#[derive(Debug, Clone, PartialEq)]
pub struct TimedActivity {
    pub status: DutyStatus,
    pub start: f64,
    pub end: f64,
    pub start_label: String,
    pub end_label: String,
    pub location: Option<String>,
}

impl TimedActivity {
    /// An `end` of `00:00` after a later start is read as end of day. Any
    /// other interval running backwards is rejected.
    pub fn from_activity(activity: &Activity) -> AppResult<Self> {
        let start = parse_hours(&activity.start)?;
        let mut end = parse_hours(&activity.end)?;

        if end < start {
            if end == 0.0 {
                end = 24.0;
            } else {
                return Err(AppError::malformed_time(
                    &activity.end,
                    format!("ends before its start {}", activity.start.trim()),
                ));
            }
        }

        Ok(Self {
            status: activity.kind.clone(),
            start,
            end,
            start_label: format_hours(start),
            end_label: format_hours(end),
            location: activity.location.clone(),
        })
    }

    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// A `DailyLog` that passed every check needed to draw it.
#[derive(Debug, Clone)]
pub struct PreparedLog<'a> {
    pub log: &'a DailyLog,
    pub activities: Vec<TimedActivity>,
    pub recap: RecapValues,
}

impl<'a> PreparedLog<'a> {
    pub fn prepare(log: &'a DailyLog) -> AppResult<Self> {
        let activities = log
            .activities
            .iter()
            .map(TimedActivity::from_activity)
            .collect::<AppResult<Vec<_>>>()?;
        let recap = log.recap.values()?;

        Ok(Self {
            log,
            activities,
            recap,
        })
    }

    pub fn summary(&self, day_number: usize) -> SheetSummary {
        SheetSummary {
            day_number,
            date: self.log.date,
            driving_hours: self.recap.driving_hours,
            on_duty_hours: self.recap.on_duty_hours,
            off_duty_hours: self.recap.off_duty_hours,
            total_miles: self.log.total_miles_driving,
        }
    }
}

/// The plain-text fields shown next to a sheet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SheetSummary {
    pub day_number: usize,
    pub date: NaiveDate,
    pub driving_hours: f64,
    pub on_duty_hours: f64,
    pub off_duty_hours: f64,
    pub total_miles: f64,
}

impl SheetSummary {
    pub fn lines(&self) -> [String; 4] {
        [
            labeled_fixed2("Driving hours", self.driving_hours),
            labeled_fixed2("On duty hours", self.on_duty_hours),
            labeled_fixed2("Off duty hours", self.off_duty_hours),
            labeled_fixed2("Total miles", self.total_miles),
        ]
    }
}

/// Draws complete sheets from day-independent layout and colors.
#[derive(Debug, Clone, Copy)]
pub struct SheetComposer<'a> {
    pub layout: &'a Layout,
    pub palette: &'a Palette,
}

impl<'a> SheetComposer<'a> {
    pub fn new(layout: &'a Layout, palette: &'a Palette) -> Self {
        Self { layout, palette }
    }

    /// Validate `log`, then clear `surface` and draw the whole sheet.
    ///
    /// Nothing is drawn when validation fails.
    pub fn compose<S: DrawingSurface + ?Sized>(
        &self,
        log: &DailyLog,
        day_number: usize,
        surface: &mut S,
    ) -> AppResult<SheetSummary> {
        let prepared = PreparedLog::prepare(log)?;

        surface.clear(self.layout.width, self.layout.height, self.palette.background);
        draw_grid(surface, self.layout, self.palette);
        draw_activity_bars(surface, self.layout, self.palette, &prepared.activities);
        draw_text_blocks(surface, self.layout, self.palette, &prepared, day_number);

        log::debug!(
            "composed sheet for day {} ({}) with {} activities",
            day_number,
            log.date_str(),
            prepared.activities.len()
        );

        Ok(prepared.summary(day_number))
    }

    /// Compose into a new `Scene`.
    pub fn compose_scene(&self, log: &DailyLog, day_number: usize) -> AppResult<(Scene, SheetSummary)> {
        let mut scene = Scene::new();
        let summary = self.compose(log, day_number, &mut scene)?;
        Ok((scene, summary))
    }
}
