// src/export/csv.rs

use crate::errors::AppResult;
use crate::render::SheetSummary;
use crate::utils::fixed2;
use serde::Serialize;
use std::io::Write;

/// One CSV line per day, numbers already in the sheet's fixed-point form.
#[derive(Debug, Serialize)]
pub struct SummaryRow {
    pub day: usize,
    pub date: String,
    pub driving_hours: String,
    pub on_duty_hours: String,
    pub off_duty_hours: String,
    pub total_miles: String,
}

impl From<&SheetSummary> for SummaryRow {
    fn from(s: &SheetSummary) -> Self {
        Self {
            day: s.day_number,
            date: s.date.format("%Y-%m-%d").to_string(),
            driving_hours: fixed2(s.driving_hours),
            on_duty_hours: fixed2(s.on_duty_hours),
            off_duty_hours: fixed2(s.off_duty_hours),
            total_miles: fixed2(s.total_miles),
        }
    }
}

/// Header included thanks to serde.
pub fn write_summary_csv<W: Write>(out: W, summaries: &[SheetSummary]) -> AppResult<()> {
    let mut wtr = csv::Writer::from_writer(out);
    for s in summaries {
        wtr.serialize(SummaryRow::from(s))?;
    }
    wtr.flush()?;
    Ok(())
}
