use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// End-of-day recap as delivered upstream.
///
/// Fields are optional on the wire so that one day with a missing number
/// fails on its own instead of rejecting the whole trip batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recap {
    pub driving_hours: Option<f64>,
    pub on_duty_hours: Option<f64>,
    pub off_duty_hours: Option<f64>,
    pub total_70hr_8day: Option<f64>,
    pub available_tomorrow: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleeper_berth_hours: Option<f64>,
}

/// Recap with every required number present.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RecapValues {
    pub driving_hours: f64,
    pub on_duty_hours: f64,
    pub off_duty_hours: f64,
    pub total_70hr_8day: f64,
    pub available_tomorrow: f64,
    pub sleeper_berth_hours: Option<f64>,
}

impl Recap {
    pub fn new(
        driving_hours: f64,
        on_duty_hours: f64,
        off_duty_hours: f64,
        total_70hr_8day: f64,
        available_tomorrow: f64,
    ) -> Self {
        Self {
            driving_hours: Some(driving_hours),
            on_duty_hours: Some(on_duty_hours),
            off_duty_hours: Some(off_duty_hours),
            total_70hr_8day: Some(total_70hr_8day),
            available_tomorrow: Some(available_tomorrow),
            sleeper_berth_hours: None,
        }
    }

    /// Require every recap number. Values are never recomputed or cross-checked.
    pub fn values(&self) -> AppResult<RecapValues> {
        fn required(v: Option<f64>, name: &'static str) -> AppResult<f64> {
            v.ok_or(AppError::MissingRecapField(name))
        }

        Ok(RecapValues {
            driving_hours: required(self.driving_hours, "driving_hours")?,
            on_duty_hours: required(self.on_duty_hours, "on_duty_hours")?,
            off_duty_hours: required(self.off_duty_hours, "off_duty_hours")?,
            total_70hr_8day: required(self.total_70hr_8day, "total_70hr_8day")?,
            available_tomorrow: required(self.available_tomorrow, "available_tomorrow")?,
            sleeper_berth_hours: self.sleeper_berth_hours,
        })
    }
}
