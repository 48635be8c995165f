use super::{activity::Activity, recap::Recap};
use crate::errors::{AppError, AppResult};
use crate::utils::date::parse_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// One finalized trip day, as produced by the HOS engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyLog {
    pub date: NaiveDate, // "YYYY-MM-DD"
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub destination: String,
    pub total_miles_driving: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_mileage: Option<f64>,
    /// Upstream numbering; sheets are numbered by position instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_number: Option<u32>,
    #[serde(default)]
    pub activities: Vec<Activity>,
    /// Missing numbers are reported when the day is rendered.
    #[serde(default)]
    pub recap: Recap,
}

impl DailyLog {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// One position of a trip batch. An entry whose JSON does not describe a
/// daily log is kept, so that only its own day fails.
#[derive(Debug, Clone)]
pub enum LogEntry {
    Log(DailyLog),
    Malformed {
        date: Option<NaiveDate>,
        reason: String,
    },
}

impl LogEntry {
    pub fn from_value(value: Value) -> Self {
        let date = value.get("date").and_then(Value::as_str).and_then(parse_date);

        match serde_json::from_value::<DailyLog>(value) {
            Ok(log) => LogEntry::Log(log),
            Err(e) => LogEntry::Malformed {
                date,
                reason: e.to_string(),
            },
        }
    }

    /// The parsed log, or `MalformedLog` with the deserialization message.
    pub fn as_log(&self) -> AppResult<&DailyLog> {
        match self {
            LogEntry::Log(log) => Ok(log),
            LogEntry::Malformed { reason, .. } => Err(AppError::MalformedLog(reason.clone())),
        }
    }

    /// Date of the entry, when it could be read.
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            LogEntry::Log(log) => Some(log.date),
            LogEntry::Malformed { date, .. } => *date,
        }
    }
}

impl From<DailyLog> for LogEntry {
    fn from(log: DailyLog) -> Self {
        LogEntry::Log(log)
    }
}

/// Trip batch loader. Accepts a bare array of logs or the calculator's
/// response object carrying them under `eld_logs`.
pub struct TripLogs;

impl TripLogs {
    pub fn from_json(s: &str) -> AppResult<Vec<LogEntry>> {
        let root: Value = serde_json::from_str(s)?;

        let days = match root {
            Value::Array(days) => days,
            Value::Object(mut obj) => match obj.remove("eld_logs") {
                Some(Value::Array(days)) => days,
                Some(_) => {
                    return Err(AppError::InvalidInput("`eld_logs` must be an array".into()));
                }
                None => {
                    return Err(AppError::InvalidInput(
                        "object has no `eld_logs` array".into(),
                    ));
                }
            },
            _ => {
                return Err(AppError::InvalidInput(
                    "expected an array of daily logs or an object with `eld_logs`".into(),
                ));
            }
        };

        let entries: Vec<LogEntry> = days.into_iter().map(LogEntry::from_value).collect();
        for (i, entry) in entries.iter().enumerate() {
            if let LogEntry::Malformed { reason, .. } = entry {
                log::debug!("entry {} is not a daily log: {}", i + 1, reason);
            }
        }
        Ok(entries)
    }

    pub fn load(path: &Path) -> AppResult<Vec<LogEntry>> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}
