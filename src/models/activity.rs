use super::duty_status::DutyStatus;
use serde::{Deserialize, Serialize};

/// One duty-status interval inside a day, times as `HH:MM` strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(rename = "type")]
    pub kind: DutyStatus,
    pub start: String,
    pub end: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

impl Activity {
    pub fn new(kind: DutyStatus, start: &str, end: &str) -> Self {
        Self {
            kind,
            start: start.to_string(),
            end: end.to_string(),
            location: None,
            distance: None,
        }
    }

    pub fn with_location(mut self, location: &str) -> Self {
        self.location = Some(location.to_string());
        self
    }
}
