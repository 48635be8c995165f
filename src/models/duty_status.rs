use serde::{Deserialize, Serialize};
use std::fmt;

/// Duty status of an activity, as written by the HOS engine.
///
/// Anything that is not one of the four FMCSA statuses is kept verbatim in
/// `Unknown` so it can be reported, and is drawn like off-duty time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DutyStatus {
    OffDuty,
    SleeperBerth,
    Driving,
    OnDuty,
    Unknown(String),
}

impl DutyStatus {
    /// Rows in drawing order, top to bottom.
    pub const ROWS: [DutyStatus; 4] = [
        DutyStatus::OffDuty,
        DutyStatus::SleeperBerth,
        DutyStatus::Driving,
        DutyStatus::OnDuty,
    ];

    pub fn from_code(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "off_duty" => Self::OffDuty,
            "sleeper_berth" => Self::SleeperBerth,
            "driving" => Self::Driving,
            "on_duty" => Self::OnDuty,
            _ => Self::Unknown(s.to_string()),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            DutyStatus::OffDuty => "off_duty",
            DutyStatus::SleeperBerth => "sleeper_berth",
            DutyStatus::Driving => "driving",
            DutyStatus::OnDuty => "on_duty",
            DutyStatus::Unknown(raw) => raw,
        }
    }

    /// Grid row index (0 = top).
    pub fn row(&self) -> usize {
        match self {
            DutyStatus::OffDuty => 0,
            DutyStatus::SleeperBerth => 1,
            DutyStatus::Driving => 2,
            DutyStatus::OnDuty => 3,
            DutyStatus::Unknown(_) => 0,
        }
    }

    /// Label printed in the row header column.
    pub fn row_label(&self) -> &'static str {
        match self {
            DutyStatus::OffDuty | DutyStatus::Unknown(_) => "Off Duty",
            DutyStatus::SleeperBerth => "Sleeper Berth",
            DutyStatus::Driving => "Driving",
            DutyStatus::OnDuty => "On Duty (not driving)",
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, DutyStatus::Unknown(_))
    }
}

impl From<String> for DutyStatus {
    fn from(s: String) -> Self {
        DutyStatus::from_code(&s)
    }
}

impl From<DutyStatus> for String {
    fn from(s: DutyStatus) -> Self {
        s.code().to_string()
    }
}

impl fmt::Display for DutyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
