#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use eldsheet::models::{Activity, DailyLog, DutyStatus, LogEntry, Recap, TripLogs};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn eld() -> Command {
    cargo_bin_cmd!("eldsheet")
}

/// Create a temporary output path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_eldsheet_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    fs::remove_dir_all(&p).ok();
    p
}

/// Config path that does not exist, so the defaults are used
pub fn no_config(name: &str) -> String {
    temp_out(&format!("{name}_config"), "conf")
}

/// Write `json` into a temp input file and return its path
pub fn write_input(name: &str, json: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_eldsheet_in.json", name));
    fs::write(&path, json).expect("write input");
    path.to_string_lossy().to_string()
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

pub fn act(kind: DutyStatus, start: &str, end: &str) -> Activity {
    Activity::new(kind, start, end)
}

/// New York → Chicago day used across tests
pub fn sample_log() -> DailyLog {
    DailyLog {
        date: date("2024-03-01"),
        origin: "New York, NY".to_string(),
        destination: "Chicago, IL".to_string(),
        total_miles_driving: 1350.0,
        total_mileage: None,
        day_number: None,
        activities: vec![
            act(DutyStatus::OffDuty, "00:00", "06:00"),
            act(DutyStatus::Driving, "06:00", "12:00"),
            act(DutyStatus::OnDuty, "12:00", "13:00"),
            act(DutyStatus::Driving, "13:00", "20:00"),
            act(DutyStatus::OffDuty, "20:00", "24:00"),
        ],
        recap: Recap::new(13.0, 1.0, 10.0, 35.0, 11.0),
    }
}

pub fn entries(logs: Vec<DailyLog>) -> Vec<LogEntry> {
    logs.into_iter().map(LogEntry::from).collect()
}

/// Parse a batch where every entry is expected to be a valid log
pub fn parse_logs(json: &str) -> Vec<DailyLog> {
    TripLogs::from_json(json)
        .expect("valid batch")
        .iter()
        .map(|e| e.as_log().expect("valid day").clone())
        .collect()
}

pub fn log_with(date_str: &str, activities: Vec<Activity>) -> DailyLog {
    DailyLog {
        date: date(date_str),
        activities,
        ..sample_log()
    }
}

pub const SAMPLE_JSON: &str = r#"{
  "route": { "total_distance_miles": 1350.0 },
  "eld_logs": [
    {
      "date": "2024-03-01",
      "day_number": 0,
      "origin": "New York, NY",
      "destination": "Chicago, IL",
      "total_miles_driving": 1350.0,
      "activities": [
        { "type": "off_duty", "start": "00:00", "end": "06:00" },
        { "type": "driving", "start": "06:00", "end": "12:00", "location": "New York, NY to Chicago, IL", "distance": 330.0 },
        { "type": "on_duty", "start": "12:00", "end": "13:00", "location": "Fuel Stop at 1000 miles" },
        { "type": "driving", "start": "13:00", "end": "20:00" },
        { "type": "off_duty", "start": "20:00", "end": "24:00" }
      ],
      "recap": {
        "driving_hours": 13.0,
        "on_duty_hours": 1.0,
        "off_duty_hours": 10.0,
        "sleeper_berth_hours": 0,
        "total_70hr_8day": 35.0,
        "available_tomorrow": 11.0
      }
    },
    {
      "date": "2024-03-02",
      "origin": "Chicago, IL",
      "destination": "Chicago, IL",
      "total_miles_driving": 0.0,
      "activities": [
        { "type": "off_duty", "start": "00:00", "end": "24:00" }
      ],
      "recap": {
        "driving_hours": 0.0,
        "on_duty_hours": 0.0,
        "off_duty_hours": 24.0,
        "total_70hr_8day": 35.0,
        "available_tomorrow": 35.0
      }
    }
  ]
}"#;

/// Second day has a start time that does not parse
pub const ONE_BAD_DAY_JSON: &str = r#"[
  {
    "date": "2024-03-01",
    "origin": "A",
    "destination": "B",
    "total_miles_driving": 10.0,
    "activities": [ { "type": "driving", "start": "06:00", "end": "07:00" } ],
    "recap": { "driving_hours": 1.0, "on_duty_hours": 0.0, "off_duty_hours": 23.0, "total_70hr_8day": 1.0, "available_tomorrow": 69.0 }
  },
  {
    "date": "2024-03-02",
    "origin": "B",
    "destination": "C",
    "total_miles_driving": 10.0,
    "activities": [ { "type": "driving", "start": "6 am", "end": "07:00" } ],
    "recap": { "driving_hours": 1.0, "on_duty_hours": 0.0, "off_duty_hours": 23.0, "total_70hr_8day": 2.0, "available_tomorrow": 68.0 }
  }
]"#;

/// Second day carries no recap object
pub const MISSING_RECAP_JSON: &str = r#"[
  {
    "date": "2024-03-01",
    "origin": "A",
    "destination": "B",
    "total_miles_driving": 10.0,
    "activities": [ { "type": "driving", "start": "06:00", "end": "07:00" } ],
    "recap": { "driving_hours": 1.0, "on_duty_hours": 0.0, "off_duty_hours": 23.0, "total_70hr_8day": 1.0, "available_tomorrow": 69.0 }
  },
  {
    "date": "2024-03-02",
    "origin": "B",
    "destination": "C",
    "total_miles_driving": 10.0,
    "activities": [ { "type": "driving", "start": "06:00", "end": "07:00" } ]
  }
]"#;

/// Second day has a numeric start and the third lacks its mileage
pub const MALFORMED_DAYS_JSON: &str = r#"{
  "eld_logs": [
    {
      "date": "2024-03-01",
      "total_miles_driving": 10.0,
      "activities": [ { "type": "driving", "start": "06:00", "end": "07:00" } ],
      "recap": { "driving_hours": 1.0, "on_duty_hours": 0.0, "off_duty_hours": 23.0, "total_70hr_8day": 1.0, "available_tomorrow": 69.0 }
    },
    {
      "date": "2024-03-02",
      "total_miles_driving": 10.0,
      "activities": [ { "type": "driving", "start": 6, "end": "07:00" } ],
      "recap": { "driving_hours": 1.0, "on_duty_hours": 0.0, "off_duty_hours": 23.0, "total_70hr_8day": 2.0, "available_tomorrow": 68.0 }
    },
    {
      "date": "2024-03-03",
      "activities": [],
      "recap": { "driving_hours": 0.0, "on_duty_hours": 0.0, "off_duty_hours": 24.0, "total_70hr_8day": 2.0, "available_tomorrow": 68.0 }
    }
  ]
}"#;
