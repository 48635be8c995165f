mod common;
use common::{MALFORMED_DAYS_JSON, MISSING_RECAP_JSON, SAMPLE_JSON, date, parse_logs, sample_log};
use eldsheet::errors::AppError;
use eldsheet::models::{DutyStatus, LogEntry, TripLogs};
use eldsheet::render::Color;
use eldsheet::utils::formatting::{fixed2, hour_label};
use eldsheet::utils::time::{format_hours, parse_hours};

#[test]
fn test_parse_hours() {
    assert_eq!(parse_hours("00:00").unwrap(), 0.0);
    assert_eq!(parse_hours("06:30").unwrap(), 6.5);
    assert_eq!(parse_hours("13:45").unwrap(), 13.75);
    assert_eq!(parse_hours(" 08:15 ").unwrap(), 8.25);
    assert_eq!(parse_hours("06:30:00").unwrap(), 6.5);
    assert_eq!(parse_hours("24:00").unwrap(), 24.0);

    for bad in ["", "noon", "24:01", "12-00", "99:00"] {
        assert!(
            matches!(parse_hours(bad), Err(AppError::MalformedTimeValue { .. })),
            "{bad:?} should be rejected"
        );
    }
}

#[test]
fn test_format_hours() {
    assert_eq!(format_hours(0.0), "00:00");
    assert_eq!(format_hours(6.5), "06:30");
    assert_eq!(format_hours(24.0), "24:00");
}

#[test]
fn test_fixed_point_formatting() {
    assert_eq!(fixed2(13.0), "13.00");
    assert_eq!(fixed2(1350.0), "1350.00");
    assert_eq!(fixed2(2.0 / 3.0), "0.67");
}

#[test]
fn test_hour_labels() {
    assert_eq!(hour_label(0), "Mid");
    assert_eq!(hour_label(1), "1");
    assert_eq!(hour_label(11), "11");
    assert_eq!(hour_label(12), "Noon");
    assert_eq!(hour_label(13), "1");
    assert_eq!(hour_label(23), "11");
    assert_eq!(hour_label(24), "Mid");
}

#[test]
fn test_duty_status_rows() {
    assert_eq!(DutyStatus::from_code("off_duty").row(), 0);
    assert_eq!(DutyStatus::from_code("sleeper_berth").row(), 1);
    assert_eq!(DutyStatus::from_code("driving").row(), 2);
    assert_eq!(DutyStatus::from_code("on_duty").row(), 3);

    let unknown = DutyStatus::from_code("yard_move");
    assert!(unknown.is_unknown());
    assert_eq!(unknown.row(), 0);
    assert_eq!(unknown.code(), "yard_move");
}

#[test]
fn test_trip_logs_from_response_object() {
    let logs = parse_logs(SAMPLE_JSON);

    assert_eq!(logs.len(), 2);
    assert_eq!(logs[0].date_str(), "2024-03-01");
    assert_eq!(logs[0].activities[0].kind, DutyStatus::OffDuty);
    assert_eq!(
        logs[0].activities[1].location.as_deref(),
        Some("New York, NY to Chicago, IL")
    );
    assert_eq!(logs[0].activities[1].distance, Some(330.0));
    assert_eq!(logs[0].recap.sleeper_berth_hours, Some(0.0));
    assert_eq!(logs[1].recap.sleeper_berth_hours, None);
}

#[test]
fn test_trip_logs_from_bare_array() {
    let json = serde_json::to_string(&vec![sample_log()]).unwrap();
    let logs = parse_logs(&json);

    assert_eq!(logs, vec![sample_log()]);
}

#[test]
fn test_unknown_type_survives_deserialization() {
    let json = r#"[{
        "date": "2024-03-01", "total_miles_driving": 0,
        "activities": [ { "type": "unknown_type", "start": "01:00", "end": "02:00" } ],
        "recap": { "driving_hours": 0, "on_duty_hours": 0, "off_duty_hours": 24, "total_70hr_8day": 0, "available_tomorrow": 70 }
    }]"#;
    let logs = parse_logs(json);

    assert_eq!(
        logs[0].activities[0].kind,
        DutyStatus::Unknown("unknown_type".to_string())
    );
    assert_eq!(logs[0].origin, "");
}

#[test]
fn test_missing_recap_number_is_reported_per_field() {
    let json = r#"[{
        "date": "2024-03-01", "total_miles_driving": 0,
        "recap": { "driving_hours": 0, "on_duty_hours": 0, "total_70hr_8day": 0, "available_tomorrow": 70 }
    }]"#;
    let logs = parse_logs(json);

    assert!(matches!(
        logs[0].recap.values(),
        Err(AppError::MissingRecapField("off_duty_hours"))
    ));
}

#[test]
fn test_day_without_recap_still_parses() {
    let logs = parse_logs(MISSING_RECAP_JSON);

    assert_eq!(logs.len(), 2);
    assert!(logs[0].recap.values().is_ok());
    assert!(matches!(
        logs[1].recap.values(),
        Err(AppError::MissingRecapField("driving_hours"))
    ));
}

#[test]
fn test_malformed_entries_are_kept_in_place() {
    let entries = TripLogs::from_json(MALFORMED_DAYS_JSON).unwrap();
    assert_eq!(entries.len(), 3);
    assert!(entries[0].as_log().is_ok());

    assert!(matches!(entries[1], LogEntry::Malformed { .. }));
    assert_eq!(entries[1].date(), Some(date("2024-03-02")));
    let err = entries[1].as_log().unwrap_err();
    assert!(matches!(err, AppError::MalformedLog(_)));
    assert!(err.to_string().contains("invalid type: integer `6`"));

    let err = entries[2].as_log().unwrap_err();
    assert!(err.to_string().contains("missing field `total_miles_driving`"));
}

#[test]
fn test_batch_shape_errors_are_specific() {
    let err = TripLogs::from_json(r#"{ "logs": [] }"#).unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
    assert!(err.to_string().contains("eld_logs"));

    let err = TripLogs::from_json(r#"{ "eld_logs": {} }"#).unwrap_err();
    assert!(err.to_string().contains("`eld_logs` must be an array"));

    let err = TripLogs::from_json("[ { \"date\": ").unwrap_err();
    assert!(matches!(err, AppError::Json(_)));
    assert!(err.to_string().contains("line 1"));

    assert!(TripLogs::from_json("42").is_err());
}

#[test]
fn test_colors() {
    let c = Color::from_hex("#D32F2F").unwrap();
    assert_eq!(c, Color::rgb(0xd3, 0x2f, 0x2f));
    assert_eq!(c.to_hex(), "#d32f2f");
    assert_eq!(Color::from_hex("1976d2").unwrap(), Color::rgb(0x19, 0x76, 0xd2));

    for bad in ["#fff", "#gg0000", "#+10000", "red"] {
        assert!(matches!(Color::from_hex(bad), Err(AppError::InvalidColor(_))));
    }
}
