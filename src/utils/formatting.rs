//! Formatting utilities shared by the sheet text and the CLI outputs.

/// The single fixed-point convention used on a sheet: two decimals, no
/// grouping, no locale.
pub fn fixed2(v: f64) -> String {
    format!("{:.2}", v)
}

/// Hour label for the grid header. Midnight and noon get names, the other
/// hours use a 12-hour clock numeral.
pub fn hour_label(hour: u32) -> String {
    match hour {
        0 | 24 => "Mid".to_string(),
        12 => "Noon".to_string(),
        1..=11 => hour.to_string(),
        _ => (hour - 12).to_string(),
    }
}

/// Human-readable status name, e.g. for remarks ("On duty").
pub fn describe_status(code: &str) -> String {
    match code {
        "off_duty" => "Off duty".into(),
        "sleeper_berth" => "Sleeper berth".into(),
        "driving" => "Driving".into(),
        "on_duty" => "On duty".into(),
        other => other.to_string(),
    }
}

/// `"<label>: <value>"` with the fixed-point convention.
pub fn labeled_fixed2(label: &str, value: f64) -> String {
    format!("{label}: {}", fixed2(value))
}
