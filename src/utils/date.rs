use chrono::NaiveDate;

/// Date as printed in the sheet header, e.g. "March 01, 2024 (Friday)".
pub fn format_long_date(d: &NaiveDate) -> String {
    d.format("%B %d, %Y (%A)").to_string()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}
