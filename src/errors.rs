//! Unified application error type.
//! The rendering engine, the exporters and the CLI all return AppError to
//! keep error handling consistent from parsing to output.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Log content errors
    // ---------------------------
    #[error("Malformed time value '{value}': {reason}")]
    MalformedTimeValue { value: String, reason: String },

    #[error("Missing recap field: {0}")]
    MissingRecapField(&'static str),

    #[error("Malformed daily log: {0}")]
    MalformedLog(String),

    #[error("Invalid trip input: {0}")]
    InvalidInput(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Invalid color '{0}' (expected #rrggbb)")]
    InvalidColor(String),

    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("{failed} of {total} daily logs could not be rendered")]
    DaysFailed { failed: usize, total: usize },
}

impl AppError {
    pub fn malformed_time(value: &str, reason: impl Into<String>) -> Self {
        AppError::MalformedTimeValue {
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
