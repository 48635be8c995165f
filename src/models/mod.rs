pub mod activity;
pub mod daily_log;
pub mod duty_status;
pub mod recap;

pub use activity::Activity;
pub use daily_log::{DailyLog, LogEntry, TripLogs};
pub use duty_status::DutyStatus;
pub use recap::{Recap, RecapValues};
