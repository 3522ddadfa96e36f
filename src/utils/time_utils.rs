use chrono::{DateTime, Utc};

pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d";

pub fn now_timestamp_s() -> i64 {
    Utc::now().timestamp()
}

/// Used for display purposes.
pub fn epoch_s_to_date_string(epoch_s: i64) -> String {
    DateTime::<Utc>::from_timestamp(epoch_s, 0)
        .map(|dt| dt.format(STANDARD_TIME_FORMAT).to_string())
        .unwrap_or_else(|| "?".to_string())
}
