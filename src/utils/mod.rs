mod time_utils;

pub use time_utils::{epoch_s_to_date_string, now_timestamp_s};
