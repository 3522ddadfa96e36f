mod reading;

pub use reading::{PumpStatus, Reading, ReadingError, level_percent, parse_sensor_line};
