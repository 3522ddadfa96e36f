use std::time::Duration;

// Top Level Constants
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);
pub const ERROR_RETRY_DELAY: Duration = Duration::from_secs(5);

/// Sensor-to-surface distance at which the tank reads empty. Full is 0 cm.
pub const TANK_EMPTY_CM: f64 = 25.0;

/// How many recent level samples the live chart keeps.
pub const HISTORY_CAPACITY: usize = 20;

/// Forecast one day ahead of wall clock, not of the last historical date.
pub const FORECAST_HORIZON_SECS: i64 = 86_400;

/// Each mm of forecast rain lifts the predicted level by this many points.
pub const RAIN_LEVEL_FACTOR: f64 = 2.0;

pub const LOW_LEVEL_WARNING_PCT: f64 = 20.0;
pub const SAVINGS_FACTOR: f64 = 0.42;
pub const GAUGE_BASELINE_PCT: f64 = 50.0;

pub mod sim {
    pub const DISTANCE_MIN_CM: f64 = 5.0;
    pub const DISTANCE_MAX_CM: f64 = 25.0;
    /// Sensor firmware switches the pump on when the tank runs this low.
    pub const PUMP_ON_ABOVE_CM: f64 = 20.0;
}
