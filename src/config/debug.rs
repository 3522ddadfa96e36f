//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Emit every raw line received from the serial port.
    pub log_serial_lines: bool,

    /// Emit one line per tick with reading + derived metrics.
    pub log_ticks: bool,

    /// Log each rainfall lookup (result or failure detail).
    pub log_weather: bool,

    /// Log fitted slope/intercept on every forecast.
    pub log_forecast: bool,
}

pub const DF: LogFlags = LogFlags {
    log_serial_lines: false,
    log_ticks: false,
    log_weather: true,
    log_forecast: false,
};
