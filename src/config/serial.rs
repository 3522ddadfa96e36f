/// Defaults for the sensor serial link. The CLI can override port and baud.
pub struct SerialConfig {
    pub port: &'static str,
    pub baud: u32,
    pub read_timeout_ms: u64,
}

pub const SERIAL: SerialConfig = SerialConfig {
    port: "/dev/ttyUSB0",
    baud: 9600,
    read_timeout_ms: 1000,
};
