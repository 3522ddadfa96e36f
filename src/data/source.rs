use std::fmt;
use std::io::{BufRead, BufReader, ErrorKind};
use std::time::Duration;

use rand::Rng;

use crate::Cli;
use crate::config::constants::sim;
use crate::config::{DF, SERIAL};
use crate::domain::{PumpStatus, Reading, ReadingError, parse_sensor_line};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceMode {
    Live,
    Simulated,
}

impl fmt::Display for SourceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Live => write!(f, "LIVE"),
            Self::Simulated => write!(f, "SIMULATED"),
        }
    }
}

/// Where readings come from. The mode is decided once at startup and fixed
/// for the process lifetime; there is no live re-detection of hardware.
pub enum ReadingSource {
    /// Line reader over the sensor serial link. The port handle is owned
    /// here and released when the worker drops the source.
    Serial {
        reader: BufReader<Box<dyn serialport::SerialPort>>,
    },
    Simulated,
}

impl ReadingSource {
    /// Opens the serial port unless `--simulate` was given; a port that
    /// cannot be opened degrades to the simulated source with a warning.
    pub fn open(cli: &Cli) -> Self {
        if cli.simulate {
            log::info!("reading source: simulated (forced by --simulate)");
            return Self::Simulated;
        }

        let port = cli.port.as_deref().unwrap_or(SERIAL.port);
        let baud = cli.baud.unwrap_or(SERIAL.baud);

        match serialport::new(port, baud)
            .timeout(Duration::from_millis(SERIAL.read_timeout_ms))
            .open()
        {
            Ok(handle) => {
                log::info!("reading source: serial {} @ {} baud", port, baud);
                Self::Serial {
                    reader: BufReader::new(handle),
                }
            }
            Err(err) => {
                log::warn!(
                    "could not open serial port {} ({}); falling back to simulated readings",
                    port,
                    err
                );
                Self::Simulated
            }
        }
    }

    pub fn mode(&self) -> SourceMode {
        match self {
            Self::Serial { .. } => SourceMode::Live,
            Self::Simulated => SourceMode::Simulated,
        }
    }

    /// `Ok(None)` means no reading this tick (empty line or read timeout);
    /// the caller skips the tick rather than treating it as a failure.
    pub fn next_reading(&mut self) -> Result<Option<Reading>, ReadingError> {
        match self {
            Self::Serial { reader } => next_serial_reading(reader),
            Self::Simulated => Ok(Some(simulated_reading())),
        }
    }
}

fn next_serial_reading(
    reader: &mut BufReader<Box<dyn serialport::SerialPort>>,
) -> Result<Option<Reading>, ReadingError> {
    let mut line = String::new();
    match reader.read_line(&mut line) {
        Ok(0) => Ok(None),
        Ok(_) => {
            if DF.log_serial_lines {
                log::info!("serial line: {:?}", line);
            }
            parse_sensor_line(&line)
        }
        // The port read timeout is the pacing bound, not an error.
        Err(err) if matches!(err.kind(), ErrorKind::TimedOut | ErrorKind::WouldBlock) => Ok(None),
        Err(err) => Err(ReadingError::Io(err)),
    }
}

fn simulated_reading() -> Reading {
    let distance_cm = rand::rng().random_range(sim::DISTANCE_MIN_CM..=sim::DISTANCE_MAX_CM);
    let pump = if distance_cm > sim::PUMP_ON_ABOVE_CM {
        PumpStatus::On
    } else {
        PumpStatus::Off
    };
    Reading { distance_cm, pump }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simulated_readings_respect_range_and_pump_rule() {
        let mut source = ReadingSource::Simulated;
        assert_eq!(source.mode(), SourceMode::Simulated);
        for _ in 0..500 {
            let reading = source.next_reading().unwrap().expect("sim always reads");
            assert!((sim::DISTANCE_MIN_CM..=sim::DISTANCE_MAX_CM).contains(&reading.distance_cm));
            let expected = if reading.distance_cm > sim::PUMP_ON_ABOVE_CM {
                PumpStatus::On
            } else {
                PumpStatus::Off
            };
            assert_eq!(reading.pump, expected);
        }
    }
}
