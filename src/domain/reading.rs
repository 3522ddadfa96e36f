use std::fmt;

use thiserror::Error;

use crate::config::constants::TANK_EMPTY_CM;

#[derive(Debug, Error)]
pub enum ReadingError {
    #[error("malformed sensor line: {0:?}")]
    MalformedLine(String),

    #[error("serial read failed: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PumpStatus {
    On,
    Off,
}

impl fmt::Display for PumpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::On => write!(f, "ON"),
            Self::Off => write!(f, "OFF"),
        }
    }
}

/// One sensor sample. Produced once per tick, never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    pub distance_cm: f64,
    pub pump: PumpStatus,
}

/// Parses one line of the sensor wire format:
/// `Distance: <float> cm, Pump: <ON|OFF>`
///
/// Empty lines are not an error; the tick simply produces no reading.
pub fn parse_sensor_line(line: &str) -> Result<Option<Reading>, ReadingError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let malformed = || ReadingError::MalformedLine(line.to_string());

    let mut fields = line.split(',');
    let (distance_field, pump_field) = match (fields.next(), fields.next(), fields.next()) {
        (Some(d), Some(p), None) => (d, p),
        _ => return Err(malformed()),
    };

    let distance_value = field_value(distance_field, "Distance").ok_or_else(malformed)?;
    let distance_cm = distance_value
        .strip_suffix(" cm")
        .and_then(|v| v.trim().parse::<f64>().ok())
        .ok_or_else(malformed)?;

    let pump = match field_value(pump_field, "Pump").ok_or_else(malformed)? {
        "ON" => PumpStatus::On,
        "OFF" => PumpStatus::Off,
        _ => return Err(malformed()),
    };

    Ok(Some(Reading { distance_cm, pump }))
}

fn field_value<'a>(field: &'a str, label: &str) -> Option<&'a str> {
    let (name, value) = field.split_once(':')?;
    if name.trim() != label {
        return None;
    }
    Some(value.trim())
}

/// Converts a raw distance reading into a fill percentage.
/// 25 cm is empty, 0 cm is full. Clamped at 0 but deliberately not at 100:
/// an overfull tank should show as such.
pub fn level_percent(distance_cm: f64) -> f64 {
    ((TANK_EMPTY_CM - distance_cm) / TANK_EMPTY_CM * 100.0).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_line() {
        let reading = parse_sensor_line("Distance: 10.0 cm, Pump: ON")
            .unwrap()
            .unwrap();
        assert_eq!(reading.distance_cm, 10.0);
        assert_eq!(reading.pump, PumpStatus::On);
        assert_eq!(level_percent(reading.distance_cm), 60.0);
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        let reading = parse_sensor_line("  Distance: 7.5 cm , Pump: OFF \r\n")
            .unwrap()
            .unwrap();
        assert_eq!(reading.distance_cm, 7.5);
        assert_eq!(reading.pump, PumpStatus::Off);
    }

    #[test]
    fn empty_line_yields_no_reading() {
        assert!(parse_sensor_line("").unwrap().is_none());
        assert!(parse_sensor_line("   \r\n").unwrap().is_none());
    }

    #[test]
    fn garbage_is_malformed() {
        assert!(matches!(
            parse_sensor_line("garbage"),
            Err(ReadingError::MalformedLine(_))
        ));
    }

    #[test]
    fn wrong_field_count_is_malformed() {
        assert!(parse_sensor_line("Distance: 10.0 cm").is_err());
        assert!(parse_sensor_line("Distance: 10.0 cm, Pump: ON, Extra: 1").is_err());
    }

    #[test]
    fn bad_number_or_pump_token_is_malformed() {
        assert!(parse_sensor_line("Distance: ten cm, Pump: ON").is_err());
        assert!(parse_sensor_line("Distance: 10.0 cm, Pump: MAYBE").is_err());
        // Unit suffix is part of the wire contract.
        assert!(parse_sensor_line("Distance: 10.0, Pump: ON").is_err());
    }

    #[test]
    fn level_is_monotonic_and_clamped() {
        let mut prev = f64::INFINITY;
        for step in 0..=250 {
            let distance = step as f64 * 0.1;
            let level = level_percent(distance);
            assert!(level <= prev, "level must not increase with distance");
            assert!((0.0..=100.0).contains(&level));
            prev = level;
        }
        assert_eq!(level_percent(0.0), 100.0);
        assert_eq!(level_percent(25.0), 0.0);
        // Beyond the empty mark still clamps at 0.
        assert_eq!(level_percent(30.0), 0.0);
        // An overfull tank (sensor closer than the full mark) may exceed 100.
        assert!(level_percent(-1.0) > 100.0);
    }
}
