use crate::config::constants::SAVINGS_FACTOR;

/// One-day-ahead level prediction, recomputed every tick.
#[derive(Debug, Clone, Copy)]
pub struct Forecast {
    pub predicted_level: f64,
    pub rainfall_mm: f64,
    /// True when the rainfall lookup failed and the forecast fell back to 0 mm.
    pub degraded: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct DerivedMetrics {
    pub level_percent: f64,
    pub savings_percent: f64,
}

/// Projected water-use reduction. Heuristic: the further the forecast sits
/// below a full tank, the more the interventions are expected to save.
pub fn savings_percent(predicted_level: f64) -> f64 {
    ((100.0 - predicted_level) * SAVINGS_FACTOR).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn savings_endpoints() {
        assert_eq!(savings_percent(100.0), 0.0);
        assert_eq!(savings_percent(0.0), 42.0);
    }

    #[test]
    fn savings_never_negative() {
        assert_eq!(savings_percent(150.0), 0.0);
    }
}
