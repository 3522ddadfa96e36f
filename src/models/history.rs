use std::collections::VecDeque;

use anyhow::{Result, ensure};
use chrono::{Days, NaiveDate, NaiveTime};

use crate::config::constants::HISTORY_CAPACITY;

/// Daily tank levels observed before this run. Fixed at startup, immutable
/// for the process lifetime; the forecast refits over it on every tick.
///
/// Unit convention: levels are fill percentages (0 = empty). Sensor
/// centimeters are converted at the domain boundary and never stored here.
#[derive(Debug, Clone)]
pub struct HistoricalSeries {
    points: Vec<(NaiveDate, f64)>,
}

/// Seed levels carried over from the original deployment's 30-day sample.
const SEED_LEVELS: [f64; 30] = [
    20.0, 18.0, 15.0, 22.0, 19.0, 16.0, 23.0, 20.0, 17.0, 24.0, 21.0, 18.0, 25.0, 22.0, 19.0,
    26.0, 23.0, 20.0, 27.0, 24.0, 21.0, 28.0, 25.0, 22.0, 29.0, 26.0, 23.0, 30.0, 27.0, 24.0,
];

impl HistoricalSeries {
    /// Dates must be strictly increasing.
    pub fn new(points: Vec<(NaiveDate, f64)>) -> Result<Self> {
        ensure!(
            points.windows(2).all(|w| w[0].0 < w[1].0),
            "historical series dates must be strictly increasing"
        );
        Ok(Self { points })
    }

    pub fn seeded() -> Self {
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid seed start date");
        let points = SEED_LEVELS
            .iter()
            .enumerate()
            .map(|(i, &level)| {
                let date = start
                    .checked_add_days(Days::new(i as u64))
                    .expect("seed dates stay well inside chrono's range");
                (date, level)
            })
            .collect();
        Self { points }
    }

    pub fn points(&self) -> &[(NaiveDate, f64)] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// (epoch seconds at UTC midnight, level) pairs for the regression.
    pub fn regression_samples(&self) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .map(|&(date, level)| {
                let epoch_s = date.and_time(NaiveTime::MIN).and_utc().timestamp();
                (epoch_s as f64, level)
            })
            .collect()
    }
}

/// Fixed-capacity FIFO of recent level percentages feeding the live chart.
#[derive(Debug, Clone)]
pub struct RollingHistory {
    values: VecDeque<f64>,
    capacity: usize,
}

impl Default for RollingHistory {
    fn default() -> Self {
        Self::new(HISTORY_CAPACITY)
    }
}

impl RollingHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            values: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, level_percent: f64) {
        if self.values.len() == self.capacity {
            self.values.pop_front();
        }
        self.values.push_back(level_percent);
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }

    pub fn latest(&self) -> Option<f64> {
        self.values.back().copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_series_is_strictly_increasing() {
        let series = HistoricalSeries::seeded();
        assert_eq!(series.len(), 30);
        assert!(series.points().windows(2).all(|w| w[0].0 < w[1].0));
        // Samples are one day apart on the regression axis.
        let samples = series.regression_samples();
        assert!(samples.windows(2).all(|w| w[1].0 - w[0].0 == 86_400.0));
    }

    #[test]
    fn new_rejects_unordered_dates() {
        let d = |day| NaiveDate::from_ymd_opt(2025, 1, day).unwrap();
        assert!(HistoricalSeries::new(vec![(d(2), 1.0), (d(1), 2.0)]).is_err());
        assert!(HistoricalSeries::new(vec![(d(1), 1.0), (d(1), 2.0)]).is_err());
        assert!(HistoricalSeries::new(vec![(d(1), 1.0), (d(2), 2.0)]).is_ok());
    }

    #[test]
    fn rolling_history_evicts_oldest_beyond_capacity() {
        let mut history = RollingHistory::default();
        for i in 0..21 {
            history.push(i as f64);
        }
        assert_eq!(history.len(), 20);
        let values: Vec<f64> = history.iter().collect();
        // Element 0 evicted, order of the rest preserved.
        assert_eq!(values.first(), Some(&1.0));
        assert_eq!(values.last(), Some(&20.0));
        assert!(values.windows(2).all(|w| w[1] - w[0] == 1.0));
        assert_eq!(history.latest(), Some(20.0));
    }
}
