use crate::config::DF;
use crate::config::constants::{FORECAST_HORIZON_SECS, RAIN_LEVEL_FACTOR};
use crate::models::HistoricalSeries;

/// Ordinary least-squares line over (x, y) samples.
#[derive(Debug, Clone, Copy)]
pub struct LinearTrend {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearTrend {
    /// Refits from scratch. Degenerate input (fewer than two samples, or no
    /// spread on the x axis) falls back to a flat line at the mean level.
    pub fn fit(samples: &[(f64, f64)]) -> Self {
        let n = samples.len() as f64;
        if samples.len() < 2 {
            let mean_y = samples.first().map_or(0.0, |&(_, y)| y);
            return Self {
                slope: 0.0,
                intercept: mean_y,
            };
        }

        let mean_x = samples.iter().map(|&(x, _)| x).sum::<f64>() / n;
        let mean_y = samples.iter().map(|&(_, y)| y).sum::<f64>() / n;

        let mut ss_xx = 0.0;
        let mut ss_xy = 0.0;
        for &(x, y) in samples {
            let dx = x - mean_x;
            ss_xx += dx * dx;
            ss_xy += dx * (y - mean_y);
        }

        if ss_xx <= f64::EPSILON {
            return Self {
                slope: 0.0,
                intercept: mean_y,
            };
        }

        let slope = ss_xy / ss_xx;
        Self {
            slope,
            intercept: mean_y - slope * mean_x,
        }
    }

    pub fn predict_at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Extrapolates the historical trend one day past `now_epoch_s`, then applies
/// the fixed rainfall sensitivity: each mm of forecast rain lifts the
/// predicted level by `RAIN_LEVEL_FACTOR` points.
pub fn predict_next_day(history: &HistoricalSeries, rainfall_mm: f64, now_epoch_s: i64) -> f64 {
    let trend = LinearTrend::fit(&history.regression_samples());

    if DF.log_forecast {
        log::info!(
            "forecast fit: slope={:.6e}/s intercept={:.3} rain={}mm",
            trend.slope,
            trend.intercept,
            rainfall_mm
        );
    }

    let base = trend.predict_at((now_epoch_s + FORECAST_HORIZON_SECS) as f64);
    base + rainfall_mm * RAIN_LEVEL_FACTOR
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, NaiveDate, NaiveTime};

    fn linear_series(days: usize) -> HistoricalSeries {
        let start = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let points = (0..days)
            .map(|i| {
                let date = start.checked_add_days(Days::new(i as u64)).unwrap();
                (date, i as f64)
            })
            .collect();
        HistoricalSeries::new(points).unwrap()
    }

    fn epoch_s(date: NaiveDate) -> i64 {
        date.and_time(NaiveTime::MIN).and_utc().timestamp()
    }

    #[test]
    fn perfectly_linear_series_forecasts_next_value() {
        let series = linear_series(10);
        let last_date = series.points().last().unwrap().0;
        // One day past the last observation (level 9) should read level 10.
        let predicted = predict_next_day(&series, 0.0, epoch_s(last_date));
        assert!(
            (predicted - 10.0).abs() < 1e-6,
            "expected 10.0, got {predicted}"
        );
    }

    #[test]
    fn rain_adjustment_is_linear_with_fixed_coefficient() {
        let series = linear_series(10);
        let now = epoch_s(series.points().last().unwrap().0);
        let dry = predict_next_day(&series, 0.0, now);
        let wet = predict_next_day(&series, 3.5, now);
        assert!((wet - dry - 3.5 * RAIN_LEVEL_FACTOR).abs() < 1e-9);
    }

    #[test]
    fn fit_handles_degenerate_input() {
        let flat = LinearTrend::fit(&[]);
        assert_eq!(flat.predict_at(123.0), 0.0);

        let single = LinearTrend::fit(&[(5.0, 7.0)]);
        assert_eq!(single.predict_at(1e9), 7.0);

        let no_spread = LinearTrend::fit(&[(1.0, 2.0), (1.0, 4.0)]);
        assert_eq!(no_spread.slope, 0.0);
        assert_eq!(no_spread.predict_at(0.0), 3.0);
    }

    #[test]
    fn fit_recovers_known_line() {
        let samples: Vec<(f64, f64)> = (0..50).map(|i| (i as f64, 3.0 * i as f64 - 4.0)).collect();
        let trend = LinearTrend::fit(&samples);
        assert!((trend.slope - 3.0).abs() < 1e-9);
        assert!((trend.intercept + 4.0).abs() < 1e-9);
    }
}
