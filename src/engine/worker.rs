use std::sync::mpsc::Sender;
use std::thread;

use tokio::runtime::Runtime;
use tokio::time::sleep;

use super::messages::{TickEvent, TickUpdate};

use crate::config::DF;
use crate::config::constants::{ERROR_RETRY_DELAY, LOW_LEVEL_WARNING_PCT, TICK_INTERVAL};
use crate::data::{RainfallClient, RainfallSample, ReadingSource};
use crate::domain::{Reading, level_percent};
use crate::models::{DerivedMetrics, Forecast, HistoricalSeries, savings_percent};
use crate::utils::now_timestamp_s;
use crate::{analysis, utils};

/// Spawns the background tick loop. The thread owns the reading source (and
/// with it the serial handle) and hosts its own tokio runtime for the
/// rainfall lookups; it exits when the UI side hangs up.
pub fn spawn_worker_thread(
    mut source: ReadingSource,
    history: HistoricalSeries,
    rainfall: RainfallClient,
    tx: Sender<TickEvent>,
) {
    thread::spawn(move || {
        let rt = match Runtime::new() {
            Ok(rt) => rt,
            Err(err) => {
                let _ = tx.send(TickEvent::Failed(format!("runtime start failed: {err}")));
                return;
            }
        };

        rt.block_on(async move {
            loop {
                let event = run_tick(&mut source, &history, &rainfall).await;

                // Lenient recovery policy: a failed tick is surfaced and
                // retried after a longer flat delay, never terminal.
                let delay = match &event {
                    TickEvent::Failed(err) => {
                        log::error!("tick failed: {err}");
                        ERROR_RETRY_DELAY
                    }
                    _ => TICK_INTERVAL,
                };

                if tx.send(event).is_err() {
                    log::info!("ui channel closed; stopping worker");
                    break;
                }
                sleep(delay).await;
            }
        });
    });
}

/// One iteration of the pipeline: reading -> forecast -> derived metrics.
/// Touches no UI state, so the whole tick is testable headless.
pub async fn run_tick(
    source: &mut ReadingSource,
    history: &HistoricalSeries,
    rainfall: &RainfallClient,
) -> TickEvent {
    let reading = match source.next_reading() {
        Ok(Some(reading)) => reading,
        Ok(None) => return TickEvent::Skipped,
        Err(err) => return TickEvent::Failed(err.to_string()),
    };

    // Every tick re-issues the lookup and refits the regression; the series
    // is 30 points and the client enforces its own timeout.
    let sample = rainfall.fetch_rainfall_mm().await;
    let update = compose_update(reading, history, sample, now_timestamp_s());

    if update.forecast.predicted_level < LOW_LEVEL_WARNING_PCT {
        log::warn!(
            "low level forecast: {:.1}% tomorrow",
            update.forecast.predicted_level
        );
    }

    if DF.log_ticks {
        log::info!(
            "tick: {:.1} cm pump {} -> level {:.1}% predicted {:.1}% (tomorrow {})",
            update.reading.distance_cm,
            update.reading.pump,
            update.metrics.level_percent,
            update.forecast.predicted_level,
            utils::epoch_s_to_date_string(now_timestamp_s() + 86_400),
        );
    }

    TickEvent::Update(update)
}

/// Pure composition of one tick's outputs.
pub fn compose_update(
    reading: Reading,
    history: &HistoricalSeries,
    rainfall: RainfallSample,
    now_epoch_s: i64,
) -> TickUpdate {
    let level = level_percent(reading.distance_cm);
    let predicted = analysis::predict_next_day(history, rainfall.mm, now_epoch_s);

    TickUpdate {
        reading,
        metrics: DerivedMetrics {
            level_percent: level,
            savings_percent: savings_percent(predicted),
        },
        forecast: Forecast {
            predicted_level: predicted,
            rainfall_mm: rainfall.mm,
            degraded: rainfall.degraded,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PumpStatus, parse_sensor_line};

    fn dry() -> RainfallSample {
        RainfallSample {
            mm: 0.0,
            degraded: false,
        }
    }

    #[test]
    fn composes_metrics_from_wire_line() {
        let reading = parse_sensor_line("Distance: 10.0 cm, Pump: ON")
            .unwrap()
            .unwrap();
        let update = compose_update(reading, &HistoricalSeries::seeded(), dry(), 1_750_000_000);

        assert_eq!(update.reading.distance_cm, 10.0);
        assert_eq!(update.reading.pump, PumpStatus::On);
        assert_eq!(update.metrics.level_percent, 60.0);
        assert!(!update.forecast.degraded);
        // Savings follows directly from the forecast.
        assert_eq!(
            update.metrics.savings_percent,
            savings_percent(update.forecast.predicted_level)
        );
    }

    #[test]
    fn degraded_rainfall_flows_into_forecast() {
        let reading = Reading {
            distance_cm: 12.5,
            pump: PumpStatus::Off,
        };
        let sample = RainfallSample {
            mm: 0.0,
            degraded: true,
        };
        let update = compose_update(reading, &HistoricalSeries::seeded(), sample, 1_750_000_000);
        assert!(update.forecast.degraded);
        assert_eq!(update.forecast.rainfall_mm, 0.0);
    }

    #[tokio::test]
    async fn simulated_tick_survives_failed_weather_lookup() {
        let mut source = ReadingSource::Simulated;
        let history = HistoricalSeries::seeded();
        // No API key: the lookup fails open without touching the network.
        let rainfall = RainfallClient::new("Coimbatore".to_string(), None);

        match run_tick(&mut source, &history, &rainfall).await {
            TickEvent::Update(update) => {
                assert!(update.forecast.degraded);
                assert!(update.metrics.level_percent >= 0.0);
            }
            other => panic!("expected an update, got {other:?}"),
        }
    }
}
