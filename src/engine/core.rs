use std::sync::mpsc::{self, Receiver};

use super::messages::{TickEvent, TickUpdate};
use super::worker::spawn_worker_thread;

use crate::Cli;
use crate::config::WEATHER;
use crate::data::{RainfallClient, ReadingSource, SourceMode};
use crate::models::{HistoricalSeries, RollingHistory};

/// Owns everything the dashboard shows: the latest tick outputs, the rolling
/// level history, and the channel from the background worker. The UI thread
/// drains it once per frame; nothing here is shared or locked.
pub struct TankEngine {
    rx: Receiver<TickEvent>,
    pub source_mode: SourceMode,
    pub city: String,
    pub historical: HistoricalSeries,
    pub rolling: RollingHistory,
    pub latest: Option<TickUpdate>,
    pub last_error: Option<String>,
    pub ticks: u64,
    pub skipped: u64,
    events: u64,
}

impl TankEngine {
    /// Picks the reading source once, seeds the historical series, and starts
    /// the worker. The source mode never changes after this.
    pub fn start(cli: &Cli) -> Self {
        let source = ReadingSource::open(cli);
        let source_mode = source.mode();

        let city = cli
            .city
            .clone()
            .unwrap_or_else(|| WEATHER.default_city.to_string());
        let rainfall = RainfallClient::from_env(city.clone());

        let historical = HistoricalSeries::seeded();
        let (tx, rx) = mpsc::channel();
        spawn_worker_thread(source, historical.clone(), rainfall, tx);

        Self::with_channel(rx, source_mode, city, historical)
    }

    fn with_channel(
        rx: Receiver<TickEvent>,
        source_mode: SourceMode,
        city: String,
        historical: HistoricalSeries,
    ) -> Self {
        Self {
            rx,
            source_mode,
            city,
            historical,
            rolling: RollingHistory::default(),
            latest: None,
            last_error: None,
            ticks: 0,
            skipped: 0,
            events: 0,
        }
    }

    /// Drains pending worker events. Returns true if anything arrived.
    pub fn update(&mut self) -> bool {
        let mut changed = false;
        while let Ok(event) = self.rx.try_recv() {
            changed = true;
            self.events += 1;
            match event {
                TickEvent::Update(update) => {
                    self.rolling.push(update.metrics.level_percent);
                    self.latest = Some(update);
                    self.last_error = None;
                    self.ticks += 1;
                }
                TickEvent::Skipped => {
                    self.skipped += 1;
                }
                TickEvent::Failed(err) => {
                    self.last_error = Some(err);
                }
            }
        }
        changed
    }

    /// True once the worker has reported anything at all; the app leaves the
    /// connecting screen on the first event, success or not.
    pub fn has_heard_from_worker(&self) -> bool {
        self.events > 0
    }

    pub fn is_degraded(&self) -> bool {
        self.latest.is_some_and(|u| u.forecast.degraded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PumpStatus, Reading};
    use crate::models::{DerivedMetrics, Forecast};

    fn engine_with_sender() -> (TankEngine, mpsc::Sender<TickEvent>) {
        let (tx, rx) = mpsc::channel();
        let engine = TankEngine::with_channel(
            rx,
            SourceMode::Simulated,
            "Coimbatore".to_string(),
            HistoricalSeries::seeded(),
        );
        (engine, tx)
    }

    fn update_with_level(level_percent: f64) -> TickEvent {
        TickEvent::Update(TickUpdate {
            reading: Reading {
                distance_cm: 10.0,
                pump: PumpStatus::Off,
            },
            metrics: DerivedMetrics {
                level_percent,
                savings_percent: 0.0,
            },
            forecast: Forecast {
                predicted_level: 50.0,
                rainfall_mm: 0.0,
                degraded: false,
            },
        })
    }

    #[test]
    fn drains_events_and_tracks_rolling_history() {
        let (mut engine, tx) = engine_with_sender();
        assert!(!engine.update());
        assert!(!engine.has_heard_from_worker());

        for i in 0..25 {
            tx.send(update_with_level(i as f64)).unwrap();
        }
        assert!(engine.update());
        assert_eq!(engine.ticks, 25);
        assert_eq!(engine.rolling.len(), 20);
        assert_eq!(engine.rolling.latest(), Some(24.0));
        assert!(engine.has_heard_from_worker());
    }

    #[test]
    fn failure_surfaces_and_clears_on_next_update() {
        let (mut engine, tx) = engine_with_sender();

        tx.send(TickEvent::Failed("boom".to_string())).unwrap();
        engine.update();
        assert_eq!(engine.last_error.as_deref(), Some("boom"));

        tx.send(TickEvent::Skipped).unwrap();
        engine.update();
        // A skipped tick is not a recovery signal.
        assert_eq!(engine.last_error.as_deref(), Some("boom"));
        assert_eq!(engine.skipped, 1);

        tx.send(update_with_level(40.0)).unwrap();
        engine.update();
        assert!(engine.last_error.is_none());
    }
}
