use crate::domain::Reading;
use crate::models::{DerivedMetrics, Forecast};

/// Everything the presentation layer needs from one successful tick.
#[derive(Debug, Clone, Copy)]
pub struct TickUpdate {
    pub reading: Reading,
    pub metrics: DerivedMetrics,
    pub forecast: Forecast,
}

/// One message per tick from the worker to the UI.
#[derive(Debug, Clone)]
pub enum TickEvent {
    Update(TickUpdate),
    /// No reading this tick (empty line or serial timeout). Not a failure.
    Skipped,
    /// The tick failed; the worker retries after the error delay.
    Failed(String),
}
