mod history;
mod metrics;

pub use history::{HistoricalSeries, RollingHistory};
pub use metrics::{DerivedMetrics, Forecast, savings_percent};
