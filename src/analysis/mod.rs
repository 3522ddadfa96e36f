mod trend;

pub use trend::{LinearTrend, predict_next_day};
