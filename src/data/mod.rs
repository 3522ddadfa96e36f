mod source;
mod weather;

pub use source::{ReadingSource, SourceMode};
pub use weather::{RainfallClient, RainfallSample, parse_rainfall};
