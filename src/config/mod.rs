//! Configuration module for the aquachronos application.

mod debug;
mod serial;
mod weather;

// Public
pub mod constants;

// Re-export commonly used items
pub use debug::DF;
pub use serial::{SERIAL, SerialConfig};
pub use weather::{WEATHER, WeatherApiConfig};
