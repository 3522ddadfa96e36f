// Core modules
pub mod analysis;
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
mod engine;
pub mod models;
mod ui;
pub mod utils;

pub use app::App;
pub use engine::{TankEngine, TickEvent, TickUpdate};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Use the simulated reading source even if a serial port is present
    #[arg(long, default_value_t = false)]
    pub simulate: bool,

    /// Serial device path (default: /dev/ttyUSB0)
    #[arg(long)]
    pub port: Option<String>,

    /// Serial baud rate (default: 9600)
    #[arg(long)]
    pub baud: Option<u32>,

    /// City name for the rainfall lookup (default: Coimbatore)
    #[arg(long)]
    pub city: Option<String>,
}

/// Main application entry point - creates the GUI app.
/// This is the public API for the binary to call.
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}
