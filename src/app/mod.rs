mod phases;
mod root;
mod state;

pub(crate) use state::{AppState, BootstrapState, RunningState, TimelineTab};

pub use root::App;
