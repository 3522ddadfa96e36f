use serde::{Deserialize, Serialize};

pub(crate) enum AppState {
    Bootstrapping(BootstrapState),
    Running(RunningState),
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Bootstrapping(BootstrapState::default())
    }
}

/// Waiting for the worker's first event (or the serial fallback decision).
#[derive(Default, Clone)]
pub(crate) struct BootstrapState {
    pub(crate) frames: u64,
}

#[derive(Clone)]
pub(crate) struct RunningState;

/// Which timeline tab the central panel shows. Persisted across sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub(crate) enum TimelineTab {
    Past,
    #[default]
    Present,
    Future,
}
