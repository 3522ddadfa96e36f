use eframe::egui::Context;

use crate::app::{App, AppState};

/// One frame of a phase. Returns the state for the next frame.
pub(crate) trait PhaseView {
    fn tick(&mut self, app: &mut App, ctx: &Context) -> AppState;
}
