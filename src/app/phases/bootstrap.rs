use eframe::egui::Context;

use crate::app::{App, AppState, BootstrapState, RunningState, phases::PhaseView};
use crate::ui::render_bootstrap;

impl PhaseView for BootstrapState {
    fn tick(&mut self, app: &mut App, ctx: &Context) -> AppState {
        if let Some(engine) = &mut app.engine {
            engine.update();
            // Any event, success or failure, means the pipeline is alive.
            if engine.has_heard_from_worker() {
                return AppState::Running(RunningState);
            }
        }

        self.frames += 1;
        render_bootstrap(ctx, self);
        ctx.request_repaint();
        AppState::Bootstrapping(self.clone())
    }
}
