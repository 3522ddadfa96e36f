use std::mem;
use std::time::Duration;

use eframe::{
    Frame, Storage,
    egui::{Context, Visuals},
};
use serde::{Deserialize, Serialize};

use crate::{
    Cli,
    app::{AppState, BootstrapState, TimelineTab, phases::PhaseView},
    engine::TankEngine,
    ui::UI_CONFIG,
};

#[derive(Deserialize, Serialize)]
#[serde(default)]
pub struct App {
    pub(crate) timeline_tab: TimelineTab,
    #[serde(skip)]
    pub(crate) engine: Option<TankEngine>,
    #[serde(skip)]
    state: AppState,
}

impl Default for App {
    fn default() -> Self {
        Self {
            timeline_tab: TimelineTab::default(),
            engine: None,
            state: AppState::default(),
        }
    }
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let mut app: App = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            Self::default()
        };

        app.state = AppState::Bootstrapping(BootstrapState::default());
        app.engine = Some(TankEngine::start(&args));
        app
    }

    /// RUNNING PHASE MAIN LOOP
    pub(crate) fn tick_running_state(&mut self, ctx: &Context) {
        if let Some(engine) = &mut self.engine {
            engine.update();
        }

        self.render_top_panel(ctx);
        self.render_sidebar(ctx);
        self.render_status_panel(ctx);
        self.render_central_panel(ctx);

        // The worker ticks at 1 Hz; poll the channel a little faster than
        // that so updates never sit unrendered.
        ctx.request_repaint_after(Duration::from_millis(250));
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);
        let current = mem::take(&mut self.state);
        self.state = match current {
            AppState::Bootstrapping(mut s) => s.tick(self, ctx),
            AppState::Running(mut s) => s.tick(self, ctx),
        };
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = UI_CONFIG.colors.background;
    visuals.panel_fill = UI_CONFIG.colors.panel;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}
