use eframe::egui::{CentralPanel, Context, RichText};

use crate::app::BootstrapState;
use crate::ui::{UI_CONFIG, UI_TEXT};

pub(crate) fn render_bootstrap(ctx: &Context, state: &BootstrapState) {
    CentralPanel::default()
        .frame(UI_CONFIG.central_panel_frame())
        .show(ctx, |ui| {
            ui.centered_and_justified(|ui| {
                ui.vertical_centered(|ui| {
                    ui.heading(
                        RichText::new(UI_TEXT.title)
                            .color(UI_CONFIG.colors.heading)
                            .size(28.0),
                    );
                    ui.add_space(6.0);
                    ui.label(RichText::new(UI_TEXT.subtitle).color(UI_CONFIG.colors.subdued));
                    ui.add_space(20.0);
                    ui.spinner();
                    ui.add_space(10.0);
                    let dots = ".".repeat((state.frames / 30 % 4) as usize);
                    ui.label(
                        RichText::new(format!("{}{}", UI_TEXT.connecting, dots))
                            .color(UI_CONFIG.colors.label),
                    );
                });
            });
        });
}
