use eframe::egui::{Color32, CornerRadius, Frame, Margin, RichText, Stroke, Ui};

use crate::config::constants::LOW_LEVEL_WARNING_PCT;
use crate::domain::PumpStatus;
use crate::ui::UI_CONFIG;

pub(crate) fn level_color(level_percent: f64) -> Color32 {
    if level_percent < LOW_LEVEL_WARNING_PCT {
        UI_CONFIG.colors.alert
    } else if level_percent < 50.0 {
        UI_CONFIG.colors.warning
    } else {
        UI_CONFIG.colors.ok
    }
}

/// Inverse coloring: the pump running means the tank needed topping up.
pub(crate) fn pump_color(pump: PumpStatus) -> Color32 {
    match pump {
        PumpStatus::On => UI_CONFIG.colors.warning,
        PumpStatus::Off => UI_CONFIG.colors.ok,
    }
}

pub(crate) fn delta_color(delta: f64) -> Color32 {
    if delta > 0.0 {
        UI_CONFIG.colors.ok
    } else if delta < 0.0 {
        UI_CONFIG.colors.alert
    } else {
        UI_CONFIG.colors.subdued
    }
}

pub(crate) trait UiStyleExt {
    /// Label over a large value, the dashboard's metric widget.
    fn metric(&mut self, label: &str, value: &str, color: Color32);

    fn label_subdued(&mut self, text: impl Into<String>);

    fn warning_banner(&mut self, text: &str);
}

impl UiStyleExt for Ui {
    fn metric(&mut self, label: &str, value: &str, color: Color32) {
        self.vertical(|ui| {
            ui.label(RichText::new(label).small().color(UI_CONFIG.colors.subdued));
            ui.label(RichText::new(value).size(26.0).strong().color(color));
        });
    }

    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(UI_CONFIG.colors.subdued));
    }

    fn warning_banner(&mut self, text: &str) {
        Frame {
            fill: UI_CONFIG.colors.alert.linear_multiply(0.2),
            stroke: Stroke::new(1.0, UI_CONFIG.colors.alert),
            inner_margin: Margin::same(8),
            corner_radius: CornerRadius::same(4),
            ..Default::default()
        }
        .show(self, |ui| {
            ui.label(RichText::new(text).strong().color(UI_CONFIG.colors.alert));
        });
    }
}
