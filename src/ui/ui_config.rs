use eframe::egui::{Color32, Frame, Margin, Stroke};

/// UI Colors for consistent theming. Palette carried over from the original
/// dashboard's retro-futuristic stylesheet: deep navy panels, teal accents.
#[derive(Clone, Copy)]
pub struct UiColors {
    pub background: Color32,
    pub panel: Color32,
    pub heading: Color32,
    pub label: Color32,
    pub accent: Color32,
    pub subdued: Color32,
    pub warning: Color32,
    pub alert: Color32,
    pub ok: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub chart_height: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        background: Color32::from_rgb(10, 25, 47),
        panel: Color32::from_rgb(23, 42, 70),
        heading: Color32::from_rgb(100, 255, 218),
        label: Color32::from_rgb(204, 214, 246),
        accent: Color32::from_rgb(100, 255, 218),
        subdued: Color32::from_rgb(136, 146, 176),
        warning: Color32::from_rgb(255, 200, 87),
        alert: Color32::from_rgb(255, 99, 99),
        ok: Color32::from_rgb(100, 255, 218),
    },
    chart_height: 260.0,
};

impl UiConfig {
    /// Frame for the sidebar (standard padding)
    pub fn side_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(8),
            ..Default::default()
        }
    }

    /// Frame for the top toolbar (standard padding)
    pub fn top_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(8),
            ..Default::default()
        }
    }

    /// Frame for the bottom status bar (tighter vertical padding)
    pub fn bottom_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(8, 4),
            ..Default::default()
        }
    }

    /// Frame for the central timeline area
    pub fn central_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.background,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(12),
            ..Default::default()
        }
    }
}
