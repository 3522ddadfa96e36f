mod screens;
mod styles;
mod ui_config;
mod ui_panels;
mod ui_text;

pub(crate) use screens::render_bootstrap;
pub(crate) use styles::{UiStyleExt, delta_color, level_color, pump_color};
pub(crate) use ui_config::UI_CONFIG;
pub(crate) use ui_text::UI_TEXT;
