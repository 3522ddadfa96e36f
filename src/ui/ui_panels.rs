use eframe::egui::{Align, CentralPanel, Context, Layout, RichText, SidePanel, TopBottomPanel, Ui};
use egui_plot::{HLine, Line, LineStyle, MarkerShape, Plot, PlotPoints, Points};

use crate::app::{App, TimelineTab};
use crate::config::constants::{GAUGE_BASELINE_PCT, LOW_LEVEL_WARNING_PCT};
use crate::engine::TickUpdate;
use crate::ui::{UI_CONFIG, UI_TEXT, UiStyleExt, level_color, pump_color};
use crate::utils::{epoch_s_to_date_string, now_timestamp_s};

impl App {
    pub(crate) fn render_top_panel(&mut self, ctx: &Context) {
        TopBottomPanel::top("top_panel")
            .frame(UI_CONFIG.top_panel_frame())
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading(
                        RichText::new(UI_TEXT.title)
                            .color(UI_CONFIG.colors.heading)
                            .size(20.0),
                    );
                    ui.separator();
                    ui.label_subdued(UI_TEXT.subtitle);

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if let Some(engine) = &self.engine {
                            ui.label(
                                RichText::new(engine.source_mode.to_string())
                                    .strong()
                                    .color(UI_CONFIG.colors.accent),
                            );
                            ui.label_subdued("source:");
                            if engine.is_degraded() {
                                ui.label(
                                    RichText::new(UI_TEXT.degraded_notice)
                                        .small()
                                        .color(UI_CONFIG.colors.warning),
                                );
                            }
                        }
                    });
                });
            });
    }

    pub(crate) fn render_sidebar(&mut self, ctx: &Context) {
        SidePanel::left("impact_metrics")
            .frame(UI_CONFIG.side_panel_frame())
            .default_width(220.0)
            .show(ctx, |ui| {
                ui.heading(RichText::new(UI_TEXT.heading_sidebar).color(UI_CONFIG.colors.heading));
                ui.add_space(8.0);

                let latest = self.engine.as_ref().and_then(|e| e.latest);
                match latest {
                    Some(update) => {
                        ui.metric(
                            UI_TEXT.label_savings,
                            &format!("{:.1}%", update.metrics.savings_percent),
                            UI_CONFIG.colors.accent,
                        );
                        ui.add_space(8.0);
                        if update.forecast.degraded {
                            ui.metric(UI_TEXT.label_rain, "n/a", UI_CONFIG.colors.subdued);
                            ui.label(
                                RichText::new(UI_TEXT.degraded_notice)
                                    .small()
                                    .color(UI_CONFIG.colors.warning),
                            );
                        } else {
                            ui.metric(
                                UI_TEXT.label_rain,
                                &format!("{} mm", update.forecast.rainfall_mm),
                                UI_CONFIG.colors.label,
                            );
                        }
                    }
                    None => {
                        ui.label_subdued(UI_TEXT.waiting_for_data);
                    }
                }

                ui.add_space(12.0);
                ui.separator();
                ui.label_subdued(UI_TEXT.note_savings);
            });
    }

    pub(crate) fn render_status_panel(&mut self, ctx: &Context) {
        TopBottomPanel::bottom("status_panel")
            .frame(UI_CONFIG.bottom_panel_frame())
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if let Some(engine) = &self.engine {
                        ui.label_subdued(format!("ticks: {}", engine.ticks));
                        ui.separator();
                        ui.label_subdued(format!("skipped: {}", engine.skipped));
                        ui.separator();
                        ui.label_subdued(format!("city: {}", engine.city));
                        ui.separator();
                        ui.label_subdued(format!("chart samples: {}", engine.rolling.len()));

                        if let Some(err) = &engine.last_error {
                            ui.separator();
                            ui.label(
                                RichText::new(format!("error: {err} (retrying)"))
                                    .small()
                                    .color(UI_CONFIG.colors.alert),
                            );
                        }
                    }
                });
            });
    }

    pub(crate) fn render_central_panel(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.selectable_value(&mut self.timeline_tab, TimelineTab::Past, UI_TEXT.tab_past);
                    ui.selectable_value(
                        &mut self.timeline_tab,
                        TimelineTab::Present,
                        UI_TEXT.tab_present,
                    );
                    ui.selectable_value(
                        &mut self.timeline_tab,
                        TimelineTab::Future,
                        UI_TEXT.tab_future,
                    );
                });
                ui.separator();

                match self.timeline_tab {
                    TimelineTab::Past => self.render_past_tab(ui),
                    TimelineTab::Present => self.render_present_tab(ui),
                    TimelineTab::Future => self.render_future_tab(ui),
                }
            });
    }

    fn render_past_tab(&self, ui: &mut Ui) {
        ui.heading(RichText::new(UI_TEXT.heading_past).color(UI_CONFIG.colors.heading));
        ui.add_space(6.0);

        let Some(engine) = &self.engine else { return };
        let points: Vec<[f64; 2]> = engine
            .historical
            .points()
            .iter()
            .enumerate()
            .map(|(i, &(_, level))| [i as f64, level])
            .collect();

        Plot::new("past_chart")
            .height(UI_CONFIG.chart_height)
            .include_y(0.0)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new("Level %", PlotPoints::new(points))
                        .color(UI_CONFIG.colors.accent)
                        .width(2.0),
                );
            });

        if let Some(&(first_date, _)) = engine.historical.points().first() {
            ui.label_subdued(format!("Daily levels (percent) since {first_date}."));
        }
        ui.label_subdued(UI_TEXT.note_past);
    }

    fn render_present_tab(&self, ui: &mut Ui) {
        ui.heading(RichText::new(UI_TEXT.heading_present).color(UI_CONFIG.colors.heading));
        ui.add_space(6.0);

        let Some(engine) = &self.engine else { return };
        let Some(update) = engine.latest else {
            ui.label_subdued(UI_TEXT.waiting_for_data);
            return;
        };

        ui.horizontal(|ui| {
            render_level_gauge(ui, &update);
            ui.add_space(24.0);
            ui.metric(
                UI_TEXT.label_pump,
                &update.reading.pump.to_string(),
                pump_color(update.reading.pump),
            );
        });
        ui.add_space(10.0);

        let points: Vec<[f64; 2]> = engine
            .rolling
            .iter()
            .enumerate()
            .map(|(i, level)| [i as f64, level])
            .collect();

        Plot::new("live_chart")
            .height(UI_CONFIG.chart_height)
            .include_y(0.0)
            .include_y(100.0)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                plot_ui.hline(
                    HLine::new(UI_TEXT.label_baseline, GAUGE_BASELINE_PCT)
                        .color(UI_CONFIG.colors.subdued)
                        .style(LineStyle::Dashed { length: 8.0 }),
                );
                plot_ui.line(
                    Line::new("Level %", PlotPoints::new(points))
                        .color(UI_CONFIG.colors.accent)
                        .width(2.0),
                );
            });
    }

    fn render_future_tab(&self, ui: &mut Ui) {
        ui.heading(RichText::new(UI_TEXT.heading_future).color(UI_CONFIG.colors.heading));
        ui.add_space(6.0);

        let Some(engine) = &self.engine else { return };
        let Some(update) = engine.latest else {
            ui.label_subdued(UI_TEXT.waiting_for_data);
            return;
        };

        let predicted = update.forecast.predicted_level;
        ui.horizontal(|ui| {
            ui.metric(
                UI_TEXT.label_predicted,
                &format!("{predicted:.1}%"),
                level_color(predicted),
            );
            ui.add_space(24.0);
            ui.vertical(|ui| {
                ui.label_subdued("for");
                ui.label(
                    RichText::new(epoch_s_to_date_string(now_timestamp_s() + 86_400))
                        .color(UI_CONFIG.colors.label),
                );
            });
        });

        if predicted < LOW_LEVEL_WARNING_PCT {
            ui.add_space(8.0);
            ui.warning_banner(UI_TEXT.warning_low);
        }
        ui.add_space(10.0);

        let history: Vec<[f64; 2]> = engine
            .historical
            .points()
            .iter()
            .enumerate()
            .map(|(i, &(_, level))| [i as f64, level])
            .collect();
        let next_x = history.len() as f64;

        Plot::new("forecast_chart")
            .height(UI_CONFIG.chart_height)
            .include_y(0.0)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new("History", PlotPoints::new(history))
                        .color(UI_CONFIG.colors.subdued)
                        .width(1.5),
                );
                plot_ui.points(
                    Points::new("Tomorrow", PlotPoints::new(vec![[next_x, predicted]]))
                        .shape(MarkerShape::Diamond)
                        .radius(6.0)
                        .color(level_color(predicted)),
                );
            });
    }
}

fn render_level_gauge(ui: &mut Ui, update: &TickUpdate) {
    let level = update.metrics.level_percent;
    ui.vertical(|ui| {
        ui.label(
            RichText::new(UI_TEXT.label_level)
                .small()
                .color(UI_CONFIG.colors.subdued),
        );
        ui.label(
            RichText::new(format!("{level:.1}%"))
                .size(26.0)
                .strong()
                .color(level_color(level)),
        );
        let delta = level - GAUGE_BASELINE_PCT;
        let sign = if delta >= 0.0 { "+" } else { "" };
        ui.label(
            RichText::new(format!("{sign}{delta:.1} {}", UI_TEXT.label_baseline))
                .small()
                .color(crate::ui::delta_color(delta)),
        );
    });
}
