/// Every user-facing string in one place.
pub struct UiText {
    pub title: &'static str,
    pub subtitle: &'static str,

    pub tab_past: &'static str,
    pub tab_present: &'static str,
    pub tab_future: &'static str,

    pub heading_past: &'static str,
    pub heading_present: &'static str,
    pub heading_future: &'static str,
    pub heading_sidebar: &'static str,

    pub label_level: &'static str,
    pub label_pump: &'static str,
    pub label_predicted: &'static str,
    pub label_savings: &'static str,
    pub label_rain: &'static str,
    pub label_baseline: &'static str,

    pub note_past: &'static str,
    pub note_savings: &'static str,
    pub warning_low: &'static str,
    pub degraded_notice: &'static str,
    pub connecting: &'static str,
    pub waiting_for_data: &'static str,
}

pub static UI_TEXT: UiText = UiText {
    title: "AquaChronos: Water Time Machine",
    subtitle: "Global Water Management Dashboard",

    tab_past: "Past",
    tab_present: "Present",
    tab_future: "Future",

    heading_past: "Past: Historical Analysis",
    heading_present: "Present: Real-Time Monitoring",
    heading_future: "Future: Predictions & Interventions",
    heading_sidebar: "Impact Metrics",

    label_level: "Water Level",
    label_pump: "Motor Status",
    label_predicted: "Predicted Tomorrow Level",
    label_savings: "Projected Water Savings",
    label_rain: "Today's Rain Forecast",
    label_baseline: "vs 50% baseline",

    note_past: "Analyzes patterns like droughts; suggests traditional eri systems.",
    note_savings: "Reduces wastage by blending forecasts with cultural methods.",
    warning_low: "Low prediction! Activate eri revival + auto-pump.",
    degraded_notice: "Weather API unavailable; forecast uses base prediction.",
    connecting: "Connecting to tank sensor",
    waiting_for_data: "Waiting for the first reading...",
};
