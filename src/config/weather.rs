pub struct WeatherApiConfig {
    pub base_url: &'static str,
    /// Hard cap on the lookup; a timeout counts as a failed lookup.
    pub timeout_ms: u64,
    pub default_city: &'static str,
    pub api_key_env: &'static str,
}

pub const WEATHER: WeatherApiConfig = WeatherApiConfig {
    base_url: "http://api.openweathermap.org/data/2.5/weather",
    timeout_ms: 5000,
    default_city: "Coimbatore",
    api_key_env: "OPENWEATHER_API_KEY",
};
