use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use serde_json::Value;

use crate::config::{DF, WEATHER};

/// Result of one rainfall lookup. Fails open: a missing key, timeout, bad
/// status, or unexpected body all collapse to 0 mm with `degraded` set.
#[derive(Debug, Clone, Copy)]
pub struct RainfallSample {
    pub mm: f64,
    pub degraded: bool,
}

pub struct RainfallClient {
    http: reqwest::Client,
    city: String,
    api_key: Option<String>,
}

impl RainfallClient {
    pub fn new(city: String, api_key: Option<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(WEATHER.timeout_ms))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            http,
            city,
            api_key,
        }
    }

    pub fn from_env(city: String) -> Self {
        let api_key = std::env::var(WEATHER.api_key_env).ok();
        if api_key.is_none() {
            log::warn!(
                "{} not set; rainfall lookups will run degraded at 0 mm",
                WEATHER.api_key_env
            );
        }
        Self::new(city, api_key)
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    /// Never raises out of the forecast path: failures are logged and the
    /// sample is marked degraded instead.
    pub async fn fetch_rainfall_mm(&self) -> RainfallSample {
        match self.try_fetch().await {
            Ok(mm) => {
                if DF.log_weather {
                    log::info!("rainfall lookup for {}: {} mm", self.city, mm);
                }
                RainfallSample {
                    mm,
                    degraded: false,
                }
            }
            Err(err) => {
                log::warn!(
                    "rainfall lookup for {} failed ({:#}); using base prediction",
                    self.city,
                    err
                );
                RainfallSample {
                    mm: 0.0,
                    degraded: true,
                }
            }
        }
    }

    async fn try_fetch(&self) -> Result<f64> {
        let key = self
            .api_key
            .as_deref()
            .ok_or_else(|| anyhow!("{} not set", WEATHER.api_key_env))?;

        let body: Value = self
            .http
            .get(WEATHER.base_url)
            .query(&[("q", self.city.as_str()), ("appid", key)])
            .send()
            .await
            .context("request failed")?
            .error_for_status()
            .context("non-success status")?
            .json()
            .await
            .context("body was not JSON")?;

        Ok(parse_rainfall(&body))
    }
}

/// A body without a `rain.1h` figure is a dry forecast, not an error.
pub fn parse_rainfall(body: &Value) -> f64 {
    body.get("rain")
        .and_then(|rain| rain.get("1h"))
        .and_then(Value::as_f64)
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extracts_one_hour_rainfall() {
        let body = json!({ "rain": { "1h": 2.5 }, "main": { "temp": 300.0 } });
        assert_eq!(parse_rainfall(&body), 2.5);
    }

    #[test]
    fn unexpected_shapes_default_to_zero() {
        assert_eq!(parse_rainfall(&json!({})), 0.0);
        assert_eq!(parse_rainfall(&json!({ "rain": {} })), 0.0);
        assert_eq!(parse_rainfall(&json!({ "rain": { "1h": "wet" } })), 0.0);
        assert_eq!(parse_rainfall(&json!({ "rain": 3 })), 0.0);
    }

    #[tokio::test]
    async fn missing_api_key_fails_open_without_network() {
        let client = RainfallClient::new("Coimbatore".to_string(), None);
        let sample = client.fetch_rainfall_mm().await;
        assert_eq!(sample.mm, 0.0);
        assert!(sample.degraded);
    }
}
