//! FRED risk-free rates
//!
//! Pulls US Treasury constant-maturity yields from the FRED API and
//! maps a contract horizon to the nearest quoted maturity. Series
//! values are quoted in percent; [`FredClient::fetch_latest`] returns
//! decimal form.

use serde::Deserialize;

use super::RateProvider;
use crate::core::{BsmError, BsmResult};

/// Treasury yield series by maturity (years)
const MATURITY_SERIES: &[(f64, &str)] = &[
    (0.25, "DGS3MO"),
    (0.5, "DGS6MO"),
    (1.0, "DGS1"),
    (2.0, "DGS2"),
    (5.0, "DGS5"),
    (10.0, "DGS10"),
];

/// FRED API configuration
///
/// Resolved once at startup and handed to the client; the API key is
/// never read from the environment mid-request.
#[derive(Debug, Clone)]
pub struct FredConfig {
    pub api_key: String,
    pub base_url: String,
}

impl FredConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: "https://api.stlouisfed.org/fred".to_string(),
        }
    }

    /// Read the API key from `FRED_API_KEY`
    pub fn from_env() -> BsmResult<Self> {
        let api_key = std::env::var("FRED_API_KEY")
            .map_err(|_| BsmError::data("FRED_API_KEY is not set"))?;
        Ok(Self::new(api_key))
    }
}

/// FRED API client
pub struct FredClient {
    client: reqwest::blocking::Client,
    config: FredConfig,
}

impl FredClient {
    pub fn new(config: FredConfig) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            config,
        }
    }

    /// Series id whose maturity is closest to the horizon
    fn series_for(time_to_expiry: f64) -> &'static str {
        let mut best = MATURITY_SERIES[0];
        for &(maturity, series) in MATURITY_SERIES {
            if (time_to_expiry - maturity).abs() < (time_to_expiry - best.0).abs() {
                best = (maturity, series);
            }
        }
        best.1
    }

    /// Latest yield for the series matching the horizon, as a decimal
    pub fn fetch_latest(&self, time_to_expiry: f64) -> BsmResult<f64> {
        let series_id = Self::series_for(time_to_expiry);
        let url = format!(
            "{}/series/observations?series_id={}&api_key={}&file_type=json",
            self.config.base_url, series_id, self.config.api_key
        );

        let response: ObservationsResponse = self
            .client
            .get(&url)
            .send()
            .map_err(|e| BsmError::Network(e.to_string()))?
            .json()
            .map_err(|e| BsmError::Data(format!("Failed to parse observations: {}", e)))?;

        // FRED reports missing observations as "."
        let latest = response
            .observations
            .iter()
            .rev()
            .find(|obs| obs.value != ".")
            .ok_or_else(|| BsmError::data(format!("No observations for {series_id}")))?;

        let percent: f64 = latest.value.parse().map_err(|_| {
            BsmError::data(format!("Bad observation value: {:?}", latest.value))
        })?;

        tracing::debug!(series_id, percent, "fetched risk-free rate");

        Ok(percent / 100.0)
    }
}

impl RateProvider for FredClient {
    fn fetch_rate(&self, time_to_expiry: f64) -> BsmResult<f64> {
        self.fetch_latest(time_to_expiry)
    }
}

#[derive(Debug, Deserialize)]
struct ObservationsResponse {
    observations: Vec<Observation>,
}

#[derive(Debug, Deserialize)]
struct Observation {
    value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_selection() {
        assert_eq!(FredClient::series_for(0.1), "DGS3MO");
        assert_eq!(FredClient::series_for(0.3), "DGS3MO");
        assert_eq!(FredClient::series_for(0.6), "DGS6MO");
        assert_eq!(FredClient::series_for(1.4), "DGS1");
        assert_eq!(FredClient::series_for(4.0), "DGS5");
        assert_eq!(FredClient::series_for(7.0), "DGS5");
        assert_eq!(FredClient::series_for(30.0), "DGS10");
    }

    #[test]
    fn test_observations_skip_missing_values() {
        let payload = r#"{
            "observations": [
                {"date": "2025-07-30", "value": "4.21"},
                {"date": "2025-07-31", "value": "4.25"},
                {"date": "2025-08-01", "value": "."}
            ]
        }"#;

        let parsed: ObservationsResponse = serde_json::from_str(payload).unwrap();
        let latest = parsed
            .observations
            .iter()
            .rev()
            .find(|obs| obs.value != ".")
            .unwrap();
        assert_eq!(latest.value, "4.25");
    }

    #[test]
    fn test_config_from_explicit_key() {
        let config = FredConfig::new("abc123");
        assert_eq!(config.api_key, "abc123");
        assert!(config.base_url.starts_with("https://api.stlouisfed.org"));
    }
}
