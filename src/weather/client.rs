//! weatherapi.com current-conditions client.
//!
//! Fetches the current observation for a coordinate pair. Any provider
//! exposing the same fields is substitutable via `with_base_url`.

use std::env;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{FactorError, Result};
use crate::models::WeatherObservation;
use crate::utils::constants::{
    WEATHER_API_KEY_VAR, WEATHER_API_URL, WEATHER_REQUEST_TIMEOUT_SECS,
};

#[derive(Debug, Clone)]
pub struct WeatherApiClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

// --- weatherapi.com JSON response types ---

#[derive(Debug, Deserialize)]
struct CurrentResponse {
    current: CurrentConditions,
}

#[derive(Debug, Deserialize)]
struct CurrentConditions {
    temp_f: f64,
    humidity: f64,
    wind_mph: f64,
    wind_degree: f64,
    condition: ConditionBlock,
}

#[derive(Debug, Deserialize)]
struct ConditionBlock {
    text: String,
}

impl From<CurrentResponse> for WeatherObservation {
    fn from(response: CurrentResponse) -> Self {
        let current = response.current;
        WeatherObservation {
            temperature_f: current.temp_f,
            humidity_pct: current.humidity,
            wind_speed_mph: current.wind_mph,
            wind_direction_deg: current.wind_degree,
            condition: current.condition.text,
        }
    }
}

impl WeatherApiClient {
    pub fn new(api_key: &str) -> Result<Self> {
        Self::with_base_url(api_key, WEATHER_API_URL)
    }

    /// Point the client at an alternate endpoint (used by the HTTP tests).
    pub fn with_base_url(api_key: &str, base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(WEATHER_REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.to_string(),
            base_url: base_url.to_string(),
        })
    }

    /// Build a client from the `WEATHER_API_KEY` environment variable.
    /// A missing credential is an error here; the caller decides whether
    /// that selects the synthetic fallback path.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var(WEATHER_API_KEY_VAR)
            .map_err(|_| FactorError::MissingCredential(WEATHER_API_KEY_VAR.to_string()))?;
        Self::new(&api_key)
    }

    /// Fetch the current observation for a coordinate pair.
    ///
    /// Single attempt, bounded by the client timeout. No retries: the
    /// weather source wraps failures with a synthetic fallback instead.
    pub async fn fetch_current(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<WeatherObservation> {
        let location = format!("{:.4},{:.4}", latitude, longitude);
        let url = format!("{}?key={}&q={}", self.base_url, self.api_key, location);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(FactorError::WeatherStatus {
                status: response.status().as_u16(),
                location,
            });
        }

        let body: CurrentResponse = response.json().await?;
        Ok(body.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_deserialization() {
        let json = serde_json::json!({
            "location": { "name": "Denver", "region": "Colorado" },
            "current": {
                "temp_f": 88.3,
                "humidity": 22.0,
                "wind_mph": 9.2,
                "wind_degree": 180.0,
                "condition": { "text": "Sunny" }
            }
        });

        let parsed: CurrentResponse = serde_json::from_value(json).unwrap();
        let obs: WeatherObservation = parsed.into();

        assert_eq!(obs.temperature_f, 88.3);
        assert_eq!(obs.humidity_pct, 22.0);
        assert_eq!(obs.wind_speed_mph, 9.2);
        assert_eq!(obs.wind_direction_deg, 180.0);
        assert_eq!(obs.condition, "Sunny");
    }

    #[test]
    fn test_missing_field_is_an_error() {
        let json = serde_json::json!({
            "current": {
                "temp_f": 72.0,
                "humidity": 50.0,
                "wind_mph": 4.0,
                "condition": { "text": "Clear" }
            }
        });

        assert!(serde_json::from_value::<CurrentResponse>(json).is_err());
    }
}
