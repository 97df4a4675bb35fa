use serde::{Deserialize, Serialize};

/// A single point-in-time weather reading for a stadium location.
///
/// Produced fresh per report run, either from the weather API or from the
/// synthetic fallback generator. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherObservation {
    pub temperature_f: f64,
    pub humidity_pct: f64,
    pub wind_speed_mph: f64,
    pub wind_direction_deg: f64,
    pub condition: String,
}

impl WeatherObservation {
    pub fn new(
        temperature_f: f64,
        humidity_pct: f64,
        wind_speed_mph: f64,
        wind_direction_deg: f64,
        condition: &str,
    ) -> Self {
        Self {
            temperature_f,
            humidity_pct,
            wind_speed_mph,
            wind_direction_deg,
            condition: condition.to_string(),
        }
    }

    /// The neutral observation: every adjustment multiplier comes out 1.0.
    pub fn neutral() -> Self {
        Self::new(70.0, 50.0, 0.0, 0.0, "Clear")
    }

    pub fn is_calm(&self) -> bool {
        self.wind_speed_mph < 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_observation() {
        let obs = WeatherObservation::neutral();
        assert_eq!(obs.temperature_f, 70.0);
        assert_eq!(obs.humidity_pct, 50.0);
        assert!(obs.is_calm());
    }

    #[test]
    fn test_observation_fields() {
        let obs = WeatherObservation::new(82.0, 61.0, 12.0, 135.0, "Partly cloudy");
        assert_eq!(obs.condition, "Partly cloudy");
        assert!(!obs.is_calm());
    }
}
