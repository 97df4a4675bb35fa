//! Synthetic observation generator for when the weather API is unavailable.

use rand::Rng;

use crate::models::WeatherObservation;
use crate::utils::constants::{
    FALLBACK_CONDITIONS, FALLBACK_HUMIDITY_PCT, FALLBACK_TEMP_F, FALLBACK_WIND_MPH,
};

/// Generate a plausible observation. Randomized per call: stadiums in a
/// degraded run get distinct conditions.
pub fn synthetic_observation() -> WeatherObservation {
    let mut rng = rand::thread_rng();

    let condition = FALLBACK_CONDITIONS[rng.gen_range(0..FALLBACK_CONDITIONS.len())];

    WeatherObservation {
        temperature_f: rng.gen_range(FALLBACK_TEMP_F.0..=FALLBACK_TEMP_F.1),
        humidity_pct: rng.gen_range(FALLBACK_HUMIDITY_PCT.0..=FALLBACK_HUMIDITY_PCT.1),
        wind_speed_mph: rng.gen_range(FALLBACK_WIND_MPH.0..=FALLBACK_WIND_MPH.1),
        wind_direction_deg: rng.gen_range(0.0..360.0),
        condition: condition.to_string(),
    }
}
