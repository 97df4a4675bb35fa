//! Deterministic weather/elevation adjustment of base park factors.
//!
//! Pure functions: all randomness lives upstream in the weather source.

use crate::models::{AdjustedFactorSet, BaseFactorSet, WeatherObservation};
use crate::utils::constants::{
    CENTER_FIELD_BEARING_DEG, DOUBLES_TEMP_WEIGHT, ELEVATION_COEFF, HUMIDITY_COEFF,
    NEUTRAL_ELEVATION_FT, NEUTRAL_HUMIDITY_PCT, NEUTRAL_TEMP_F, SINGLES_TEMP_WEIGHT, TEMP_COEFF,
    WIND_COEFF,
};

pub fn temperature_multiplier(temp_f: f64) -> f64 {
    1.0 + (temp_f - NEUTRAL_TEMP_F) * TEMP_COEFF
}

pub fn humidity_multiplier(humidity_pct: f64) -> f64 {
    1.0 - (humidity_pct - NEUTRAL_HUMIDITY_PCT) * HUMIDITY_COEFF
}

pub fn elevation_multiplier(elevation_feet: i32) -> f64 {
    1.0 + (elevation_feet as f64 - NEUTRAL_ELEVATION_FT) * ELEVATION_COEFF
}

/// Projects the wind vector onto an assumed center-field bearing of 90°:
/// wind from 90° is the full tailwind, 270° the full headwind.
pub fn wind_multiplier(wind_speed_mph: f64, wind_direction_deg: f64) -> f64 {
    let aligned = (wind_direction_deg - CENTER_FIELD_BEARING_DEG).to_radians().cos();
    1.0 + wind_speed_mph * aligned * WIND_COEFF
}

/// Combine a base factor set with elevation and an observation.
///
/// HR takes the full product of all four multipliers; doubles and singles
/// carry only a damped temperature effect, so neutral conditions reproduce
/// the base factors exactly. Runs is the mean of the three hit types.
/// Every output is rounded to 1 decimal.
pub fn adjust(
    base: &BaseFactorSet,
    elevation_feet: i32,
    weather: &WeatherObservation,
) -> AdjustedFactorSet {
    let temp = temperature_multiplier(weather.temperature_f);
    let humidity = humidity_multiplier(weather.humidity_pct);
    let elevation = elevation_multiplier(elevation_feet);
    let wind = wind_multiplier(weather.wind_speed_mph, weather.wind_direction_deg);

    let hr = round1(base.hr * temp * humidity * elevation * wind);
    let doubles = round1(base.doubles * damp(temp, DOUBLES_TEMP_WEIGHT));
    let singles = round1(base.singles * damp(temp, SINGLES_TEMP_WEIGHT));
    let runs = round1((hr + doubles + singles) / 3.0);

    AdjustedFactorSet::new(hr, doubles, singles, runs)
}

/// Scale a multiplier's distance from 1.0 by `weight`.
fn damp(multiplier: f64, weight: f64) -> f64 {
    1.0 + (multiplier - 1.0) * weight
}

pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
