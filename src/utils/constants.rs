/// Weather provider endpoint (weatherapi.com current conditions)
pub const WEATHER_API_URL: &str = "https://api.weatherapi.com/v1/current.json";
pub const WEATHER_API_KEY_VAR: &str = "WEATHER_API_KEY";
pub const WEATHER_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Report output
pub const DEFAULT_OUTPUT_FILE: &str = "data/park-factors.json";

/// Adjustment formula anchors and coefficients
pub const NEUTRAL_TEMP_F: f64 = 70.0;
pub const TEMP_COEFF: f64 = 0.002;
pub const NEUTRAL_HUMIDITY_PCT: f64 = 50.0;
pub const HUMIDITY_COEFF: f64 = 0.001;
pub const NEUTRAL_ELEVATION_FT: f64 = 500.0;
pub const ELEVATION_COEFF: f64 = 0.00005;
pub const CENTER_FIELD_BEARING_DEG: f64 = 90.0;
pub const WIND_COEFF: f64 = 0.01;

/// Reduced weather sensitivity weights for non-HR hit types
pub const DOUBLES_TEMP_WEIGHT: f64 = 0.5;
pub const SINGLES_TEMP_WEIGHT: f64 = 0.2;

/// Synthetic fallback observation ranges
pub const FALLBACK_TEMP_F: (f64, f64) = (65.0, 85.0);
pub const FALLBACK_HUMIDITY_PCT: (f64, f64) = (35.0, 85.0);
pub const FALLBACK_WIND_MPH: (f64, f64) = (2.0, 18.0);
pub const FALLBACK_CONDITIONS: &[&str] = &[
    "Clear",
    "Partly cloudy",
    "Cloudy",
    "Overcast",
    "Light rain",
];

/// Overall rating thresholds (mean of HR/2B/1B adjusted factors)
pub const RATING_EXCELLENT: f64 = 110.0;
pub const RATING_GOOD: f64 = 105.0;
pub const RATING_NEUTRAL: f64 = 95.0;
pub const RATING_BELOW_AVERAGE: f64 = 90.0;
