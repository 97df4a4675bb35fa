//! Display labels derived from observations and adjusted factors.

use crate::utils::constants::{
    RATING_BELOW_AVERAGE, RATING_EXCELLENT, RATING_GOOD, RATING_NEUTRAL,
};

/// 16-point compass, 22.5° per point, starting at north.
const COMPASS_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// Decade bucket for a temperature: 72°F becomes "70s".
pub fn temperature_range(temp_f: f64) -> String {
    let decade = ((temp_f / 10.0).floor() as i64) * 10;
    format!("{}s", decade)
}

/// Nearest compass point for a wind bearing in degrees.
pub fn wind_direction_label(degrees: f64) -> &'static str {
    let index = ((degrees / 22.5).round() as i64).rem_euclid(16) as usize;
    COMPASS_POINTS[index]
}

/// Overall offensive rating from the mean of the adjusted hit-type factors.
pub fn overall_rating(mean_factor: f64) -> &'static str {
    if mean_factor >= RATING_EXCELLENT {
        "Excellent"
    } else if mean_factor >= RATING_GOOD {
        "Good"
    } else if mean_factor >= RATING_NEUTRAL {
        "Neutral"
    } else if mean_factor >= RATING_BELOW_AVERAGE {
        "Below Average"
    } else {
        "Poor"
    }
}
