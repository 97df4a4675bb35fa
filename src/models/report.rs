use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::AdjustedFactorSet;

/// One ranked report entry per stadium. Field names follow the JSON shape
/// consumed by the site templates, hence camelCase on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParkFactorRow {
    pub team: String,
    pub ballpark: String,
    pub city: String,
    pub state: String,
    pub temperature_range: String,
    pub weather_condition: String,
    pub wind_direction: String,
    pub wind_speed: u32,
    pub hr_factor: f64,
    pub doubles_factor: f64,
    pub singles_factor: f64,
    pub runs_factor: f64,
    pub overall_rating: String,
}

impl ParkFactorRow {
    pub fn adjusted_factors(&self) -> AdjustedFactorSet {
        AdjustedFactorSet::new(
            self.hr_factor,
            self.doubles_factor,
            self.singles_factor,
            self.runs_factor,
        )
    }

    pub fn wind_summary(&self) -> String {
        format!("{} {}mph", self.wind_direction, self.wind_speed)
    }
}

/// The single output artifact per run: rows sorted descending by runs
/// factor, wrapped with generation timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParkFactorReport {
    pub factors: Vec<ParkFactorRow>,
    pub last_updated: String,
    pub date: String,
    pub timestamp: i64,
}

impl ParkFactorReport {
    pub fn new(factors: Vec<ParkFactorRow>, generated_at: DateTime<Utc>) -> Self {
        Self {
            factors,
            last_updated: generated_at.to_rfc3339(),
            date: format_report_date(&generated_at),
            timestamp: generated_at.timestamp_millis(),
        }
    }

    /// Case-insensitive team lookup, for the `show --team` path.
    pub fn find_team(&self, team_code: &str) -> Option<&ParkFactorRow> {
        let wanted = team_code.to_uppercase();
        self.factors.iter().find(|row| row.team == wanted)
    }
}

/// Top-level failure document, written to stderr with a non-zero exit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorReport {
    pub error: String,
    pub factors: Vec<ParkFactorRow>,
    pub last_updated: String,
    pub date: String,
}

impl ErrorReport {
    pub fn new(error: String) -> Self {
        let now = Utc::now();
        Self {
            error,
            factors: Vec::new(),
            last_updated: now.to_rfc3339(),
            date: format_report_date(&now),
        }
    }
}

/// Long-form date, e.g. "Tuesday, August 4, 2026".
fn format_report_date(at: &DateTime<Utc>) -> String {
    at.format("%A, %B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_row(team: &str, runs: f64) -> ParkFactorRow {
        ParkFactorRow {
            team: team.to_string(),
            ballpark: "Test Park".to_string(),
            city: "Testville".to_string(),
            state: "TS".to_string(),
            temperature_range: "70s".to_string(),
            weather_condition: "Clear".to_string(),
            wind_direction: "E".to_string(),
            wind_speed: 8,
            hr_factor: 104.2,
            doubles_factor: 101.1,
            singles_factor: 100.4,
            runs_factor: runs,
            overall_rating: "Neutral".to_string(),
        }
    }

    #[test]
    fn test_report_timestamps() {
        let at = Utc.with_ymd_and_hms(2026, 8, 4, 18, 30, 0).unwrap();
        let report = ParkFactorReport::new(vec![sample_row("BOS", 101.9)], at);

        assert_eq!(report.last_updated, "2026-08-04T18:30:00+00:00");
        assert_eq!(report.date, "Tuesday, August 4, 2026");
        assert_eq!(report.timestamp, at.timestamp_millis());
    }

    #[test]
    fn test_find_team_case_insensitive() {
        let at = Utc.with_ymd_and_hms(2026, 8, 4, 18, 30, 0).unwrap();
        let report = ParkFactorReport::new(vec![sample_row("NYY", 102.7)], at);

        assert!(report.find_team("nyy").is_some());
        assert!(report.find_team("NYY").is_some());
        assert!(report.find_team("SEA").is_none());
    }

    #[test]
    fn test_row_serializes_camel_case() {
        let json = serde_json::to_value(sample_row("COL", 111.5)).unwrap();
        assert!(json.get("temperatureRange").is_some());
        assert!(json.get("weatherCondition").is_some());
        assert!(json.get("windDirection").is_some());
        assert!(json.get("hrFactor").is_some());
        assert!(json.get("runsFactor").is_some());
        assert!(json.get("overallRating").is_some());
        assert!(json.get("temperature_range").is_none());
    }

    #[test]
    fn test_error_report_shape() {
        let doc = ErrorReport::new("catalog unavailable".to_string());
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["error"], "catalog unavailable");
        assert!(json["factors"].as_array().unwrap().is_empty());
        assert!(json.get("lastUpdated").is_some());
    }

    #[test]
    fn test_wind_summary() {
        let row = sample_row("CHC", 99.8);
        assert_eq!(row.wind_summary(), "E 8mph");
    }
}
