use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::Utc;
use validator::Validate;

use crate::catalog;
use crate::error::Result;
use crate::models::{BaseFactorSet, ParkFactorReport, ParkFactorRow, Stadium, WeatherObservation};
use crate::processors::{factor_adjuster, labels};
use crate::utils::progress::ProgressReporter;
use crate::weather::WeatherSource;

/// Drives the full report run: one weather fetch and one adjustment per
/// catalog stadium, then a ranked wrap-up.
pub struct ReportBuilder {
    stadiums: Vec<Stadium>,
    base_factors: HashMap<String, BaseFactorSet>,
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportBuilder {
    pub fn new() -> Self {
        Self {
            stadiums: catalog::stadiums(),
            base_factors: catalog::base_factors(),
        }
    }

    /// Substitute an alternate catalog and factor table.
    pub fn with_catalog(
        stadiums: Vec<Stadium>,
        base_factors: HashMap<String, BaseFactorSet>,
    ) -> Self {
        Self {
            stadiums,
            base_factors,
        }
    }

    pub fn stadium_count(&self) -> usize {
        self.stadiums.len()
    }

    /// Build the report. Stadiums are processed sequentially; a stadium
    /// whose row cannot be assembled is skipped with a warning and the run
    /// continues. Rows are sorted descending by runs factor with a stable
    /// sort, so ties keep catalog order.
    pub async fn build(
        &self,
        source: &WeatherSource,
        progress: Option<&ProgressReporter>,
    ) -> Result<ParkFactorReport> {
        let mut rows = Vec::with_capacity(self.stadiums.len());

        for stadium in &self.stadiums {
            if let Some(p) = progress {
                p.set_message(&format!("Fetching weather for {}...", stadium.name));
            }

            let weather = source.fetch(stadium.latitude, stadium.longitude).await;

            match self.build_row(stadium, &weather) {
                Ok(row) => rows.push(row),
                Err(e) => {
                    tracing::warn!("skipping {}: {}", stadium.name, e);
                }
            }

            if let Some(p) = progress {
                p.increment(1);
            }
        }

        rows.sort_by(|a, b| {
            b.runs_factor
                .partial_cmp(&a.runs_factor)
                .unwrap_or(Ordering::Equal)
        });

        Ok(ParkFactorReport::new(rows, Utc::now()))
    }

    fn build_row(&self, stadium: &Stadium, weather: &WeatherObservation) -> Result<ParkFactorRow> {
        stadium.validate()?;

        let base = catalog::base_factors_for(&self.base_factors, &stadium.team_code);
        let adjusted = factor_adjuster::adjust(&base, stadium.elevation_feet, weather);

        Ok(ParkFactorRow {
            team: stadium.team_code.clone(),
            ballpark: stadium.name.clone(),
            city: stadium.city.clone(),
            state: stadium.state.clone(),
            temperature_range: labels::temperature_range(weather.temperature_f),
            weather_condition: weather.condition.clone(),
            wind_direction: labels::wind_direction_label(weather.wind_direction_deg).to_string(),
            wind_speed: weather.wind_speed_mph.round() as u32,
            hr_factor: adjusted.hr,
            doubles_factor: adjusted.doubles,
            singles_factor: adjusted.singles,
            runs_factor: adjusted.runs,
            overall_rating: labels::overall_rating(adjusted.hit_factor_mean()).to_string(),
        })
    }
}
