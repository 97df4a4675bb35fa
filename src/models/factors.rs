use serde::{Deserialize, Serialize};

/// Baseline offensive multipliers for a park, percentage-scaled.
/// 100.0 is league-neutral for every category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaseFactorSet {
    pub hr: f64,
    pub doubles: f64,
    pub singles: f64,
    pub runs: f64,
}

impl BaseFactorSet {
    pub fn new(hr: f64, doubles: f64, singles: f64, runs: f64) -> Self {
        Self {
            hr,
            doubles,
            singles,
            runs,
        }
    }

    /// The all-100 set used when a team code has no table entry.
    pub fn neutral() -> Self {
        Self::new(100.0, 100.0, 100.0, 100.0)
    }

    pub fn is_hitter_friendly(&self) -> bool {
        self.runs > 100.0
    }
}

/// Weather- and elevation-adjusted multipliers for one stadium, one run.
/// Each value is rounded to 1 decimal by the adjuster.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdjustedFactorSet {
    pub hr: f64,
    pub doubles: f64,
    pub singles: f64,
    pub runs: f64,
}

impl AdjustedFactorSet {
    pub fn new(hr: f64, doubles: f64, singles: f64, runs: f64) -> Self {
        Self {
            hr,
            doubles,
            singles,
            runs,
        }
    }

    /// Mean of the three hit-type factors, used for the overall rating.
    pub fn hit_factor_mean(&self) -> f64 {
        (self.hr + self.doubles + self.singles) / 3.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_set() {
        let set = BaseFactorSet::neutral();
        assert_eq!(set.hr, 100.0);
        assert_eq!(set.doubles, 100.0);
        assert_eq!(set.singles, 100.0);
        assert_eq!(set.runs, 100.0);
        assert!(!set.is_hitter_friendly());
    }

    #[test]
    fn test_hitter_friendly() {
        let set = BaseFactorSet::new(125.5, 115.0, 107.0, 111.5);
        assert!(set.is_hitter_friendly());
    }

    #[test]
    fn test_hit_factor_mean() {
        let adjusted = AdjustedFactorSet::new(110.0, 105.0, 100.0, 105.0);
        assert!((adjusted.hit_factor_mean() - 105.0).abs() < 1e-9);
    }
}
