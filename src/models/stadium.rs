use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Stadium {
    #[validate(length(min = 1))]
    pub name: String,

    pub city: String,

    pub state: String,

    #[validate(length(min = 2, max = 3))]
    pub team_code: String,

    pub elevation_feet: i32,

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

impl Stadium {
    pub fn new(
        name: &str,
        city: &str,
        state: &str,
        team_code: &str,
        elevation_feet: i32,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            name: name.to_string(),
            city: city.to_string(),
            state: state.to_string(),
            team_code: team_code.to_string(),
            elevation_feet,
            latitude,
            longitude,
        }
    }

    pub fn location(&self) -> String {
        format!("{}, {}", self.city, self.state)
    }

    /// Thin-air parks get a visible boost from the elevation multiplier.
    pub fn is_high_altitude(&self) -> bool {
        self.elevation_feet >= 3000
    }
}
