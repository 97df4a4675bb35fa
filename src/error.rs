use thiserror::Error;

pub type Result<T> = std::result::Result<T, FactorError>;

#[derive(Error, Debug)]
pub enum FactorError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Weather request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Weather provider returned HTTP {status} for {location}")]
    WeatherStatus { status: u16, location: String },

    #[error("Missing weather credential: {0}")]
    MissingCredential(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Team {team} not found in report")]
    TeamNotFound { team: String },
}
