use thiserror::Error;

use crate::analysis::predictor::RecordError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Rate limit exceeded, please try again later")]
    RateLimited,

    #[error("Could not find team matching '{0}'")]
    TeamNotFound(String),

    #[error("No data available for season {0}")]
    NoTeamData(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("HTTP error: {0}")]
    HttpError(String),

    #[error("JSON parsing error: {0}")]
    JsonError(String),

    #[error(transparent)]
    InvalidRecord(#[from] RecordError),
}
