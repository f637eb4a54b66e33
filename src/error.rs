//! Error types for the match analyst CLI

use thiserror::Error;


pub type Result<T> = std::result::Result<T, AnalystError>;

#[derive(Error, Debug)]
pub enum AnalystError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("No match found for {home} vs {away}")]
    NoFixtures { home: String, away: String },

    #[error("No match found for {home} vs {away} on {date}")]
    MatchNotFound {
        home: String,
        away: String,
        date: String,
    },

    #[error("Unknown competition: {competition_id}")]
    UnknownCompetition { competition_id: u32 },

    #[error("Invalid narration style: {style}")]
    InvalidStyle { style: String },

    #[error("Invalid minute range: {from}-{to}")]
    InvalidMinuteRange { from: u32, to: u32 },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl AnalystError {
    /// Whether this error means the selected match data could not be obtained.
    ///
    /// These halt the current command with a warning rather than a crash.
    pub fn is_data_unavailable(&self) -> bool {
        matches!(
            self,
            AnalystError::Http(_)
                | AnalystError::Json(_)
                | AnalystError::NoFixtures { .. }
                | AnalystError::MatchNotFound { .. }
                | AnalystError::UnknownCompetition { .. }
        )
    }
}
