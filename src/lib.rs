//! Football match explorer library
//!
//! Reads StatsBomb open event data and derives per-player statistics,
//! head-to-head comparisons, event timelines and goal/card summaries, with an
//! optional generated narration of the match.
//!
//! ## Features
//!
//! - **Selection cascade**: competitions, seasons, teams and fixture dates
//! - **Player statistics**: passes, shots, goals, defensive actions, pass accuracy
//! - **Comparisons**: two players side by side, metric by metric
//! - **Timeline**: events filtered by type and minute window
//! - **Narration**: Gemini first, Hugging Face as fallback
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use match_analyst::{
//!     analysis::{player_statistics, summarize},
//!     core::Config,
//!     feed::{EventStore, MatchKey},
//!     CompetitionId, SeasonId,
//! };
//!
//! # async fn example() -> match_analyst::Result<()> {
//! let store = EventStore::from_config(&Config::from_env()?)?;
//! let key = MatchKey {
//!     competition_id: CompetitionId::new(43),
//!     season_id: SeasonId::new(3),
//!     home_team: "France".to_string(),
//!     away_team: "Croatia".to_string(),
//!     date: NaiveDate::from_ymd_opt(2018, 7, 15).unwrap(),
//! };
//!
//! if let Some(events) = store.load_match(&key).await? {
//!     println!("{}", summarize(&events.events));
//!     println!("{:?}", player_statistics(&events.events, "Paul Pogba"));
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Narration needs at least one credential:
//! ```bash
//! export GEMINI_API_KEY=...
//! export HUGGINGFACE_TOKEN=...
//! ```

pub mod analysis;
pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod feed;
pub mod narration;

// Re-export commonly used types
pub use cli::types::{
    filters::MinuteRange,
    ids::{CompetitionId, MatchId, SeasonId},
    style::NarrationStyle,
};
pub use error::{AnalystError, Result};

pub const FEED_URL_ENV_VAR: &str = "STATSBOMB_DATA_URL";
pub const TIMEOUT_ENV_VAR: &str = "MATCH_ANALYST_HTTP_TIMEOUT_SECS";
pub const GEMINI_KEY_ENV_VAR: &str = "GEMINI_API_KEY";
pub const GEMINI_MODEL_ENV_VAR: &str = "GEMINI_MODEL";
pub const GEMINI_URL_ENV_VAR: &str = "GEMINI_API_URL";
pub const HF_TOKEN_ENV_VAR: &str = "HUGGINGFACE_TOKEN";
pub const HF_MODEL_ENV_VAR: &str = "HUGGINGFACE_MODEL";
pub const HF_URL_ENV_VAR: &str = "HUGGINGFACE_API_URL";
