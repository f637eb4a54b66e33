//! CLI argument definitions and parsing.

pub mod types;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use types::{
    filters::MinuteRange,
    ids::{CompetitionId, SeasonId},
    style::NarrationStyle,
};

/// Fixture selection shared between the match-level commands.
///
/// Mirrors the selection cascade: competition, season, home team, away team,
/// then the match date.
#[derive(Debug, Clone, Args)]
pub struct MatchSelection {
    /// Competition ID (see `competitions`).
    #[clap(long, short)]
    pub competition: CompetitionId,

    /// Season ID (see `seasons`).
    #[clap(long, short)]
    pub season: SeasonId,

    /// Home team name, exactly as the feed spells it.
    #[clap(long)]
    pub home: String,

    /// Away team name, exactly as the feed spells it.
    #[clap(long)]
    pub away: String,

    /// Match date (YYYY-MM-DD). Defaults to the earliest fixture between the two teams.
    #[clap(long, short)]
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List competitions and their seasons
    Competitions {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// List the seasons available for a competition
    Seasons {
        /// Competition ID.
        #[clap(long, short)]
        competition: CompetitionId,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// List the teams that played in a competition season
    Teams {
        /// Competition ID.
        #[clap(long, short)]
        competition: CompetitionId,

        /// Season ID.
        #[clap(long, short)]
        season: SeasonId,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// List the dates on which the home team hosted the away team
    Dates {
        /// Competition ID.
        #[clap(long, short)]
        competition: CompetitionId,

        /// Season ID.
        #[clap(long, short)]
        season: SeasonId,

        /// Home team name.
        #[clap(long)]
        home: String,

        /// Away team name.
        #[clap(long)]
        away: String,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// List the players who appear in a match's events
    Players {
        #[clap(flatten)]
        selection: MatchSelection,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Show one player's statistics for a match
    Stats {
        #[clap(flatten)]
        selection: MatchSelection,

        /// Player name, exactly as the feed spells it.
        #[clap(long, short)]
        player: String,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Compare two players' statistics for a match
    Compare {
        #[clap(flatten)]
        selection: MatchSelection,

        /// First player name.
        #[clap(long)]
        first: String,

        /// Second player name.
        #[clap(long)]
        second: String,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Show a filtered, chronological list of match events
    Timeline {
        #[clap(flatten)]
        selection: MatchSelection,

        /// Event type to include (repeatable): `-k Shot -k Pass`. Defaults to shots.
        #[clap(long = "kind", short = 'k')]
        kinds: Option<Vec<String>>,

        /// Minute window, e.g. `0-45` or `90-120`.
        #[clap(long, short, default_value_t = MinuteRange::default())]
        minutes: MinuteRange,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Summarize a match's goals and cards, optionally with a generated narration
    Summary {
        #[clap(flatten)]
        selection: MatchSelection,

        /// Ask a text-generation service to narrate the match.
        #[clap(long)]
        narrate: bool,

        /// Narration style.
        #[clap(long, value_enum, default_value_t = NarrationStyle::default())]
        style: NarrationStyle,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(
    name = "match-analyst",
    about = "Explore StatsBomb football match events from the terminal"
)]
pub struct MatchAnalyst {
    /// Log fetches, cache hits and narration attempts.
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}
