//! Per-player statistics over a match's event collection.
//!
//! Statistics are derived fresh from the events on every call. Players are
//! matched on their exact display name, so two players sharing a name in one
//! match are counted together.

use serde::Serialize;
use std::fmt;

use crate::feed::{Event, EventKind};


/// Metrics reported for a player, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Metric {
    Passes,
    PassesCompleted,
    Shots,
    Goals,
    Tackles,
    Interceptions,
    Dribbles,
    Aerials,
    FoulsCommitted,
    FoulsWon,
    PassAccuracy,
}

impl Metric {
    pub const ALL: [Metric; 11] = [
        Metric::Passes,
        Metric::PassesCompleted,
        Metric::Shots,
        Metric::Goals,
        Metric::Tackles,
        Metric::Interceptions,
        Metric::Dribbles,
        Metric::Aerials,
        Metric::FoulsCommitted,
        Metric::FoulsWon,
        Metric::PassAccuracy,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Metric::Passes => "Passes",
            Metric::PassesCompleted => "Passes Completed",
            Metric::Shots => "Shots",
            Metric::Goals => "Goals",
            Metric::Tackles => "Tackles",
            Metric::Interceptions => "Interceptions",
            Metric::Dribbles => "Dribbles",
            Metric::Aerials => "Aerials",
            Metric::FoulsCommitted => "Fouls Committed",
            Metric::FoulsWon => "Fouls Won",
            Metric::PassAccuracy => "Pass Accuracy",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Counters for one player in one match
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlayerStatistics {
    pub player: String,
    pub passes: u32,
    pub passes_completed: u32,
    pub shots: u32,
    pub goals: u32,
    pub tackles: u32,
    pub interceptions: u32,
    pub dribbles: u32,
    pub aerials: u32,
    pub fouls_committed: u32,
    pub fouls_won: u32,
    /// Percentage of completed passes, one decimal place; 0 without passes
    pub pass_accuracy: f64,
}

impl PlayerStatistics {
    pub fn value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Passes => self.passes as f64,
            Metric::PassesCompleted => self.passes_completed as f64,
            Metric::Shots => self.shots as f64,
            Metric::Goals => self.goals as f64,
            Metric::Tackles => self.tackles as f64,
            Metric::Interceptions => self.interceptions as f64,
            Metric::Dribbles => self.dribbles as f64,
            Metric::Aerials => self.aerials as f64,
            Metric::FoulsCommitted => self.fouls_committed as f64,
            Metric::FoulsWon => self.fouls_won as f64,
            Metric::PassAccuracy => self.pass_accuracy,
        }
    }

    /// (metric, value) pairs in display order
    pub fn entries(&self) -> Vec<(Metric, f64)> {
        Metric::ALL.iter().map(|m| (*m, self.value(*m))).collect()
    }

    /// True when the player has no recorded actions at all
    pub fn is_empty(&self) -> bool {
        Metric::ALL.iter().all(|m| self.value(*m) == 0.0)
    }
}

/// Completed share of `passes`, as a percentage rounded to one decimal place.
///
/// Exact ties round to the even digit, so 77 of 80 gives 96.2.
pub fn pass_accuracy(passes: u32, completed: u32) -> f64 {
    if passes == 0 {
        return 0.0;
    }
    let pct = completed as f64 / passes as f64 * 100.0;
    (pct * 10.0).round_ties_even() / 10.0
}

/// Statistics for `player` over `events`.
///
/// An unknown player yields all-zero counters rather than an error.
pub fn player_statistics(events: &[Event], player: &str) -> PlayerStatistics {
    let mut stats = PlayerStatistics {
        player: player.to_string(),
        ..Default::default()
    };

    for event in events.iter().filter(|e| e.player == player) {
        match event.kind {
            EventKind::Pass => {
                stats.passes += 1;
                if event.is_completed_pass() {
                    stats.passes_completed += 1;
                }
            }
            EventKind::Shot => {
                stats.shots += 1;
                if event.is_goal() {
                    stats.goals += 1;
                }
            }
            EventKind::Tackle => stats.tackles += 1,
            EventKind::Interception => stats.interceptions += 1,
            EventKind::Dribble => stats.dribbles += 1,
            EventKind::Aerial => stats.aerials += 1,
            EventKind::FoulCommitted => stats.fouls_committed += 1,
            EventKind::FoulWon => stats.fouls_won += 1,
            EventKind::Card | EventKind::Other(_) => {}
        }
    }

    stats.pass_accuracy = pass_accuracy(stats.passes, stats.passes_completed);
    stats
}
