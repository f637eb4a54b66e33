//! Head-to-head comparison of two players in one match.

use serde::Serialize;

use crate::analysis::stats::{player_statistics, Metric, PlayerStatistics};
use crate::feed::Event;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub metric: Metric,
    pub first: f64,
    pub second: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerComparison {
    pub first: PlayerStatistics,
    pub second: PlayerStatistics,
}

impl PlayerComparison {
    /// One row per metric, in display order
    pub fn rows(&self) -> Vec<ComparisonRow> {
        Metric::ALL
            .iter()
            .map(|m| ComparisonRow {
                metric: *m,
                first: self.first.value(*m),
                second: self.second.value(*m),
            })
            .collect()
    }
}

pub fn compare_players(events: &[Event], first: &str, second: &str) -> PlayerComparison {
    PlayerComparison {
        first: player_statistics(events, first),
        second: player_statistics(events, second),
    }
}
