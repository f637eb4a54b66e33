//! Derivations over a match's event collection.
//!
//! Everything here is a pure function of the events: nothing is cached and
//! nothing is fetched.

pub mod compare;
pub mod stats;
pub mod summary;
pub mod timeline;

#[cfg(test)]
pub(crate) mod fixtures;

pub use compare::{compare_players, PlayerComparison};
pub use stats::{player_statistics, Metric, PlayerStatistics};
pub use summary::{summarize, MatchSummary, NotableEvent};
pub use timeline::{default_kinds, timeline, TimelineEntry};
