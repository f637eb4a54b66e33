//! Filterable chronological event list.

use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

use crate::feed::{Event, EventKind, MatchEvents};
use crate::MinuteRange;

#[cfg(test)]
mod tests;

/// Kind selected when the caller names none.
pub const DEFAULT_KIND: &str = "Shot";

/// One timeline row, borrowed from the match events
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineEntry<'a> {
    pub minute: u32,
    pub player: &'a str,
    pub kind: &'a EventKind,
    pub shot_outcome: Option<&'a str>,
}

impl fmt::Display for TimelineEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}' - {} - {}", self.minute, self.player, self.kind)?;
        if *self.kind == EventKind::Shot {
            if let Some(outcome) = self.shot_outcome {
                write!(f, " ({outcome})")?;
            }
        }
        Ok(())
    }
}

/// Kinds pre-selected for a match: shots if it has any, else nothing.
pub fn default_kinds(events: &MatchEvents) -> Vec<String> {
    if events.events.iter().any(|e| e.kind == EventKind::Shot) {
        vec![DEFAULT_KIND.to_string()]
    } else {
        Vec::new()
    }
}

/// Events whose kind name is in `kinds` and whose minute lies in `minutes`,
/// ordered by minute. Ties keep feed order.
pub fn timeline<'a>(events: &'a [Event], kinds: &[String], minutes: MinuteRange) -> Vec<TimelineEntry<'a>> {
    let kinds: BTreeSet<&str> = kinds.iter().map(String::as_str).collect();

    let mut entries: Vec<TimelineEntry<'a>> = events
        .iter()
        .filter(|e| kinds.contains(e.kind.name()) && minutes.contains(e.minute))
        .map(|e| TimelineEntry {
            minute: e.minute,
            player: &e.player,
            kind: &e.kind,
            shot_outcome: e.shot_outcome.as_deref(),
        })
        .collect();

    entries.sort_by_key(|e| e.minute);
    entries
}
