//! Goal and card timeline of a match.

use serde::Serialize;
use std::fmt;

use crate::feed::Event;

#[cfg(test)]
mod tests;

/// Rendered in place of the timeline when a match has no goals or cards.
pub const NO_NOTABLE_EVENTS: &str = "No notable events recorded in the match";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotableEvent {
    pub minute: u32,
    pub label: String,
    pub player: String,
    pub team: String,
}

impl fmt::Display for NotableEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}' - {}: {} ({})",
            self.minute, self.label, self.player, self.team
        )
    }
}

/// Goals and cards in minute order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "events", rename_all = "snake_case")]
pub enum MatchSummary {
    Events(Vec<NotableEvent>),
    NoNotableEvents,
}

impl MatchSummary {
    pub fn events(&self) -> &[NotableEvent] {
        match self {
            MatchSummary::Events(events) => events,
            MatchSummary::NoNotableEvents => &[],
        }
    }

    /// One line per event, or the no-notable-events sentinel.
    pub fn render(&self) -> String {
        match self {
            MatchSummary::Events(events) => events
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("\n"),
            MatchSummary::NoNotableEvents => NO_NOTABLE_EVENTS.to_string(),
        }
    }
}

impl fmt::Display for MatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

fn notable(event: &Event, label: String) -> NotableEvent {
    NotableEvent {
        minute: event.minute,
        label,
        player: event.player.clone(),
        team: event.team.clone(),
    }
}

/// Extract goals, then cards, and order them by minute.
///
/// The sort is stable, so at equal minutes goals stay ahead of cards and
/// each group keeps feed order.
///
/// Card labels are "Card " followed by the feed's card name. StatsBomb names
/// already end in "Card", so a booking renders as "Card Yellow Card".
pub fn summarize(events: &[Event]) -> MatchSummary {
    let goals = events
        .iter()
        .filter(|e| e.is_goal())
        .map(|e| notable(e, "Goal".to_string()));

    let cards = events.iter().filter(|e| e.is_card()).map(|e| {
        let label = match &e.card_type {
            Some(card_type) => format!("Card {card_type}"),
            None => "Card".to_string(),
        };
        notable(e, label)
    });

    let mut notable_events: Vec<NotableEvent> = goals.chain(cards).collect();
    if notable_events.is_empty() {
        return MatchSummary::NoNotableEvents;
    }

    notable_events.sort_by_key(|e| e.minute);
    MatchSummary::Events(notable_events)
}
