//! Event builders shared by the analysis unit tests

use crate::feed::{Event, EventKind};
use crate::MatchId;

pub fn event(index: u32, minute: u32, kind: &str, player: &str, team: &str) -> Event {
    Event {
        match_id: MatchId::new(1),
        index,
        period: if minute < 45 { 1 } else { 2 },
        minute,
        second: 0,
        kind: EventKind::from_name(kind),
        player: player.to_string(),
        team: team.to_string(),
        pass_outcome: None,
        shot_outcome: None,
        card_type: None,
    }
}

pub fn pass(index: u32, player: &str, outcome: Option<&str>) -> Event {
    Event {
        pass_outcome: outcome.map(str::to_string),
        ..event(index, index, "Pass", player, "X")
    }
}

pub fn shot(index: u32, minute: u32, player: &str, team: &str, outcome: &str) -> Event {
    Event {
        shot_outcome: Some(outcome.to_string()),
        ..event(index, minute, "Shot", player, team)
    }
}

pub fn card(index: u32, minute: u32, player: &str, team: &str, card_type: &str) -> Event {
    Event {
        card_type: Some(card_type.to_string()),
        ..event(index, minute, "Card", player, team)
    }
}
