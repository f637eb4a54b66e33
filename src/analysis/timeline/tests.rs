//! Unit tests for the event timeline

use super::*;
use crate::analysis::fixtures::{event, pass, shot};
use crate::feed::MatchInfo;
use crate::MatchId;
use chrono::NaiveDate;

fn kinds(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn match_events(events: Vec<Event>) -> MatchEvents {
    MatchEvents {
        info: MatchInfo {
            match_id: MatchId::new(1),
            date: NaiveDate::from_ymd_opt(2022, 12, 18).unwrap(),
            home_team: "Argentina".to_string(),
            away_team: "France".to_string(),
            home_score: Some(3),
            away_score: Some(3),
        },
        events,
    }
}

#[test]
fn test_filters_by_kind_and_minute() {
    let events = vec![
        shot(1, 5, "A", "X", "Saved"),
        pass(2, "B", None),
        shot(3, 50, "C", "Y", "Goal"),
        event(4, 60, "Tackle", "D", "Y"),
        shot(5, 93, "E", "X", "Goal"),
    ];

    let entries = timeline(&events, &kinds(&["Shot"]), MinuteRange::default());

    let players: Vec<&str> = entries.iter().map(|e| e.player).collect();
    assert_eq!(players, vec!["A", "C"]);
}

#[test]
fn test_minute_range_is_inclusive() {
    let events = vec![
        event(1, 10, "Tackle", "A", "X"),
        event(2, 20, "Tackle", "B", "X"),
        event(3, 21, "Tackle", "C", "X"),
    ];

    let range = MinuteRange::new(10, 20).unwrap();
    let entries = timeline(&events, &kinds(&["Tackle"]), range);

    assert_eq!(entries.len(), 2);
}

#[test]
fn test_multiple_kinds_sorted_by_minute() {
    let events = vec![
        event(1, 30, "Tackle", "A", "X"),
        shot(2, 12, "B", "Y", "Off T"),
        event(3, 12, "Interception", "C", "X"),
    ];

    let entries = timeline(
        &events,
        &kinds(&["Tackle", "Shot", "Interception"]),
        MinuteRange::default(),
    );

    let rendered: Vec<String> = entries.iter().map(|e| e.to_string()).collect();
    assert_eq!(
        rendered,
        vec![
            "12' - B - Shot (Off T)",
            "12' - C - Interception",
            "30' - A - Tackle",
        ]
    );
}

#[test]
fn test_empty_selection_is_empty_result() {
    let events = vec![shot(1, 5, "A", "X", "Goal")];

    assert!(timeline(&events, &[], MinuteRange::default()).is_empty());
}

#[test]
fn test_default_kinds() {
    let with_shots = match_events(vec![shot(1, 5, "A", "X", "Goal")]);
    let without_shots = match_events(vec![pass(1, "A", None)]);

    assert_eq!(default_kinds(&with_shots), vec!["Shot"]);
    assert!(default_kinds(&without_shots).is_empty());
}
