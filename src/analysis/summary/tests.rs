//! Unit tests for the match summary

use super::*;
use crate::analysis::fixtures::{card, event, pass, shot};

#[test]
fn test_goal_before_card_at_same_minute() {
    let events = vec![
        shot(1, 10, "A", "X", "Goal"),
        card(2, 10, "B", "Y", "Yellow"),
    ];

    let rendered = summarize(&events).render();
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "10' - Goal: A (X)");
    assert_eq!(lines[1], "10' - Card Yellow: B (Y)");
}

#[test]
fn test_goal_stays_first_even_when_card_is_earlier_in_feed() {
    let events = vec![
        card(1, 10, "B", "Y", "Yellow"),
        shot(2, 10, "A", "X", "Goal"),
    ];

    let summary = summarize(&events);

    assert_eq!(summary.events()[0].label, "Goal");
    assert_eq!(summary.events()[1].label, "Card Yellow");
}

#[test]
fn test_sorted_by_minute() {
    let events = vec![
        shot(1, 80, "A", "X", "Goal"),
        shot(2, 12, "C", "Y", "Goal"),
        card(3, 45, "B", "Y", "Red"),
        card(4, 3, "D", "X", "Yellow"),
        shot(5, 95, "E", "X", "Goal"),
    ];

    let summary = summarize(&events);
    let minutes: Vec<u32> = summary.events().iter().map(|e| e.minute).collect();

    assert_eq!(minutes, vec![3, 12, 45, 80, 95]);
    assert!(minutes.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_same_minute_goals_keep_feed_order() {
    let events = vec![
        shot(1, 30, "First", "X", "Goal"),
        shot(2, 30, "Second", "Y", "Goal"),
    ];

    let summary = summarize(&events);

    assert_eq!(summary.events()[0].player, "First");
    assert_eq!(summary.events()[1].player, "Second");
}

#[test]
fn test_non_goal_shots_are_ignored() {
    let events = vec![
        shot(1, 10, "A", "X", "Saved"),
        shot(2, 20, "A", "X", "Post"),
    ];

    assert_eq!(summarize(&events), MatchSummary::NoNotableEvents);
}

#[test]
fn test_no_notable_events_sentinel() {
    let events = vec![
        pass(1, "A", None),
        event(2, 5, "Tackle", "B", "Y"),
        event(3, 6, "Foul Committed", "B", "Y"),
    ];

    let summary = summarize(&events);

    assert_eq!(summary, MatchSummary::NoNotableEvents);
    assert_eq!(summary.render(), NO_NOTABLE_EVENTS);
    assert!(summary.events().is_empty());
}

#[test]
fn test_card_without_type() {
    let events = vec![event(1, 50, "Card", "B", "Y")];

    assert_eq!(summarize(&events).render(), "50' - Card: B (Y)");
}

#[test]
fn test_booking_on_foul_counts_as_card() {
    let mut foul = event(1, 70, "Foul Committed", "B", "Y");
    foul.card_type = Some("Second Yellow".to_string());

    assert_eq!(summarize(&[foul]).render(), "70' - Card Second Yellow: B (Y)");
}

#[test]
fn test_feed_card_name_is_appended_verbatim() {
    let events = vec![card(1, 88, "B", "Y", "Red Card")];

    assert_eq!(summarize(&events).render(), "88' - Card Red Card: B (Y)");
}

#[test]
fn test_summary_json_shape() {
    let summary = summarize(&[shot(1, 10, "A", "X", "Goal")]);
    let value = serde_json::to_value(&summary).unwrap();

    assert_eq!(value["status"], "events");
    assert_eq!(value["events"][0]["minute"], 10);
    assert_eq!(value["events"][0]["label"], "Goal");

    let empty = serde_json::to_value(MatchSummary::NoNotableEvents).unwrap();
    assert_eq!(empty["status"], "no_notable_events");
}
