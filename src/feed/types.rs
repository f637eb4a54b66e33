//! StatsBomb open data payloads and the domain types decoded from them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;

use crate::core::CacheKey;
use crate::{CompetitionId, MatchId, SeasonId};


/// Player name used for events the feed does not attribute to anyone.
pub const UNKNOWN_PLAYER: &str = "Unknown";

/// Shot outcome the feed uses for a scored goal.
pub const GOAL_OUTCOME: &str = "Goal";

/// One competition season, as listed in `competitions.json`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Competition {
    pub competition_id: CompetitionId,
    pub season_id: SeasonId,
    pub competition_name: String,
    pub season_name: String,
    #[serde(default)]
    pub country_name: String,
}

#[derive(Debug, Deserialize)]
struct RawHomeTeam {
    home_team_name: String,
}

#[derive(Debug, Deserialize)]
struct RawAwayTeam {
    away_team_name: String,
}

/// Match row as it appears in `matches/{competition}/{season}.json`
#[derive(Debug, Deserialize)]
pub struct RawMatch {
    match_id: MatchId,
    match_date: NaiveDate,
    home_team: RawHomeTeam,
    away_team: RawAwayTeam,
    #[serde(default)]
    home_score: Option<u32>,
    #[serde(default)]
    away_score: Option<u32>,
}

/// A fixture within a competition season
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchInfo {
    pub match_id: MatchId,
    pub date: NaiveDate,
    pub home_team: String,
    pub away_team: String,
    pub home_score: Option<u32>,
    pub away_score: Option<u32>,
}

impl From<RawMatch> for MatchInfo {
    fn from(raw: RawMatch) -> Self {
        Self {
            match_id: raw.match_id,
            date: raw.match_date,
            home_team: raw.home_team.home_team_name,
            away_team: raw.away_team.away_team_name,
            home_score: raw.home_score,
            away_score: raw.away_score,
        }
    }
}

impl MatchInfo {
    /// `Home 2-1 Away`, or `Home vs Away` when the score is missing.
    pub fn scoreline(&self) -> String {
        match (self.home_score, self.away_score) {
            (Some(h), Some(a)) => format!("{} {}-{} {}", self.home_team, h, a, self.away_team),
            _ => format!("{} vs {}", self.home_team, self.away_team),
        }
    }
}

/// Event type tag.
///
/// The kinds the statistics and summaries care about get their own variant;
/// every other feed tag is kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventKind {
    Pass,
    Shot,
    Tackle,
    Interception,
    Dribble,
    Aerial,
    FoulCommitted,
    FoulWon,
    Card,
    Other(String),
}

impl EventKind {
    pub fn from_name(name: &str) -> Self {
        match name {
            "Pass" => EventKind::Pass,
            "Shot" => EventKind::Shot,
            "Tackle" => EventKind::Tackle,
            "Interception" => EventKind::Interception,
            "Dribble" => EventKind::Dribble,
            "Aerial" => EventKind::Aerial,
            "Foul Committed" => EventKind::FoulCommitted,
            "Foul Won" => EventKind::FoulWon,
            "Card" => EventKind::Card,
            other => EventKind::Other(other.to_string()),
        }
    }

    /// Name as the feed spells it
    pub fn name(&self) -> &str {
        match self {
            EventKind::Pass => "Pass",
            EventKind::Shot => "Shot",
            EventKind::Tackle => "Tackle",
            EventKind::Interception => "Interception",
            EventKind::Dribble => "Dribble",
            EventKind::Aerial => "Aerial",
            EventKind::FoulCommitted => "Foul Committed",
            EventKind::FoulWon => "Foul Won",
            EventKind::Card => "Card",
            EventKind::Other(name) => name,
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Serialize for EventKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[derive(Debug, Deserialize)]
struct Named {
    name: String,
}

#[derive(Debug, Default, Deserialize)]
struct RawOutcome {
    #[serde(default)]
    outcome: Option<Named>,
}

#[derive(Debug, Default, Deserialize)]
struct RawCard {
    #[serde(default)]
    card: Option<Named>,
}

/// Event row as it appears in `events/{match_id}.json`
#[derive(Debug, Deserialize)]
pub struct RawEvent {
    index: u32,
    #[serde(default)]
    period: u8,
    minute: u32,
    #[serde(default)]
    second: u32,
    #[serde(rename = "type")]
    kind: Named,
    #[serde(default)]
    team: Option<Named>,
    #[serde(default)]
    player: Option<Named>,
    #[serde(default)]
    pass: Option<RawOutcome>,
    #[serde(default)]
    shot: Option<RawOutcome>,
    #[serde(default)]
    bad_behaviour: Option<RawCard>,
    #[serde(default)]
    foul_committed: Option<RawCard>,
    /// Flat card column used by pre-flattened exports
    #[serde(default)]
    card_type: Option<String>,
}

impl RawEvent {
    pub fn into_event(self, match_id: MatchId) -> Event {
        let outcome = |o: Option<RawOutcome>| o.and_then(|o| o.outcome).map(|n| n.name);
        let card = |c: Option<RawCard>| c.and_then(|c| c.card).map(|n| n.name);

        let card_type = self
            .card_type
            .or_else(|| card(self.bad_behaviour))
            .or_else(|| card(self.foul_committed));

        Event {
            match_id,
            index: self.index,
            period: self.period,
            minute: self.minute,
            second: self.second,
            kind: EventKind::from_name(&self.kind.name),
            player: self
                .player
                .map(|p| p.name)
                .unwrap_or_else(|| UNKNOWN_PLAYER.to_string()),
            team: self.team.map(|t| t.name).unwrap_or_default(),
            pass_outcome: outcome(self.pass),
            shot_outcome: outcome(self.shot),
            card_type,
        }
    }
}

/// One match action. Type-specific fields are only set for matching kinds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    pub match_id: MatchId,
    pub index: u32,
    pub period: u8,
    pub minute: u32,
    pub second: u32,
    pub kind: EventKind,
    pub player: String,
    pub team: String,
    pub pass_outcome: Option<String>,
    pub shot_outcome: Option<String>,
    pub card_type: Option<String>,
}

impl Event {
    /// A pass with no outcome: the feed only records outcomes for failed passes.
    pub fn is_completed_pass(&self) -> bool {
        self.kind == EventKind::Pass && self.pass_outcome.is_none()
    }

    pub fn is_goal(&self) -> bool {
        self.kind == EventKind::Shot && self.shot_outcome.as_deref() == Some(GOAL_OUTCOME)
    }

    /// Literal card events, plus fouls and bad behaviour that carry a booking.
    pub fn is_card(&self) -> bool {
        self.kind == EventKind::Card || self.card_type.is_some()
    }
}

/// Composite key identifying one fixture
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct MatchKey {
    pub competition_id: CompetitionId,
    pub season_id: SeasonId,
    pub home_team: String,
    pub away_team: String,
    pub date: NaiveDate,
}

impl MatchKey {
    pub fn matches(&self, info: &MatchInfo) -> bool {
        info.home_team == self.home_team && info.away_team == self.away_team && info.date == self.date
    }
}

impl CacheKey for MatchKey {
    fn label(&self) -> String {
        format!(
            "events_c{}_s{}_{}_{}_{}",
            self.competition_id,
            self.season_id,
            self.home_team.to_lowercase().replace(' ', "_"),
            self.away_team.to_lowercase().replace(' ', "_"),
            self.date
        )
    }
}

/// Event collection of one fixture, in feed order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchEvents {
    pub info: MatchInfo,
    pub events: Vec<Event>,
}

impl MatchEvents {
    pub fn new(info: MatchInfo, raw: Vec<RawEvent>) -> Self {
        let match_id = info.match_id;
        Self {
            info,
            events: raw.into_iter().map(|e| e.into_event(match_id)).collect(),
        }
    }

    /// Sorted, de-duplicated player names
    pub fn players(&self) -> Vec<String> {
        self.events
            .iter()
            .map(|e| e.player.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Sorted, de-duplicated event kind names
    pub fn kinds(&self) -> Vec<String> {
        self.events
            .iter()
            .map(|e| e.kind.name().to_string())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
