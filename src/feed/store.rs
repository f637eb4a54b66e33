//! Read-through event store over the StatsBomb open data feed.
//!
//! Each lookup is memoized for the lifetime of the store by its exact
//! arguments, including lookups that found no fixture.

use chrono::NaiveDate;
use reqwest::Client;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, info};

use crate::core::{
    build_client,
    cache::{CompetitionsCacheKey, SeasonCacheKey},
    CacheStatus, Config, MemoCache,
};
use crate::error::{AnalystError, Result};
use crate::feed::{
    http::{get_competitions, get_events, get_matches},
    types::{Competition, MatchEvents, MatchInfo, MatchKey},
};
use crate::{CompetitionId, SeasonId};

pub struct EventStore {
    client: Client,
    base_url: String,
    competitions: MemoCache<CompetitionsCacheKey, Arc<Vec<Competition>>>,
    matches: MemoCache<SeasonCacheKey, Arc<Vec<MatchInfo>>>,
    events: MemoCache<MatchKey, Option<Arc<MatchEvents>>>,
}

impl EventStore {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            competitions: MemoCache::new(),
            matches: MemoCache::new(),
            events: MemoCache::new(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(build_client(config.timeout)?, config.feed_url.clone()))
    }

    /// Every competition season the feed offers, in feed order.
    pub async fn competitions(&self) -> Result<Arc<Vec<Competition>>> {
        let (competitions, status) = self
            .competitions
            .get_or_try_fetch(CompetitionsCacheKey, || async {
                Ok::<_, AnalystError>(Arc::new(
                    get_competitions(&self.client, &self.base_url).await?,
                ))
            })
            .await?;

        if status == CacheStatus::Miss {
            info!(count = competitions.len(), "competitions fetched");
        }
        Ok(competitions)
    }

    /// Seasons of one competition, sorted by season id.
    ///
    /// Fails with `UnknownCompetition` when the feed has no such competition.
    pub async fn seasons(&self, competition_id: CompetitionId) -> Result<Vec<Competition>> {
        let mut seasons: Vec<Competition> = self
            .competitions()
            .await?
            .iter()
            .filter(|c| c.competition_id == competition_id)
            .cloned()
            .collect();

        if seasons.is_empty() {
            return Err(AnalystError::UnknownCompetition {
                competition_id: competition_id.as_u32(),
            });
        }

        seasons.sort_by_key(|c| c.season_id);
        seasons.dedup_by_key(|c| c.season_id);
        Ok(seasons)
    }

    /// Fixtures of one competition season, in feed order.
    pub async fn matches(
        &self,
        competition_id: CompetitionId,
        season_id: SeasonId,
    ) -> Result<Arc<Vec<MatchInfo>>> {
        let key = SeasonCacheKey {
            competition_id,
            season_id,
        };

        let (matches, status) = self
            .matches
            .get_or_try_fetch(key, || async {
                Ok::<_, AnalystError>(Arc::new(
                    get_matches(&self.client, &self.base_url, competition_id, season_id).await?,
                ))
            })
            .await?;

        if status == CacheStatus::Miss {
            info!(
                competition = %competition_id,
                season = %season_id,
                count = matches.len(),
                "matches fetched"
            );
        }
        Ok(matches)
    }

    /// Sorted union of home and away team names.
    pub async fn teams(&self, competition_id: CompetitionId, season_id: SeasonId) -> Result<Vec<String>> {
        let matches = self.matches(competition_id, season_id).await?;

        Ok(matches
            .iter()
            .flat_map(|m| [m.home_team.clone(), m.away_team.clone()])
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect())
    }

    /// Sorted dates on which `home` hosted `away`.
    pub async fn match_dates(
        &self,
        competition_id: CompetitionId,
        season_id: SeasonId,
        home: &str,
        away: &str,
    ) -> Result<Vec<NaiveDate>> {
        let matches = self.matches(competition_id, season_id).await?;

        Ok(matches
            .iter()
            .filter(|m| m.home_team == home && m.away_team == away)
            .map(|m| m.date)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect())
    }

    /// Events of the first fixture matching `key`, or `None` when there is no such fixture.
    pub async fn load_match(&self, key: &MatchKey) -> Result<Option<Arc<MatchEvents>>> {
        let (events, status) = self
            .events
            .get_or_try_fetch(key.clone(), || async {
                let matches = self.matches(key.competition_id, key.season_id).await?;
                let Some(info) = matches.iter().find(|m| key.matches(m)) else {
                    debug!(home = %key.home_team, away = %key.away_team, date = %key.date, "no fixture");
                    return Ok::<_, AnalystError>(None);
                };

                let raw = get_events(&self.client, &self.base_url, info.match_id).await?;
                Ok(Some(Arc::new(MatchEvents::new(info.clone(), raw))))
            })
            .await?;

        if status == CacheStatus::Miss {
            if let Some(events) = &events {
                info!(
                    match_id = %events.info.match_id,
                    count = events.events.len(),
                    "match events fetched"
                );
            }
        }
        Ok(events)
    }

    /// Memoized entry counts: (competition listings, season fixture lists, match events)
    pub fn cache_sizes(&self) -> (usize, usize, usize) {
        (self.competitions.len(), self.matches.len(), self.events.len())
    }
}
