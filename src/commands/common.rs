//! Common utilities and helper functions shared across commands.

use reqwest::Client;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

use crate::{
    cli::MatchSelection,
    core::{build_client, Config},
    error::{AnalystError, Result},
    feed::{EventStore, MatchEvents, MatchKey},
    narration::Narrator,
};

/// Resources shared by every command: configuration, the HTTP client and the event store
pub struct CommandContext {
    pub config: Config,
    pub store: EventStore,
    client: Client,
}

impl CommandContext {
    pub fn new(config: Config) -> Result<Self> {
        let client = build_client(config.timeout)?;
        let store = EventStore::new(client.clone(), config.feed_url.clone());

        Ok(Self {
            config,
            store,
            client,
        })
    }

    /// Narration services, built only when a command asks for them.
    pub fn narrator(&self) -> Narrator {
        Narrator::from_config(&self.config, self.client.clone())
    }

    /// Walk the selection cascade down to one fixture and load its events.
    ///
    /// Without an explicit date the earliest fixture between the two teams is used.
    pub async fn resolve_match(&self, selection: &MatchSelection) -> Result<Arc<MatchEvents>> {
        let date = match selection.date {
            Some(date) => date,
            None => {
                let dates = self
                    .store
                    .match_dates(
                        selection.competition,
                        selection.season,
                        &selection.home,
                        &selection.away,
                    )
                    .await?;

                *dates.first().ok_or_else(|| AnalystError::NoFixtures {
                    home: selection.home.clone(),
                    away: selection.away.clone(),
                })?
            }
        };
        debug!(%date, "fixture date resolved");

        let key = MatchKey {
            competition_id: selection.competition,
            season_id: selection.season,
            home_team: selection.home.clone(),
            away_team: selection.away.clone(),
            date,
        };

        let events = self.store.load_match(&key).await?;
        events.ok_or_else(|| AnalystError::MatchNotFound {
            home: key.home_team,
            away: key.away_team,
            date: key.date.to_string(),
        })
    }
}

/// Pretty-print `value` as JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
