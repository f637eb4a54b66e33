use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::feed::types::{Competition, MatchInfo, RawEvent, RawMatch};
use crate::{CompetitionId, MatchId, Result, SeasonId};

async fn get_json<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T> {
    debug!(%url, "GET");

    let res = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .json::<T>()
        .await?;

    Ok(res)
}

/// `GET {base}/competitions.json`
pub async fn get_competitions(client: &Client, base_url: &str) -> Result<Vec<Competition>> {
    get_json(client, &format!("{base_url}/competitions.json")).await
}

/// `GET {base}/matches/{competition}/{season}.json`
pub async fn get_matches(
    client: &Client,
    base_url: &str,
    competition_id: CompetitionId,
    season_id: SeasonId,
) -> Result<Vec<MatchInfo>> {
    let url = format!("{base_url}/matches/{}/{}.json", competition_id, season_id);
    let raw: Vec<RawMatch> = get_json(client, &url).await?;
    Ok(raw.into_iter().map(MatchInfo::from).collect())
}

/// `GET {base}/events/{match_id}.json`
pub async fn get_events(client: &Client, base_url: &str, match_id: MatchId) -> Result<Vec<RawEvent>> {
    get_json(client, &format!("{base_url}/events/{}.json", match_id)).await
}
