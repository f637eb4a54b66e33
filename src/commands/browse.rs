//! Selection cascade commands: competitions, seasons, teams and fixture dates

use super::common::{print_json, CommandContext};
use crate::{CompetitionId, Result, SeasonId};

/// Handle the competitions command
pub async fn handle_competitions(ctx: &CommandContext, json: bool) -> Result<()> {
    let competitions = ctx.store.competitions().await?;

    if json {
        return print_json(competitions.as_slice());
    }

    for c in competitions.iter() {
        println!(
            "{} ({}) - season {} [{}] - {}",
            c.competition_name, c.competition_id, c.season_name, c.season_id, c.country_name
        );
    }
    Ok(())
}

/// Handle the seasons command
pub async fn handle_seasons(ctx: &CommandContext, competition: CompetitionId, json: bool) -> Result<()> {
    let seasons = ctx.store.seasons(competition).await?;

    if json {
        return print_json(&seasons);
    }

    if let Some(first) = seasons.first() {
        println!("{} ({})", first.competition_name, first.competition_id);
    }
    for s in &seasons {
        println!("  {} - {}", s.season_id, s.season_name);
    }
    Ok(())
}

/// Handle the teams command
pub async fn handle_teams(
    ctx: &CommandContext,
    competition: CompetitionId,
    season: SeasonId,
    json: bool,
) -> Result<()> {
    let teams = ctx.store.teams(competition, season).await?;

    if json {
        return print_json(&teams);
    }

    if teams.is_empty() {
        println!("No matches found for competition {competition}, season {season}");
    }
    for team in &teams {
        println!("{team}");
    }
    Ok(())
}

/// Handle the dates command
pub async fn handle_dates(
    ctx: &CommandContext,
    competition: CompetitionId,
    season: SeasonId,
    home: &str,
    away: &str,
    json: bool,
) -> Result<()> {
    let dates = ctx.store.match_dates(competition, season, home, away).await?;

    if json {
        return print_json(&dates);
    }

    if dates.is_empty() {
        println!("⚠ No match found for {home} vs {away}");
    }
    for date in &dates {
        println!("{}", date.format("%d/%m/%Y"));
    }
    Ok(())
}
