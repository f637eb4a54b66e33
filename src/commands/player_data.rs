//! Player-level commands: player list, individual statistics and comparisons

use tracing::warn;

use super::{
    common::{print_json, CommandContext},
    render::{comparison_chart, stats_chart},
};
use crate::{
    analysis::{compare_players, player_statistics},
    cli::MatchSelection,
    Result,
};

/// Handle the players command
pub async fn handle_players(ctx: &CommandContext, selection: &MatchSelection, json: bool) -> Result<()> {
    let events = ctx.resolve_match(selection).await?;
    let players = events.players();

    if json {
        return print_json(&players);
    }

    println!("{}", events.info.scoreline());
    for player in &players {
        println!("  {player}");
    }
    Ok(())
}

/// Handle the stats command
pub async fn handle_stats(
    ctx: &CommandContext,
    selection: &MatchSelection,
    player: &str,
    json: bool,
) -> Result<()> {
    let events = ctx.resolve_match(selection).await?;
    let stats = player_statistics(&events.events, player);

    if stats.is_empty() {
        warn!(%player, "no events recorded for player in this match");
    }

    if json {
        return print_json(&stats);
    }

    println!("{}\n", events.info.scoreline());
    print!("{}", stats_chart(&stats));
    Ok(())
}

/// Handle the compare command
pub async fn handle_compare(
    ctx: &CommandContext,
    selection: &MatchSelection,
    first: &str,
    second: &str,
    json: bool,
) -> Result<()> {
    let events = ctx.resolve_match(selection).await?;
    let comparison = compare_players(&events.events, first, second);

    if json {
        return print_json(&comparison);
    }

    println!("{}\n", events.info.scoreline());
    print!("{}", comparison_chart(&comparison));
    Ok(())
}
