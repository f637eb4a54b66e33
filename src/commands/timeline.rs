//! Timeline command implementation

use tracing::warn;

use super::common::{print_json, CommandContext};
use crate::{
    analysis::{default_kinds, timeline},
    cli::MatchSelection,
    MinuteRange, Result,
};

/// Handle the timeline command
pub async fn handle_timeline(
    ctx: &CommandContext,
    selection: &MatchSelection,
    kinds: Option<Vec<String>>,
    minutes: MinuteRange,
    json: bool,
) -> Result<()> {
    let events = ctx.resolve_match(selection).await?;

    let available = events.kinds();
    let kinds = kinds.unwrap_or_else(|| default_kinds(&events));
    for kind in kinds.iter().filter(|k| !available.contains(*k)) {
        warn!(%kind, "event type does not occur in this match");
    }

    let entries = timeline(&events.events, &kinds, minutes);

    if json {
        return print_json(&entries);
    }

    println!(
        "{} | {} | minutes {}",
        events.info.scoreline(),
        kinds.join(", "),
        minutes
    );
    if entries.is_empty() {
        println!("No events in this selection");
    }
    for entry in &entries {
        println!("{entry}");
    }
    Ok(())
}
