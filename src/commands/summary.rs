//! Summary and narration command implementation

use serde::Serialize;

use super::common::{print_json, CommandContext};
use crate::{
    analysis::{summarize, MatchSummary},
    cli::MatchSelection,
    feed::MatchInfo,
    narration::Narration,
    NarrationStyle, Result,
};

#[derive(Debug, Serialize)]
struct SummaryReport<'a> {
    #[serde(rename = "match")]
    info: &'a MatchInfo,
    summary: &'a MatchSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    style: Option<NarrationStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    narration: Option<&'a Narration>,
}

/// Handle the summary command.
///
/// A narration failure is reported inline; the summary is still printed.
pub async fn handle_summary(
    ctx: &CommandContext,
    selection: &MatchSelection,
    narrate: bool,
    style: NarrationStyle,
    json: bool,
) -> Result<()> {
    let events = ctx.resolve_match(selection).await?;
    let summary = summarize(&events.events);

    let narration = if narrate {
        Some(ctx.narrator().narrate(&summary, style).await)
    } else {
        None
    };

    if json {
        return print_json(&SummaryReport {
            info: &events.info,
            summary: &summary,
            style: narrate.then_some(style),
            narration: narration.as_ref(),
        });
    }

    println!("{}\n", events.info.scoreline());
    if let MatchSummary::Events(_) = summary {
        println!("Key match events:\n");
    }
    println!("{summary}");

    match narration {
        Some(Narration::Generated { provider, text }) => {
            println!("\nNarration ({style}, via {provider}):\n");
            println!("{text}");
        }
        Some(Narration::Unavailable { message }) => println!("\n⚠ {message}"),
        None => {}
    }
    Ok(())
}
