//! Entry point: parse CLI, set up logging and dispatch to command handlers.

use clap::Parser;
use match_analyst::{
    cli::{Commands, MatchAnalyst},
    commands::{
        browse::{handle_competitions, handle_dates, handle_seasons, handle_teams},
        player_data::{handle_compare, handle_players, handle_stats},
        summary::handle_summary,
        timeline::handle_timeline,
        CommandContext,
    },
    core::Config,
    Result,
};
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("match_analyst={default_level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(app: MatchAnalyst) -> Result<()> {
    let ctx = CommandContext::new(Config::from_env()?)?;

    match app.command {
        Commands::Competitions { json } => handle_competitions(&ctx, json).await?,

        Commands::Seasons { competition, json } => handle_seasons(&ctx, competition, json).await?,

        Commands::Teams {
            competition,
            season,
            json,
        } => handle_teams(&ctx, competition, season, json).await?,

        Commands::Dates {
            competition,
            season,
            home,
            away,
            json,
        } => handle_dates(&ctx, competition, season, &home, &away, json).await?,

        Commands::Players { selection, json } => handle_players(&ctx, &selection, json).await?,

        Commands::Stats {
            selection,
            player,
            json,
        } => handle_stats(&ctx, &selection, &player, json).await?,

        Commands::Compare {
            selection,
            first,
            second,
            json,
        } => handle_compare(&ctx, &selection, &first, &second, json).await?,

        Commands::Timeline {
            selection,
            kinds,
            minutes,
            json,
        } => handle_timeline(&ctx, &selection, kinds, minutes, json).await?,

        Commands::Summary {
            selection,
            narrate,
            style,
            json,
        } => handle_summary(&ctx, &selection, narrate, style, json).await?,
    }

    Ok(())
}

/// Run the CLI.
#[tokio::main]
async fn main() {
    // A missing .env file is fine; variables may come from the shell
    dotenvy::dotenv().ok();

    let app = MatchAnalyst::parse();
    init_logging(app.verbose);

    if let Err(e) = run(app).await {
        if e.is_data_unavailable() {
            eprintln!("⚠ Could not load match data: {e}");
        } else {
            eprintln!("Error: {e}");
        }
        std::process::exit(1);
    }
}
