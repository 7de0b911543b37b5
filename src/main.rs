//! Entry point: parse CLI, set up logging and dispatch to page handlers.

use anyhow::Context;
use clap::Parser;
use hoop_stats::{
    cli::{Commands, HoopStats},
    commands::{
        advanced::handle_advanced,
        career::handle_career,
        dashboard::handle_dashboard,
        game_log::{handle_game_log, GameLogQuery},
        impact::handle_impact,
        shooting::handle_shooting,
        splits::handle_splits,
        trends::handle_trends,
        PageContext,
    },
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = if verbose {
        EnvFilter::new(default)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Run the CLI.
fn main() -> anyhow::Result<()> {
    let app = HoopStats::parse();
    init_tracing(app.page.verbose);
    info!(page = ?app.command, "page selected");

    let ctx = PageContext::load(&app.page).context("Failed to load dashboard datasets")?;
    info!(season = %ctx.season, generated_at = %ctx.dataset.generated_at, "datasets ready");

    match app.command {
        Commands::Dashboard => handle_dashboard(&ctx)?,
        Commands::Impact => handle_impact(&ctx)?,
        Commands::GameLog { opponent, wl, sort } => {
            handle_game_log(&ctx, &GameLogQuery { opponent, wl, sort })?
        }
        Commands::Shooting { shots } => handle_shooting(&ctx, shots)?,
        Commands::Trends => handle_trends(&ctx)?,
        Commands::Splits { sort } => handle_splits(&ctx, &sort)?,
        Commands::Career { sort } => handle_career(&ctx, &sort)?,
        Commands::Advanced { sort } => handle_advanced(&ctx, &sort)?,
    }

    Ok(())
}
