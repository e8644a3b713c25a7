// Recipe Finder - search TheMealDB by ingredient from the terminal
//
// Architecture:
// - API client (reqwest): the two TheMealDB endpoints, typed errors
// - State: pure reducer over UI events, emits fetch commands
// - Dispatch: runs fetch commands on tokio tasks, feeds results back
// - TUI (ratatui): renders the state, turns key presses into events
// - CLI (clap): config management and headless search/show

mod api;
mod cli;
mod config;
mod dispatch;
mod logging;
mod state;
mod tui;

use anyhow::{Context, Result};
use api::{MealDbClient, RecipeId};
use clap::Parser;
use cli::{Cli, Commands};
use config::{Config, VERSION};
use logging::{LogBuffer, LogSink};
use tracing_appender::non_blocking::WorkerGuard;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Config { show, reset, path }) => cli::handle_config(show, reset, path),
        Some(Commands::Search { ingredient }) => {
            let (_config, client, _guard) = bootstrap(LogSink::Stderr)?;
            cli::run_search(&client, &ingredient.join(" ")).await
        }
        Some(Commands::Show { id }) => {
            let (_config, client, _guard) = bootstrap(LogSink::Stderr)?;
            cli::run_show(&client, &RecipeId::new(id)).await
        }
        None => {
            // In TUI mode logs are captured to the buffer so they don't garble the display
            let log_buffer = LogBuffer::new();
            let (config, client, _guard) = bootstrap(LogSink::Tui(log_buffer.clone()))?;
            tui::run_tui(client, config, log_buffer).await
        }
    }
}

/// Load config, install logging and build the API client
///
/// The returned guard must outlive the program so file logs are flushed.
fn bootstrap(sink: LogSink) -> Result<(Config, MealDbClient, Option<WorkerGuard>)> {
    // Write a commented template on first run so the options are discoverable
    Config::ensure_config_exists();
    let config = Config::from_env();

    let guard = logging::init(&config.logging, sink);
    tracing::info!("recipe-finder v{} starting", VERSION);

    let client = MealDbClient::from_config(&config).context("Failed to create TheMealDB client")?;
    Ok((config, client, guard))
}
