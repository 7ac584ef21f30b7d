//! Occupancy Grid - CLI
//!
//! Builds a board from a scenario and answers occupancy queries on stderr.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use occupancy_grid::{Board, Coordinate, DebugMode, Scenario};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let board = build_board(cli.scenario.as_deref())?;

    match cli.command {
        Command::Count { x, y } => run_count(&board, Coordinate::new(x, y)),
        Command::Census => run_census(&board),
        Command::Render => run_render(&board),
    }

    Ok(())
}

/// Resolve the debug toggle, load the scenario and build the board.
#[instrument]
fn build_board(scenario_path: Option<&std::path::Path>) -> Result<Board> {
    let env_debug = DebugMode::from_env()?;
    let settings = Scenario::load_or_sample(scenario_path)?.into_settings(env_debug)?;

    let (board, debug_view) = Board::construct_with(settings)?.dissolve();
    if let Some(view) = debug_view {
        eprintln!("{}", board.title());
        eprintln!("{}", view);
    }

    info!(
        rows = board.rows(),
        columns = board.columns(),
        occupants = board.occupants().len(),
        "Board ready"
    );
    Ok(board)
}

/// Print the occupancy count at a coordinate
#[instrument(skip(board))]
fn run_count(board: &Board, position: Coordinate) {
    let count = board.count_at(position);
    eprintln!("There are {} occupants at {}.", count, position);
}

/// Print every occupied coordinate
#[instrument(skip(board))]
fn run_census(board: &Board) {
    for (position, count) in board.census() {
        eprintln!("{}: {}", position, count);
    }
}

/// Print the title and debug view
#[instrument(skip(board))]
fn run_render(board: &Board) {
    eprintln!("{}", board.title());
    eprintln!("{}", board.render_debug_view());
}
