//! Command-line interface for occupancy_grid.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Occupancy Grid - count who stands where on a fixed-size board
#[derive(Parser, Debug)]
#[command(name = "occupancy_grid")]
#[command(about = "Occupancy queries over a fixed-size board", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Scenario TOML file. Uses the built-in sample if not provided.
    #[arg(long, global = true)]
    pub scenario: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Count the occupants at a coordinate
    Count {
        /// Row component
        #[arg(short, long, default_value = "1", allow_hyphen_values = true)]
        x: i32,

        /// Column component
        #[arg(short, long, default_value = "1", allow_hyphen_values = true)]
        y: i32,
    },

    /// List every occupied coordinate with its count
    Census,

    /// Render the debug view regardless of DEBUG_APP
    Render,
}
