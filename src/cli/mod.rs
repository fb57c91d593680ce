//! Command-line interface for match-solver.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **solve**: run the full enumeration and print per-constraint tables
//! - **check**: validate a game description without running it
//! - **count**: measure the unconstrained candidate space
//!
//! ## Usage
//!
//! ```text
//! # Run a game and show every table
//! match-solver solve season2.yaml
//!
//! # Also write season2_tab.dot/.pdf/.png and the statistics series
//! match-solver solve season2.yaml --output-stem season2
//!
//! # Dump the surviving matchings for inspection
//! match-solver solve season2.yaml --matchings left.dat
//!
//! # JSON output for scripting
//! match-solver solve season2.yaml --format json
//! ```

use clap::{Parser, Subcommand};

pub mod check;
pub mod count;
pub mod solve;

#[derive(Parser)]
#[command(name = "match-solver")]
#[command(version)]
#[command(about = "Enumerate candidate matchings between two label sets and rank constraint informativeness")]
#[command(
    long_about = "match-solver exhaustively enumerates every candidate matching between two label sets (the smaller set absorbing one duplicate), filters the space through an ordered list of empirical constraints, and reports which assignments remain plausible:\n- per-pair percentage tables before filtering and after each constraint\n- the information (in bits) each constraint contributed\n- plottable per-kind statistics series"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a game: enumerate, filter, and report statistics
    Solve(solve::SolveArgs),

    /// Validate a game description without running it
    Check(check::CheckArgs),

    /// Measure the unconstrained candidate space of a game
    Count(count::CountArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
