//! Argument parsing and the top-level entry point for the flip-runner CLI.

use std::io::{self, BufRead, Write};

use clap::Parser;
use thiserror::Error;
use tracing::{info, instrument};

use super::session::Session;
use crate::core::{GameConfig, GameError};
use crate::game::TurnController;
use crate::rules::GameOutcome;

/// Consecutive invalid answers tolerated at one prompt.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "flip-runner",
    about = "Isolate the runner by flipping edges between vertex groups."
)]
pub struct Cli {
    /// Number of vertices in the generated graph.
    #[arg(long, short = 'n', default_value_t = GameConfig::default().vertex_count)]
    pub vertices: usize,

    /// Seed for graph generation and the runner's start vertex.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Probability that each vertex pair starts connected.
    #[arg(long = "edge-probability", default_value_t = GameConfig::default().edge_probability)]
    pub edge_probability: f64,

    /// Invalid answers allowed in a row at one prompt before giving up.
    #[arg(
        long = "max-attempts",
        default_value_t = DEFAULT_MAX_ATTEMPTS,
        value_parser = clap::value_parser!(u32).range(1..),
    )]
    pub max_attempts: u32,
}

impl Cli {
    /// Game configuration described by these options.
    #[must_use]
    pub fn game_config(&self) -> GameConfig {
        let config = GameConfig::default()
            .with_vertex_count(self.vertices)
            .with_edge_probability(self.edge_probability);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

/// Errors surfaced while running a terminal session.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading from or writing to the terminal failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    /// Input ended before the game did.
    #[error("input closed before the game ended")]
    InputClosed,
    /// The player kept entering invalid input at one prompt.
    #[error("gave up after {attempts} invalid {prompt} inputs in a row")]
    TooManyInvalidInputs {
        /// Prompt that was being answered.
        prompt: &'static str,
        /// Attempts made.
        attempts: u32,
    },
    /// The game rejected an operation it cannot recover from.
    #[error(transparent)]
    Game(#[from] GameError),
}

/// Set up the game described by `cli` and play it over `input`/`output`.
///
/// # Errors
/// Returns [`CliError`] when the configuration is invalid or the session
/// fails; see [`Session::run`].
///
/// # Examples
/// ```
/// use std::io::Cursor;
/// use flip_runner::cli::{run_cli, Cli};
///
/// // A single vertex has no edges, so the runner is caught before round 1.
/// let cli = Cli { vertices: 1, seed: Some(3), edge_probability: 0.5, max_attempts: 5 };
/// let mut output = Vec::new();
/// let outcome = run_cli(&cli, Cursor::new(""), &mut output).unwrap();
/// assert_eq!(outcome.round, 0);
/// ```
#[instrument(level = "debug", skip(input, output))]
pub fn run_cli(
    cli: &Cli,
    input: impl BufRead,
    output: impl Write,
) -> Result<GameOutcome, CliError> {
    let game = TurnController::new(&cli.game_config())?;
    let outcome = Session::new(game, input, output, cli.max_attempts).run()?;
    info!(
        vertex = %outcome.winning_vertex,
        round = outcome.round,
        "session finished"
    );
    Ok(outcome)
}
