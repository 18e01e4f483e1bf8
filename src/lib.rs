//! # flip-runner
//!
//! A single-player pursuit game on small undirected graphs.
//!
//! A runner token sits on a vertex. Each round the player splits the vertices
//! into three groups and flips edges between (or within) groups; the runner
//! then greedily moves to its neighbour with the most edges. The player wins
//! once the runner lands on a vertex with no edges at all.
//!
//! ## Design Principles
//!
//! 1. **Flips Are Relative to `G0`**: Every flip sets a pair to the opposite
//!    of the original graph, so repeating a flip within a round is harmless.
//!
//! 2. **One Owner**: `GameState` is a plain value mutated only by the
//!    `TurnController`, one operation at a time.
//!
//! 3. **Pluggable Runner**: Movement goes through the `RunnerPolicy` trait;
//!    the greedy max-degree rule is the default.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: Adjacency rows are `im-rs` sets, so the
//!   three graphs and every render snapshot share structure.
//!
//! - **Deterministic Setup**: Graph generation and the start vertex come from
//!   a seeded ChaCha8 RNG; the same seed gives the same game.
//!
//! ## Modules
//!
//! - `core`: Vertex IDs, RNG, configuration, errors
//! - `graph`: Undirected simple graph
//! - `partition`: Three-group vertex partition and its validation
//! - `flip`: Flip commands and the baseline-relative flip engine
//! - `runner`: Runner movement policy
//! - `rules`: Win condition and game outcome
//! - `game`: Game state, phases and the turn controller
//! - `cli`: Terminal session (input parsing and text rendering)
//! - `logging`: Structured logging setup

pub mod cli;
pub mod core;
pub mod flip;
pub mod game;
pub mod graph;
pub mod logging;
pub mod partition;
pub mod rules;
pub mod runner;

// Re-export commonly used types
pub use crate::core::{
    Edge, VertexId,
    GameRng, GameRngState,
    GameConfig, MAX_VERTICES,
    ConfigError, FlipError, GameError, InvalidVertexError, MoveError, PartitionError,
};

pub use crate::graph::Graph;

pub use crate::partition::{GroupIndex, Partition, GROUP_COUNT};

pub use crate::flip::{FlipCommand, FlipEngine, FlipReport};

pub use crate::runner::{MaxDegreePolicy, RunnerPolicy};

pub use crate::rules::{is_won, GameOutcome, OutcomeReason};

pub use crate::game::{
    Phase, GameState, RoundRecord, RoundResult, RunnerState, Snapshot, TurnController,
};
