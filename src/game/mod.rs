//! Game state and the turn controller.
//!
//! `GameState` is a plain value owned by exactly one `TurnController`.
//! The controller is the only code that mutates it, one operation at a time:
//!
//! 1. `submit_partition` validates the player's three groups
//! 2. `flip` toggles edges in the current graph (zero or more times)
//! 3. `end_round` moves the runner, checks for a win and rotates the graphs

mod controller;
mod phase;
mod state;

pub use controller::{RoundResult, TurnController};
pub use phase::Phase;
pub use state::{GameState, RoundRecord, RunnerState, Snapshot};
