//! Win condition and game outcomes.
//!
//! The player wins as soon as the runner stands on a vertex with no edges in
//! the current graph. `is_won` is the only place that condition is decided.

mod win;

pub use win::{is_won, GameOutcome, OutcomeReason};
