//! Runner movement.
//!
//! The runner moves once per round. Where it may go is decided by the
//! previous round's graph; where it wants to go is decided by degrees in the
//! graph the player just flipped.

mod policy;

pub use policy::{MaxDegreePolicy, RunnerPolicy};
