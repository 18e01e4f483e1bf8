//! Core engine types: vertices, RNG, configuration, errors.
//!
//! These are the leaf building blocks shared by the graph, partition, flip
//! and runner modules.

pub mod vertex;
pub mod rng;
pub mod config;
pub mod error;

pub use vertex::{Edge, VertexId};
pub use rng::{GameRng, GameRngState};
pub use config::{GameConfig, MAX_VERTICES};
pub use error::{ConfigError, FlipError, GameError, InvalidVertexError, MoveError, PartitionError};
