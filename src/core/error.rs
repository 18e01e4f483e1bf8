//! Error types for the game engine.
//!
//! Validation errors (`InvalidVertexError`, `PartitionError`, `FlipError`,
//! `ConfigError`) are recoverable: the caller re-prompts and the game state is
//! left untouched. `MoveError` is reported by the runner policy and turned
//! into an outcome by the turn controller. `GameError` wraps everything a
//! controller operation can return.

use thiserror::Error;

use super::vertex::VertexId;
use crate::game::Phase;

/// A graph primitive was given an unusable vertex pair.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvalidVertexError {
    /// Vertex id outside `[0, vertex_count)`.
    #[error("vertex {vertex} is out of range (graph has {vertex_count} vertices)")]
    OutOfRange { vertex: VertexId, vertex_count: usize },

    /// Both endpoints are the same vertex.
    #[error("vertex {vertex} cannot be paired with itself")]
    SelfLoop { vertex: VertexId },
}

/// Reasons a proposed partition is rejected, checked in declaration order.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PartitionError {
    /// A listed vertex does not exist.
    #[error("vertex {vertex} in group {} is out of range (valid vertices are 0..{vertex_count})", .group + 1)]
    OutOfRangeVertex {
        vertex: VertexId,
        group: usize,
        vertex_count: usize,
    },

    /// A vertex was listed more than once.
    #[error("vertex {vertex} is assigned to both group {} and group {}", .first_group + 1, .second_group + 1)]
    DuplicateAssignment {
        vertex: VertexId,
        first_group: usize,
        second_group: usize,
    },
}

/// A flip command named a group that does not exist.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FlipError {
    /// Group index outside `{0, 1, 2}`.
    #[error("group index {index} is out of range (groups are numbered 1 to 3)")]
    InvalidGroup { index: usize },
}

/// The runner policy could not produce a destination.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    /// The runner's previous vertex had no neighbors in the previous graph.
    #[error("runner at vertex {from} has no neighbors in the previous graph")]
    NoMovementCandidate { from: VertexId },
}

/// Invalid game configuration.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// A game needs at least one vertex for the runner.
    #[error("vertex count must be at least 1")]
    NoVertices,

    /// Vertex count above the supported maximum.
    #[error("vertex count {requested} exceeds the maximum of {max}")]
    TooManyVertices { requested: usize, max: usize },

    /// Edge probability outside `[0, 1]` or not finite.
    #[error("edge probability {value} must be between 0 and 1")]
    InvalidEdgeProbability { value: f64 },
}

/// Errors returned by turn controller operations.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum GameError {
    /// Operation issued in a phase that does not accept it.
    #[error("operation requires phase {expected}, but the game is in phase {actual}")]
    UnexpectedPhase { expected: Phase, actual: Phase },

    /// The game has ended; no further operations are accepted.
    #[error("the game is over")]
    GameOver,

    #[error(transparent)]
    Partition(#[from] PartitionError),

    #[error(transparent)]
    Flip(#[from] FlipError),

    #[error(transparent)]
    Graph(#[from] InvalidVertexError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl GameError {
    /// Check if the caller can retry the same step with different input.
    ///
    /// `Graph` errors only surface when engine invariants are broken, so they
    /// are not retryable.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            GameError::GameOver | GameError::Config(_) | GameError::Graph(_)
        )
    }
}
