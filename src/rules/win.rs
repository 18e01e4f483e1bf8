//! Win detection.

use serde::{Deserialize, Serialize};

use crate::core::VertexId;
use crate::graph::Graph;

/// Check if the runner at `position` is isolated in `current`.
#[must_use]
pub fn is_won(current: &Graph, position: VertexId) -> bool {
    current.degree(position) == 0
}

/// Why a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutcomeReason {
    /// The runner moved onto a vertex with degree zero in the current graph.
    Isolated,
    /// The runner had no neighbors in the previous graph and could not move.
    Trapped,
    /// The runner's start vertex had no edges in `G0`.
    IsolatedAtStart,
}

impl std::fmt::Display for OutcomeReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            OutcomeReason::Isolated => "runner is isolated",
            OutcomeReason::Trapped => "runner has nowhere to move",
            OutcomeReason::IsolatedAtStart => "runner started on an isolated vertex",
        };
        f.write_str(text)
    }
}

/// Result of a finished game. Set once; the game accepts nothing afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    /// Vertex the runner was caught on.
    pub winning_vertex: VertexId,
    /// Round in which the game ended (0 when decided at setup).
    pub round: u32,
    /// How the game ended.
    pub reason: OutcomeReason,
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at vertex {} after round {}",
            self.reason, self.winning_vertex, self.round
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_won_iff_degree_zero() {
        let graph = Graph::from_edges(4, [(0, 1), (1, 2)]).unwrap();

        assert!(!is_won(&graph, VertexId(0)));
        assert!(!is_won(&graph, VertexId(1)));
        assert!(is_won(&graph, VertexId(3)));
    }

    #[test]
    fn test_is_won_single_vertex() {
        assert!(is_won(&Graph::empty(1), VertexId(0)));
    }

    #[test]
    fn test_outcome_display() {
        let outcome = GameOutcome {
            winning_vertex: VertexId(4),
            round: 3,
            reason: OutcomeReason::Isolated,
        };
        assert_eq!(
            format!("{}", outcome),
            "runner is isolated at vertex 4 after round 3"
        );
    }
}
