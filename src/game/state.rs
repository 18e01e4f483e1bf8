//! Game state and render snapshots.
//!
//! ## GameState
//!
//! Everything a single game owns:
//! - The three graphs (`G0`, previous, current)
//! - Runner positions at the start and end of the round
//! - Phase, round counter, active partition and this round's flips
//! - Round history and the final outcome
//!
//! ## Snapshot
//!
//! Read-only view handed to the display side after every flip and every
//! runner move.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::phase::Phase;
use crate::core::VertexId;
use crate::flip::FlipReport;
use crate::graph::Graph;
use crate::partition::Partition;
use crate::rules::GameOutcome;

/// Runner positions for the current round.
///
/// Only the runner policy result updates these, once per round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunnerState {
    /// Vertex occupied at the start of the round.
    pub position_prev: VertexId,
    /// Vertex occupied after the round's movement.
    pub position_cur: VertexId,
}

impl RunnerState {
    /// Runner standing on `start` before any movement.
    #[must_use]
    pub fn at(start: VertexId) -> Self {
        Self {
            position_prev: start,
            position_cur: start,
        }
    }
}

/// One completed round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Round number (starts at 1).
    pub round: u32,
    /// Partition in force when the round ended.
    pub partition: Partition,
    /// Flips in the order they were issued.
    pub flips: Vec<FlipReport>,
    /// Runner position at the start of the round.
    pub from: VertexId,
    /// Runner position after moving.
    pub to: VertexId,
    /// Outcome, if this round ended the game.
    pub outcome: Option<GameOutcome>,
}

/// Full state of one game.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    /// Original graph, fixed after setup.
    pub(crate) original: Graph,
    /// Graph at the end of the previous round.
    pub(crate) previous: Graph,
    /// Graph being flipped this round.
    pub(crate) current: Graph,

    pub(crate) runner: RunnerState,
    pub(crate) phase: Phase,

    /// Round number (starts at 1).
    pub(crate) round: u32,

    /// Partition for the current round, once validated.
    pub(crate) partition: Option<Partition>,
    /// Flips applied so far this round.
    pub(crate) round_flips: Vec<FlipReport>,

    pub(crate) history: Vector<RoundRecord>,
    pub(crate) outcome: Option<GameOutcome>,

    /// Seed the graph and start vertex came from, when generated.
    seed: Option<u64>,
}

impl GameState {
    /// Create the state for a new game: `previous` and `current` start as
    /// copies of `original`.
    #[must_use]
    pub fn new(original: Graph, start: VertexId, seed: Option<u64>) -> Self {
        Self {
            previous: original.clone(),
            current: original.clone(),
            original,
            runner: RunnerState::at(start),
            phase: Phase::Setup,
            round: 1,
            partition: None,
            round_flips: Vec::new(),
            history: Vector::new(),
            outcome: None,
            seed,
        }
    }

    // === Graphs ===

    /// `G0`, the baseline every flip is computed against.
    #[must_use]
    pub fn original(&self) -> &Graph {
        &self.original
    }

    /// Graph at the end of the previous round (`G0` before round 1).
    #[must_use]
    pub fn previous(&self) -> &Graph {
        &self.previous
    }

    /// Graph being edited this round.
    #[must_use]
    pub fn current(&self) -> &Graph {
        &self.current
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.original.vertex_count()
    }

    // === Progress ===

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current round number.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Runner positions.
    #[must_use]
    pub fn runner(&self) -> RunnerState {
        self.runner
    }

    /// Active partition, if one has been accepted this round.
    #[must_use]
    pub fn partition(&self) -> Option<&Partition> {
        self.partition.as_ref()
    }

    /// Flips applied so far this round.
    #[must_use]
    pub fn round_flips(&self) -> &[FlipReport] {
        &self.round_flips
    }

    /// Completed rounds, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<RoundRecord> {
        &self.history
    }

    /// Final outcome, once the game has ended.
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Seed used to generate the game, if it was generated.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    // === Round Rotation ===

    /// Close a non-winning round: the flipped graph becomes the previous
    /// graph, the runner's new position becomes its starting position, and
    /// the current graph is reset to `G0`.
    pub(crate) fn rotate(&mut self) {
        let flipped = std::mem::replace(&mut self.current, self.original.clone());
        self.previous = flipped;
        self.runner.position_prev = self.runner.position_cur;
        self.round += 1;
        self.partition = None;
        self.round_flips.clear();
    }

    /// Take a render snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            original: self.original.clone(),
            previous: self.previous.clone(),
            current: self.current.clone(),
            position_prev: self.runner.position_prev,
            position_cur: self.runner.position_cur,
            round: self.round,
            phase: self.phase,
        }
    }
}

/// Read-only render view of a game.
///
/// Graph rows are persistent sets, so taking a snapshot does not copy edge
/// data and later moves do not affect it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub original: Graph,
    pub previous: Graph,
    pub current: Graph,
    pub position_prev: VertexId,
    pub position_cur: VertexId,
    pub round: u32,
    pub phase: Phase,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path4() -> Graph {
        Graph::from_edges(4, [(0, 1), (1, 2), (2, 3)]).unwrap()
    }

    #[test]
    fn test_new_state_copies_original() {
        let state = GameState::new(path4(), VertexId(0), Some(7));

        assert_eq!(state.previous(), state.original());
        assert_eq!(state.current(), state.original());
        assert_eq!(state.runner(), RunnerState::at(VertexId(0)));
        assert_eq!(state.round(), 1);
        assert_eq!(state.phase(), Phase::Setup);
        assert_eq!(state.seed(), Some(7));
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_rotate() {
        let mut state = GameState::new(path4(), VertexId(0), None);
        state.current.toggle_edge(VertexId(0), VertexId(1)).unwrap();
        state.runner.position_cur = VertexId(1);
        let flipped = state.current.clone();

        state.rotate();

        assert_eq!(state.previous(), &flipped);
        assert_eq!(state.current(), &path4());
        assert_eq!(state.original(), &path4());
        assert_eq!(state.runner().position_prev, VertexId(1));
        assert_eq!(state.round(), 2);
        assert!(state.partition().is_none());
        assert!(state.round_flips().is_empty());
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut state = GameState::new(path4(), VertexId(2), None);
        let snapshot = state.snapshot();

        state.current.toggle_edge(VertexId(1), VertexId(2)).unwrap();

        assert!(snapshot.current.has_edge(VertexId(1), VertexId(2)));
        assert_eq!(snapshot.position_cur, VertexId(2));
    }

    #[test]
    fn test_snapshot_serialization() {
        let snapshot = GameState::new(path4(), VertexId(0), None).snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        let deserialized: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, deserialized);
    }
}
