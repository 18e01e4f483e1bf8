//! Turn controller: the round state machine.

use tracing::{debug, info, instrument, trace};

use super::phase::Phase;
use super::state::{GameState, RoundRecord, Snapshot};
use crate::core::{GameConfig, GameError, GameRng, InvalidVertexError, MoveError, VertexId};
use crate::flip::{FlipCommand, FlipEngine, FlipReport};
use crate::graph::Graph;
use crate::partition::Partition;
use crate::rules::{is_won, GameOutcome, OutcomeReason};
use crate::runner::{MaxDegreePolicy, RunnerPolicy};

/// What `end_round` reports back.
#[derive(Clone, Debug)]
pub struct RoundResult {
    /// The round just played.
    pub record: RoundRecord,
    /// Graphs and positions right after the runner moved, before the
    /// history rotation resets the current graph.
    pub snapshot: Snapshot,
}

impl RoundResult {
    /// Outcome, if the round ended the game.
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.record.outcome
    }
}

/// Drives one game through its rounds.
///
/// Each round: `submit_partition`, any number of `flip` calls, then
/// `end_round`. Operations in the wrong phase fail with `UnexpectedPhase`
/// and change nothing; once the game is over every operation fails with
/// `GameOver`.
///
/// ## Example
///
/// ```
/// use flip_runner::core::VertexId;
/// use flip_runner::flip::FlipCommand;
/// use flip_runner::game::TurnController;
/// use flip_runner::graph::Graph;
///
/// let graph = Graph::from_edges(4, [(0, 1), (1, 2), (2, 3)]).unwrap();
/// let mut game = TurnController::from_graph(graph, VertexId(0)).unwrap();
///
/// game.submit_partition(&[vec![0], vec![1], vec![2, 3]]).unwrap();
/// game.flip(FlipCommand::from_one_based(1, 2).unwrap()).unwrap();
/// let result = game.end_round().unwrap();
///
/// assert_eq!(result.record.to, VertexId(1));
/// assert!(result.outcome().is_none());
/// ```
#[derive(Clone, Debug)]
pub struct TurnController<P: RunnerPolicy = MaxDegreePolicy> {
    state: GameState,
    policy: P,
}

impl TurnController<MaxDegreePolicy> {
    /// Set up a game from configuration.
    ///
    /// Generates `G0` with the configured edge probability and places the
    /// runner on a uniformly random vertex, both from the configured seed
    /// (or a fresh entropy seed).
    pub fn new(config: &GameConfig) -> Result<Self, GameError> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let original = Graph::random(
            config.vertex_count,
            config.edge_probability,
            &mut rng.for_context("edges"),
        );
        let start = rng
            .for_context("runner")
            .gen_range_usize(0..config.vertex_count);

        info!(
            seed = rng.seed(),
            vertices = config.vertex_count,
            edges = original.edge_count(),
            start,
            "generated game"
        );
        Self::setup(original, VertexId(start as u32), Some(rng.seed()), MaxDegreePolicy)
    }

    /// Set up a game on a fixed graph with a fixed start vertex.
    pub fn from_graph(original: Graph, start: VertexId) -> Result<Self, GameError> {
        Self::setup(original, start, None, MaxDegreePolicy)
    }
}

impl<P: RunnerPolicy> TurnController<P> {
    /// Set up a game on a fixed graph with a custom runner policy.
    pub fn with_policy(original: Graph, start: VertexId, policy: P) -> Result<Self, GameError> {
        Self::setup(original, start, None, policy)
    }

    fn setup(
        original: Graph,
        start: VertexId,
        seed: Option<u64>,
        policy: P,
    ) -> Result<Self, GameError> {
        if !start.in_range(original.vertex_count()) {
            return Err(InvalidVertexError::OutOfRange {
                vertex: start,
                vertex_count: original.vertex_count(),
            }
            .into());
        }

        let mut controller = Self {
            state: GameState::new(original, start, seed),
            policy,
        };

        // A runner that starts with no edges has already lost.
        if is_won(controller.state.original(), start) {
            controller.finish(GameOutcome {
                winning_vertex: start,
                round: 0,
                reason: OutcomeReason::IsolatedAtStart,
            });
        } else {
            controller.transition(Phase::AwaitingPartition);
        }
        Ok(controller)
    }

    // === Accessors ===

    /// The full game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Final outcome, once the game has ended.
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.state.outcome()
    }

    /// Check if the game has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.outcome().is_some()
    }

    /// Render snapshot of the current state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    // === Operations ===

    /// Validate and install the partition for this round.
    ///
    /// Accepted while awaiting a partition and also while awaiting flips, in
    /// which case the new partition replaces the old one for the remaining
    /// flips; flips already applied stay in the current graph. On rejection
    /// the state is unchanged.
    #[instrument(level = "debug", skip(self), fields(round = self.state.round()))]
    pub fn submit_partition(&mut self, groups: &[Vec<u32>; 3]) -> Result<&Partition, GameError> {
        self.require(&[Phase::AwaitingPartition, Phase::AwaitingFlips], Phase::AwaitingPartition)?;

        let partition = Partition::validate(groups, self.state.vertex_count())?;
        debug!(%partition, "partition accepted");

        self.transition(Phase::AwaitingFlips);
        Ok(self.state.partition.insert(partition))
    }

    /// Apply one flip to the current graph.
    ///
    /// Toggle directions come from `G0`; see [`FlipEngine`].
    #[instrument(level = "debug", skip(self), fields(round = self.state.round()))]
    pub fn flip(&mut self, command: FlipCommand) -> Result<FlipReport, GameError> {
        self.require(&[Phase::AwaitingFlips], Phase::AwaitingFlips)?;

        let state = &mut self.state;
        let partition = state.partition.as_ref().ok_or(GameError::UnexpectedPhase {
            expected: Phase::AwaitingFlips,
            actual: Phase::AwaitingPartition,
        })?;
        let report = FlipEngine::new(&state.original).apply(&mut state.current, partition, command)?;

        state.round_flips.push(report.clone());
        Ok(report)
    }

    /// Finish flipping: move the runner, check for a win, and either end the
    /// game or rotate the graphs for the next round.
    #[instrument(level = "debug", skip(self), fields(round = self.state.round()))]
    pub fn end_round(&mut self) -> Result<RoundResult, GameError> {
        self.require(&[Phase::AwaitingFlips], Phase::AwaitingFlips)?;

        self.transition(Phase::ResolvingMove);
        let from = self.state.runner.position_prev;
        let moved = self
            .policy
            .next_position(&self.state.previous, &self.state.current, from);

        let outcome = match moved {
            Ok(to) => {
                self.state.runner.position_cur = to;
                self.transition(Phase::CheckWin);
                is_won(&self.state.current, to).then_some(GameOutcome {
                    winning_vertex: to,
                    round: self.state.round,
                    reason: OutcomeReason::Isolated,
                })
            }
            Err(MoveError::NoMovementCandidate { from }) => {
                debug!(%from, "runner has no movement candidate");
                self.state.runner.position_cur = from;
                self.transition(Phase::CheckWin);
                Some(GameOutcome {
                    winning_vertex: from,
                    round: self.state.round,
                    reason: OutcomeReason::Trapped,
                })
            }
        };

        let snapshot = self.state.snapshot();
        let record = RoundRecord {
            round: self.state.round,
            partition: self
                .state
                .partition
                .clone()
                .ok_or(GameError::UnexpectedPhase {
                    expected: Phase::AwaitingFlips,
                    actual: Phase::AwaitingPartition,
                })?,
            flips: self.state.round_flips.clone(),
            from,
            to: self.state.runner.position_cur,
            outcome,
        };
        self.state.history.push_back(record.clone());

        info!(
            round = record.round,
            flips = record.flips.len(),
            from = %record.from,
            to = %record.to,
            degree = self.state.current.degree(record.to),
            "runner moved"
        );

        match outcome {
            Some(outcome) => self.finish(outcome),
            None => {
                self.transition(Phase::NextRound);
                self.state.rotate();
                self.transition(Phase::AwaitingPartition);
            }
        }

        Ok(RoundResult { record, snapshot })
    }

    // === Internals ===

    fn require(&self, allowed: &[Phase], expected: Phase) -> Result<(), GameError> {
        let actual = self.state.phase();
        if actual.is_terminal() {
            return Err(GameError::GameOver);
        }
        if !allowed.contains(&actual) {
            return Err(GameError::UnexpectedPhase { expected, actual });
        }
        Ok(())
    }

    fn transition(&mut self, to: Phase) {
        trace!(from = %self.state.phase, %to, "phase transition");
        self.state.phase = to;
    }

    fn finish(&mut self, outcome: GameOutcome) {
        info!(
            vertex = %outcome.winning_vertex,
            round = outcome.round,
            reason = %outcome.reason,
            "game over"
        );
        self.state.outcome = Some(outcome);
        self.transition(Phase::GameOver);
    }
}
