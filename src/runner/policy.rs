//! Runner movement policies.

use tracing::trace;

use crate::core::{MoveError, VertexId};
use crate::graph::Graph;

/// Policy choosing the runner's next vertex.
pub trait RunnerPolicy {
    /// Pick the runner's new position.
    ///
    /// `previous` is the graph as it stood at the end of the last round,
    /// `current` the graph after this round's flips, `from` the vertex the
    /// runner occupied at the start of the round.
    ///
    /// Returns `NoMovementCandidate` when `from` has no neighbors in
    /// `previous`.
    fn next_position(
        &self,
        previous: &Graph,
        current: &Graph,
        from: VertexId,
    ) -> Result<VertexId, MoveError>;
}

/// Move to the previous-graph neighbor with the highest current degree.
///
/// Candidates are scanned in ascending vertex order and a candidate only
/// replaces the best so far when its degree is strictly higher, so ties go
/// to the lowest vertex id.
#[derive(Clone, Copy, Debug, Default)]
pub struct MaxDegreePolicy;

impl RunnerPolicy for MaxDegreePolicy {
    fn next_position(
        &self,
        previous: &Graph,
        current: &Graph,
        from: VertexId,
    ) -> Result<VertexId, MoveError> {
        let mut best: Option<(VertexId, usize)> = None;

        for candidate in previous.neighbors(from) {
            let degree = current.degree(candidate);
            trace!(%candidate, degree, "runner candidate");
            if best.map_or(true, |(_, best_degree)| degree > best_degree) {
                best = Some((candidate, degree));
            }
        }

        best.map(|(vertex, _)| vertex)
            .ok_or(MoveError::NoMovementCandidate { from })
    }
}
