//! Applying flips to the current graph.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::command::FlipCommand;
use crate::core::InvalidVertexError;
use crate::graph::Graph;
use crate::partition::Partition;

/// Summary of one applied flip.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlipReport {
    /// The flip that was applied.
    pub command: FlipCommand,
    /// Vertex pairs covered by the flip.
    pub pairs: usize,
    /// Pairs absent from `G0` that were connected in the current graph.
    pub added: usize,
    /// Pairs present in `G0` that were disconnected in the current graph.
    pub removed: usize,
}

impl FlipReport {
    /// Pairs whose state in the current graph actually changed.
    ///
    /// Less than `pairs` when an earlier flip this round already covered some
    /// of the same pairs.
    #[must_use]
    pub fn changed(&self) -> usize {
        self.added + self.removed
    }
}

/// Applies flips against a fixed baseline graph.
///
/// For every covered pair the new state in the current graph is the opposite
/// of the pair's state in the baseline: present in `G0` means removed,
/// absent means added. The current graph is never consulted for direction.
#[derive(Clone, Copy, Debug)]
pub struct FlipEngine<'a> {
    baseline: &'a Graph,
}

impl<'a> FlipEngine<'a> {
    /// Create an engine that reads toggle directions from `baseline`.
    #[must_use]
    pub fn new(baseline: &'a Graph) -> Self {
        Self { baseline }
    }

    /// The baseline graph.
    #[must_use]
    pub fn baseline(&self) -> &'a Graph {
        self.baseline
    }

    /// Apply one flip to `current`.
    ///
    /// `added`/`removed` count only pairs whose state in `current` changed.
    /// Errors only if the partition does not fit the graph, which a
    /// partition validated against the same vertex count rules out.
    pub fn apply(
        &self,
        current: &mut Graph,
        partition: &Partition,
        command: FlipCommand,
    ) -> Result<FlipReport, InvalidVertexError> {
        let pairs = command.pairs(partition);
        let mut report = FlipReport {
            command,
            pairs: pairs.len(),
            added: 0,
            removed: 0,
        };

        for edge in pairs {
            let (u, v) = edge.endpoints();
            let in_baseline = self.baseline.has_edge(u, v);
            if current.set_edge(u, v, !in_baseline)? {
                if in_baseline {
                    report.removed += 1;
                } else {
                    report.added += 1;
                }
            }
        }

        debug!(
            flip = %command,
            pairs = report.pairs,
            added = report.added,
            removed = report.removed,
            "applied flip"
        );
        Ok(report)
    }
}
