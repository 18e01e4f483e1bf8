//! Plain-text rendering of the game for the terminal.

use std::io::{self, Write};

use crate::core::VertexId;
use crate::flip::FlipReport;
use crate::game::{RoundRecord, Snapshot};
use crate::graph::Graph;
use crate::rules::GameOutcome;

/// Write one graph as an adjacency listing.
///
/// Each row shows the vertex, its degree and its neighbours; the row of
/// `runner` is marked with `*`.
pub fn render_graph(
    label: &str,
    graph: &Graph,
    runner: Option<VertexId>,
    mut writer: impl Write,
) -> io::Result<()> {
    writeln!(writer, "{label} ({} edges)", graph.edge_count())?;
    for v in graph.vertices() {
        let marker = if runner == Some(v) { '*' } else { ' ' };
        let neighbors: Vec<String> = graph.neighbors(v).map(|n| n.to_string()).collect();
        writeln!(
            writer,
            "  {marker}{:>3} [deg {}]: {}",
            v.0,
            graph.degree(v),
            neighbors.join(" ")
        )?;
    }
    Ok(())
}

/// Write all three graphs of a snapshot plus the edges changed this round.
pub fn render_snapshot(snapshot: &Snapshot, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "== round {} ({}) ==", snapshot.round, snapshot.phase)?;
    render_graph("G0 (original)", &snapshot.original, None, &mut writer)?;
    render_graph(
        "previous graph",
        &snapshot.previous,
        Some(snapshot.position_prev),
        &mut writer,
    )?;
    render_graph(
        "current graph",
        &snapshot.current,
        Some(snapshot.position_cur),
        &mut writer,
    )?;

    let changed = snapshot.original.changed_edges(&snapshot.current);
    if changed.is_empty() {
        writeln!(writer, "changed from G0: none")?;
    } else {
        let edges: Vec<String> = changed.iter().map(ToString::to_string).collect();
        writeln!(writer, "changed from G0: {}", edges.join(" "))?;
    }
    Ok(())
}

/// Write a one-line summary of an applied flip.
pub fn render_flip(report: &FlipReport, mut writer: impl Write) -> io::Result<()> {
    writeln!(
        writer,
        "flipped {}: {} pairs, {} added, {} removed",
        report.command, report.pairs, report.added, report.removed
    )
}

/// Write the runner's move for a finished round.
pub fn render_round(record: &RoundRecord, mut writer: impl Write) -> io::Result<()> {
    writeln!(
        writer,
        "round {}: runner moved {} -> {} after {} flip(s)",
        record.round,
        record.from,
        record.to,
        record.flips.len()
    )
}

/// Write the end-of-game banner.
pub fn render_outcome(outcome: &GameOutcome, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "You win: {outcome}.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::TurnController;

    fn output(render: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        render(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_render_graph_marks_runner() {
        let graph = Graph::from_edges(3, [(0, 1), (1, 2)]).unwrap();
        let text = output(|w| render_graph("g", &graph, Some(VertexId(1)), w));

        assert!(text.starts_with("g (2 edges)\n"));
        assert!(text.contains("     0 [deg 1]: 1\n"));
        assert!(text.contains("  *  1 [deg 2]: 0 2\n"));
    }

    #[test]
    fn test_render_snapshot_lists_changes() {
        let graph = Graph::from_edges(4, [(0, 1), (1, 2), (2, 3)]).unwrap();
        let mut game = TurnController::from_graph(graph, VertexId(0)).unwrap();
        let untouched = output(|w| render_snapshot(&game.snapshot(), w));
        assert!(untouched.contains("changed from G0: none"));

        game.submit_partition(&[vec![0], vec![1], vec![2, 3]]).unwrap();
        let report = game.flip(crate::flip::FlipCommand::from_one_based(1, 2).unwrap()).unwrap();
        let text = output(|w| render_snapshot(&game.snapshot(), w));

        assert!(text.contains("== round 1 (awaiting-flips) =="));
        assert!(text.contains("changed from G0: (0, 1)"));
        assert_eq!(
            output(|w| render_flip(&report, w)),
            "flipped groups 1 and 2: 1 pairs, 0 added, 1 removed\n"
        );
    }
}
