//! Property tests for graphs, flips and runner movement.

use flip_runner::core::VertexId;
use flip_runner::flip::{FlipCommand, FlipEngine};
use flip_runner::graph::Graph;
use flip_runner::partition::{GroupIndex, Partition};
use flip_runner::runner::{MaxDegreePolicy, RunnerPolicy};
use proptest::prelude::*;

fn graph_on(n: usize) -> impl Strategy<Value = Graph> {
    prop::collection::vec((0..n as u32, 0..n as u32), 0..24).prop_map(move |pairs| {
        let edges = pairs.into_iter().filter(|(u, v)| u != v);
        Graph::from_edges(n, edges).unwrap()
    })
}

fn groups_on(n: usize) -> impl Strategy<Value = [Vec<u32>; 3]> {
    // Group number 3 leaves the vertex out of the partition.
    prop::collection::vec(0u8..4, n).prop_map(|assignment| {
        let mut groups: [Vec<u32>; 3] = Default::default();
        for (v, g) in assignment.into_iter().enumerate() {
            if let Some(group) = groups.get_mut(g as usize) {
                group.push(v as u32);
            }
        }
        groups
    })
}

/// Two graphs on the same 2..10 vertices plus a three-way assignment.
fn scenario() -> impl Strategy<Value = (Graph, Graph, [Vec<u32>; 3])> {
    (2usize..10).prop_flat_map(|n| (graph_on(n), graph_on(n), groups_on(n)))
}

fn all_commands() -> Vec<FlipCommand> {
    let mut commands = Vec::new();
    for a in GroupIndex::all() {
        for b in GroupIndex::all().filter(|b| *b >= a) {
            commands.push(FlipCommand::between(a, b));
        }
    }
    commands
}

fn pairs(n: usize) -> impl Iterator<Item = (VertexId, VertexId)> {
    VertexId::all(n).flat_map(move |u| VertexId::all(n).map(move |v| (u, v)))
}

proptest! {
    #[test]
    fn test_graph_is_symmetric_and_simple((graph, _, _) in scenario()) {
        let n = graph.vertex_count();
        for (u, v) in pairs(n) {
            prop_assert_eq!(graph.has_edge(u, v), graph.has_edge(v, u));
        }
        for v in graph.vertices() {
            prop_assert!(!graph.has_edge(v, v));
        }
        let degree_sum: usize = graph.vertices().map(|v| graph.degree(v)).sum();
        prop_assert_eq!(degree_sum, 2 * graph.edge_count());
    }

    #[test]
    fn test_toggle_twice_is_identity(
        (graph, _, _) in scenario(),
        u in 0u32..10,
        v in 0u32..10,
    ) {
        let n = graph.vertex_count() as u32;
        let (u, v) = (VertexId(u % n), VertexId(v % n));
        prop_assume!(u != v);

        let mut toggled = graph.clone();
        toggled.toggle_edge(u, v).unwrap();
        prop_assert_ne!(toggled.has_edge(u, v), graph.has_edge(u, v));
        toggled.toggle_edge(u, v).unwrap();
        prop_assert_eq!(toggled, graph);
    }

    #[test]
    fn test_repeated_flip_sets_covered_pairs_opposite_to_baseline(
        (baseline, _, groups) in scenario(),
        repeats in 1usize..4,
    ) {
        let partition = Partition::validate(&groups, baseline.vertex_count()).unwrap();
        let engine = FlipEngine::new(&baseline);

        for command in all_commands() {
            let mut current = baseline.clone();
            for _ in 0..repeats {
                engine.apply(&mut current, &partition, command).unwrap();
            }

            let covered = command.pairs(&partition);
            for edge in &covered {
                let (u, v) = edge.endpoints();
                prop_assert_eq!(current.has_edge(u, v), !baseline.has_edge(u, v));
            }
            // Nothing outside the covered pairs moved.
            let mut changed = baseline.changed_edges(&current);
            let mut expected = covered.clone();
            changed.sort();
            expected.sort();
            prop_assert_eq!(changed, expected);
        }
    }

    #[test]
    fn test_flip_direction_ignores_current_graph(
        (baseline, other, groups) in scenario(),
    ) {
        let partition = Partition::validate(&groups, baseline.vertex_count()).unwrap();
        let engine = FlipEngine::new(&baseline);

        for command in all_commands() {
            let mut current = other.clone();
            engine.apply(&mut current, &partition, command).unwrap();
            for edge in command.pairs(&partition) {
                let (u, v) = edge.endpoints();
                prop_assert_eq!(current.has_edge(u, v), !baseline.has_edge(u, v));
            }
        }
    }

    #[test]
    fn test_self_flip_stays_inside_group((baseline, _, groups) in scenario()) {
        let partition = Partition::validate(&groups, baseline.vertex_count()).unwrap();
        let engine = FlipEngine::new(&baseline);

        for group in GroupIndex::all() {
            let mut current = baseline.clone();
            engine
                .apply(&mut current, &partition, FlipCommand::SelfGroup { group })
                .unwrap();
            for edge in baseline.changed_edges(&current) {
                let (u, v) = edge.endpoints();
                prop_assert_eq!(partition.group_of(u), Some(group));
                prop_assert_eq!(partition.group_of(v), Some(group));
            }
        }
    }

    #[test]
    fn test_runner_picks_lowest_max_degree_neighbor(
        (previous, current, _) in scenario(),
        from in 0u32..10,
    ) {
        let from = VertexId(from % previous.vertex_count() as u32);
        let result = MaxDegreePolicy.next_position(&previous, &current, from);

        let candidates: Vec<VertexId> = previous.neighbors(from).collect();
        match candidates.iter().map(|&c| current.degree(c)).max() {
            None => prop_assert!(result.is_err()),
            Some(best) => {
                let expected = candidates
                    .iter()
                    .copied()
                    .find(|&c| current.degree(c) == best)
                    .unwrap();
                prop_assert_eq!(result.unwrap(), expected);
            }
        }
    }
}
