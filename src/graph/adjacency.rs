//! Adjacency-set graph representation.

use im::OrdSet;
use serde::{Deserialize, Serialize};

use crate::core::{Edge, GameRng, InvalidVertexError, VertexId};

/// Undirected graph with a symmetric, loop-free edge relation.
///
/// Row `v` holds the neighbors of `v` in ascending order. Every mutation
/// updates both rows, so `has_edge(u, v) == has_edge(v, u)` always holds.
///
/// ## Example
///
/// ```
/// use flip_runner::core::VertexId;
/// use flip_runner::graph::Graph;
///
/// let mut graph = Graph::from_edges(4, [(0, 1), (1, 2)]).unwrap();
/// assert!(graph.has_edge(VertexId(1), VertexId(0)));
/// assert_eq!(graph.degree(VertexId(1)), 2);
///
/// graph.toggle_edge(VertexId(0), VertexId(1)).unwrap();
/// assert!(!graph.has_edge(VertexId(0), VertexId(1)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    adjacency: Vec<OrdSet<VertexId>>,
}

impl Graph {
    /// Create a graph with `vertex_count` vertices and no edges.
    #[must_use]
    pub fn empty(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![OrdSet::new(); vertex_count],
        }
    }

    /// Generate a random graph.
    ///
    /// Every unordered pair `v1 < v2` is connected independently with the
    /// given probability. No connectivity is guaranteed; isolated vertices
    /// are possible.
    pub fn random(vertex_count: usize, probability: f64, rng: &mut GameRng) -> Self {
        let mut graph = Self::empty(vertex_count);
        for v1 in 0..vertex_count {
            for v2 in (v1 + 1)..vertex_count {
                if rng.gen_bool(probability) {
                    graph.link(VertexId(v1 as u32), VertexId(v2 as u32));
                }
            }
        }
        graph
    }

    /// Build a graph from a list of vertex pairs.
    ///
    /// Listing the same pair twice is harmless. Self-pairs and out-of-range
    /// vertices are rejected.
    pub fn from_edges(
        vertex_count: usize,
        edges: impl IntoIterator<Item = (u32, u32)>,
    ) -> Result<Self, InvalidVertexError> {
        let mut graph = Self::empty(vertex_count);
        for (u, v) in edges {
            graph.set_edge(VertexId(u), VertexId(v), true)?;
        }
        Ok(graph)
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Iterate over all vertices in ascending order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> {
        VertexId::all(self.vertex_count())
    }

    /// Check that `(u, v)` names a valid edge slot.
    pub fn check_pair(&self, u: VertexId, v: VertexId) -> Result<(), InvalidVertexError> {
        for vertex in [u, v] {
            if !vertex.in_range(self.vertex_count()) {
                return Err(InvalidVertexError::OutOfRange {
                    vertex,
                    vertex_count: self.vertex_count(),
                });
            }
        }
        if u == v {
            return Err(InvalidVertexError::SelfLoop { vertex: u });
        }
        Ok(())
    }

    // === Queries ===

    /// Check if `u` and `v` are connected.
    ///
    /// Symmetric. Always false for `u == v` and for out-of-range vertices.
    #[must_use]
    pub fn has_edge(&self, u: VertexId, v: VertexId) -> bool {
        self.adjacency
            .get(u.index())
            .is_some_and(|row| row.contains(&v))
    }

    /// Number of edges incident to `v` (0 for out-of-range vertices).
    #[must_use]
    pub fn degree(&self, v: VertexId) -> usize {
        self.adjacency.get(v.index()).map_or(0, OrdSet::len)
    }

    /// Check if `v` has no incident edges.
    #[must_use]
    pub fn is_isolated(&self, v: VertexId) -> bool {
        self.degree(v) == 0
    }

    /// Neighbors of `v` in ascending vertex order.
    pub fn neighbors(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.adjacency
            .get(v.index())
            .into_iter()
            .flat_map(|row| row.iter().copied())
    }

    /// All edges, ordered by smaller endpoint then larger endpoint.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(u, row)| {
            let u = VertexId(u as u32);
            row.iter()
                .copied()
                .filter(move |&v| v > u)
                .map(move |v| Edge::new(u, v))
        })
    }

    /// Total number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(OrdSet::len).sum::<usize>() / 2
    }

    /// Edges present in exactly one of `self` and `other`.
    ///
    /// Both graphs must have the same vertex count; extra vertices in either
    /// graph are compared against an empty row.
    #[must_use]
    pub fn changed_edges(&self, other: &Graph) -> Vec<Edge> {
        let vertex_count = self.vertex_count().max(other.vertex_count());
        let mut changed = Vec::new();
        for u in VertexId::all(vertex_count) {
            for v in VertexId::all(vertex_count).skip(u.index() + 1) {
                if self.has_edge(u, v) != other.has_edge(u, v) {
                    changed.push(Edge::new(u, v));
                }
            }
        }
        changed
    }

    // === Mutation ===

    /// Remove the edge if present, add it otherwise.
    ///
    /// Returns whether the edge is present afterwards.
    pub fn toggle_edge(&mut self, u: VertexId, v: VertexId) -> Result<bool, InvalidVertexError> {
        self.check_pair(u, v)?;
        let present = !self.has_edge(u, v);
        self.write(u, v, present);
        Ok(present)
    }

    /// Force the edge to the given presence.
    ///
    /// Returns whether anything changed.
    pub fn set_edge(
        &mut self,
        u: VertexId,
        v: VertexId,
        present: bool,
    ) -> Result<bool, InvalidVertexError> {
        self.check_pair(u, v)?;
        if self.has_edge(u, v) == present {
            return Ok(false);
        }
        self.write(u, v, present);
        Ok(true)
    }

    fn write(&mut self, u: VertexId, v: VertexId, present: bool) {
        if present {
            self.link(u, v);
        } else {
            self.adjacency[u.index()].remove(&v);
            self.adjacency[v.index()].remove(&u);
        }
    }

    fn link(&mut self, u: VertexId, v: VertexId) {
        self.adjacency[u.index()].insert(v);
        self.adjacency[v.index()].insert(u);
    }
}
