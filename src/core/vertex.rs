//! Vertex identification.
//!
//! Vertices are numbered `0..vertex_count`, fixed when the game starts.
//! `VertexId` is a plain index newtype; range checks happen where ids enter
//! the engine (graph primitives and partition validation).

use serde::{Deserialize, Serialize};

/// Vertex identifier.
///
/// Ordering follows the raw index, which is the order the runner policy
/// scans candidates in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VertexId(pub u32);

impl VertexId {
    /// Create a new vertex ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw vertex index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Check if this vertex exists in a graph with `vertex_count` vertices.
    #[must_use]
    pub const fn in_range(self, vertex_count: usize) -> bool {
        self.index() < vertex_count
    }

    /// Iterate over all vertex IDs for a graph with `vertex_count` vertices.
    ///
    /// ```
    /// use flip_runner::core::VertexId;
    ///
    /// let vertices: Vec<_> = VertexId::all(3).collect();
    /// assert_eq!(vertices, vec![VertexId(0), VertexId(1), VertexId(2)]);
    /// ```
    pub fn all(vertex_count: usize) -> impl Iterator<Item = VertexId> {
        (0..vertex_count as u32).map(VertexId)
    }
}

impl From<u32> for VertexId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An unordered vertex pair, stored with the smaller id first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Edge {
    low: VertexId,
    high: VertexId,
}

impl Edge {
    /// Create a normalized edge. Endpoint order does not matter.
    ///
    /// Self-pairs are representable here; the graph rejects them.
    #[must_use]
    pub fn new(a: VertexId, b: VertexId) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    /// Smaller endpoint.
    #[must_use]
    pub const fn low(self) -> VertexId {
        self.low
    }

    /// Larger endpoint.
    #[must_use]
    pub const fn high(self) -> VertexId {
        self.high
    }

    /// Both endpoints, smaller first.
    #[must_use]
    pub const fn endpoints(self) -> (VertexId, VertexId) {
        (self.low, self.high)
    }

    /// Check if the edge would be a self-loop.
    #[must_use]
    pub fn is_loop(self) -> bool {
        self.low == self.high
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.low, self.high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_id_basics() {
        let v = VertexId::new(3);
        assert_eq!(v.index(), 3);
        assert_eq!(format!("{}", v), "3");
        assert!(v.in_range(4));
        assert!(!v.in_range(3));
    }

    #[test]
    fn test_vertex_id_all() {
        let vertices: Vec<_> = VertexId::all(4).collect();
        assert_eq!(vertices.len(), 4);
        assert_eq!(vertices[0], VertexId(0));
        assert_eq!(vertices[3], VertexId(3));
    }

    #[test]
    fn test_edge_is_normalized() {
        let e1 = Edge::new(VertexId(5), VertexId(2));
        let e2 = Edge::new(VertexId(2), VertexId(5));

        assert_eq!(e1, e2);
        assert_eq!(e1.low(), VertexId(2));
        assert_eq!(e1.high(), VertexId(5));
        assert_eq!(format!("{}", e1), "(2, 5)");
    }

    #[test]
    fn test_edge_loop() {
        assert!(Edge::new(VertexId(1), VertexId(1)).is_loop());
        assert!(!Edge::new(VertexId(1), VertexId(2)).is_loop());
    }

    #[test]
    fn test_edge_ordering() {
        let mut edges = vec![
            Edge::new(VertexId(2), VertexId(3)),
            Edge::new(VertexId(1), VertexId(0)),
            Edge::new(VertexId(0), VertexId(2)),
        ];
        edges.sort();

        assert_eq!(edges[0].endpoints(), (VertexId(0), VertexId(1)));
        assert_eq!(edges[1].endpoints(), (VertexId(0), VertexId(2)));
        assert_eq!(edges[2].endpoints(), (VertexId(2), VertexId(3)));
    }

    #[test]
    fn test_vertex_serialization() {
        let edge = Edge::new(VertexId(4), VertexId(1));
        let json = serde_json::to_string(&edge).unwrap();
        let deserialized: Edge = serde_json::from_str(&json).unwrap();
        assert_eq!(edge, deserialized);
    }
}
