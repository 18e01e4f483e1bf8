//! Undirected, loop-free graphs over a fixed vertex set.
//!
//! A game tracks three `Graph` values at once: the original `G0`, the
//! previous round's graph and the graph being flipped this round. Rows are
//! persistent sets, so copying a graph to take a snapshot is cheap and the
//! copies never share mutable state.

mod adjacency;

pub use adjacency::Graph;
