//! Edge flips between partition groups.
//!
//! A flip names two groups (or one group twice). Every vertex pair it covers
//! is set, in the current graph, to the opposite of its state in the
//! baseline graph `G0`. Because the direction always comes from `G0`,
//! issuing the same flip again in one round changes nothing further.
//!
//! ## Example
//!
//! ```
//! use flip_runner::core::VertexId;
//! use flip_runner::flip::{FlipCommand, FlipEngine};
//! use flip_runner::graph::Graph;
//! use flip_runner::partition::Partition;
//!
//! let baseline = Graph::from_edges(3, [(0, 1)]).unwrap();
//! let mut current = baseline.clone();
//! let partition = Partition::validate(&[vec![0], vec![1, 2], vec![]], 3).unwrap();
//!
//! let engine = FlipEngine::new(&baseline);
//! let report = engine
//!     .apply(&mut current, &partition, FlipCommand::from_one_based(1, 2).unwrap())
//!     .unwrap();
//!
//! assert_eq!(report.removed, 1); // (0, 1) existed in G0
//! assert_eq!(report.added, 1); // (0, 2) did not
//! assert!(current.has_edge(VertexId(0), VertexId(2)));
//! ```

mod command;
mod engine;

pub use command::FlipCommand;
pub use engine::{FlipEngine, FlipReport};
