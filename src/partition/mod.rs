//! Three-way vertex partitions.
//!
//! Each round the player splits (a subset of) the vertices into three
//! groups. Flips then operate on pairs of groups. Validation happens once,
//! here; every later stage can rely on the groups being in range and
//! disjoint.

mod validator;

pub use validator::{GroupIndex, Partition, GROUP_COUNT};
