//! Flip commands and the vertex pairs they cover.

use serde::{Deserialize, Serialize};

use crate::core::{Edge, FlipError, VertexId};
use crate::partition::{GroupIndex, Partition};

/// Which groups a flip operates on.
///
/// Cross-group and self-group flips enumerate different pair sets, so they
/// are separate variants rather than one branch on `a == b`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlipCommand {
    /// Every pair `(u, v)` with `u` in group `a` and `v` in group `b`.
    CrossGroup { a: GroupIndex, b: GroupIndex },
    /// Every unordered pair of distinct vertices inside `group`.
    SelfGroup { group: GroupIndex },
}

impl FlipCommand {
    /// Build the command for a pair of groups.
    ///
    /// The same group twice yields `SelfGroup`.
    #[must_use]
    pub fn between(a: GroupIndex, b: GroupIndex) -> Self {
        if a == b {
            FlipCommand::SelfGroup { group: a }
        } else {
            FlipCommand::CrossGroup { a, b }
        }
    }

    /// Build a command from the player's 1-based group numbers.
    pub fn from_one_based(first: usize, second: usize) -> Result<Self, FlipError> {
        Ok(Self::between(
            GroupIndex::from_one_based(first)?,
            GroupIndex::from_one_based(second)?,
        ))
    }

    /// Check if this flip stays inside a single group.
    #[must_use]
    pub fn is_self_group(&self) -> bool {
        matches!(self, FlipCommand::SelfGroup { .. })
    }

    /// The vertex pairs this flip covers under `partition`.
    ///
    /// Groups of a validated partition are disjoint, so no pair is repeated
    /// and no self-pair is produced.
    #[must_use]
    pub fn pairs(&self, partition: &Partition) -> Vec<Edge> {
        match *self {
            FlipCommand::CrossGroup { a, b } => {
                cross_pairs(partition.group(a), partition.group(b))
            }
            FlipCommand::SelfGroup { group } => within_pairs(partition.group(group)),
        }
    }
}

impl std::fmt::Display for FlipCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FlipCommand::CrossGroup { a, b } => write!(f, "groups {} and {}", a, b),
            FlipCommand::SelfGroup { group } => write!(f, "group {} with itself", group),
        }
    }
}

fn cross_pairs(a: &[VertexId], b: &[VertexId]) -> Vec<Edge> {
    a.iter()
        .flat_map(|&u| b.iter().map(move |&v| Edge::new(u, v)))
        .collect()
}

fn within_pairs(group: &[VertexId]) -> Vec<Edge> {
    group
        .iter()
        .enumerate()
        .flat_map(|(i, &u)| group[i + 1..].iter().map(move |&v| Edge::new(u, v)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn partition() -> Partition {
        Partition::validate(&[vec![0, 1], vec![2, 3, 4], vec![5]], 7).unwrap()
    }

    fn g(index: usize) -> GroupIndex {
        GroupIndex::new(index).unwrap()
    }

    #[test]
    fn test_between_selects_variant() {
        assert_eq!(
            FlipCommand::between(g(0), g(1)),
            FlipCommand::CrossGroup { a: g(0), b: g(1) }
        );
        assert_eq!(
            FlipCommand::between(g(2), g(2)),
            FlipCommand::SelfGroup { group: g(2) }
        );
        assert!(FlipCommand::between(g(1), g(1)).is_self_group());
    }

    #[test]
    fn test_from_one_based() {
        assert_eq!(
            FlipCommand::from_one_based(1, 3).unwrap(),
            FlipCommand::CrossGroup { a: g(0), b: g(2) }
        );
        assert_eq!(
            FlipCommand::from_one_based(0, 1),
            Err(FlipError::InvalidGroup { index: 0 })
        );
        assert_eq!(
            FlipCommand::from_one_based(1, 4),
            Err(FlipError::InvalidGroup { index: 3 })
        );
    }

    #[test]
    fn test_cross_pairs_cover_product() {
        let pairs = FlipCommand::between(g(0), g(1)).pairs(&partition());
        assert_eq!(pairs.len(), 6);
        for u in [0, 1] {
            for v in [2, 3, 4] {
                assert!(pairs.contains(&Edge::new(VertexId(u), VertexId(v))));
            }
        }
    }

    #[test]
    fn test_cross_pairs_are_symmetric_in_groups() {
        let mut ab = FlipCommand::between(g(0), g(1)).pairs(&partition());
        let mut ba = FlipCommand::between(g(1), g(0)).pairs(&partition());
        ab.sort();
        ba.sort();
        assert_eq!(ab, ba);
    }

    #[test]
    fn test_self_pairs_stay_inside_group() {
        let pairs = FlipCommand::between(g(1), g(1)).pairs(&partition());
        assert_eq!(
            pairs,
            vec![
                Edge::new(VertexId(2), VertexId(3)),
                Edge::new(VertexId(2), VertexId(4)),
                Edge::new(VertexId(3), VertexId(4)),
            ]
        );
    }

    #[test]
    fn test_singleton_and_empty_groups() {
        let partition = partition();
        assert!(FlipCommand::between(g(2), g(2)).pairs(&partition).is_empty());

        let sparse = Partition::validate(&[vec![0], vec![], vec![]], 3).unwrap();
        assert!(FlipCommand::between(g(0), g(1)).pairs(&sparse).is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", FlipCommand::between(g(0), g(2))), "groups 1 and 3");
        assert_eq!(format!("{}", FlipCommand::between(g(1), g(1))), "group 2 with itself");
    }
}
