//! Partition validation and group indexing.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{FlipError, PartitionError, VertexId};

/// Number of groups in every partition.
pub const GROUP_COUNT: usize = 3;

/// Index of one of the three partition groups (0-based internally).
///
/// Players refer to groups as 1, 2 and 3; use [`GroupIndex::from_one_based`]
/// for their input. `Display` prints the 1-based number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GroupIndex(u8);

impl GroupIndex {
    /// Create a group index from a 0-based index.
    pub fn new(index: usize) -> Result<Self, FlipError> {
        if index < GROUP_COUNT {
            Ok(Self(index as u8))
        } else {
            Err(FlipError::InvalidGroup { index })
        }
    }

    /// Create a group index from the player's 1-based numbering.
    pub fn from_one_based(number: usize) -> Result<Self, FlipError> {
        match number.checked_sub(1) {
            Some(index) => Self::new(index),
            None => Err(FlipError::InvalidGroup { index: number }),
        }
    }

    /// Get the 0-based index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all three groups.
    pub fn all() -> impl Iterator<Item = GroupIndex> {
        (0..GROUP_COUNT as u8).map(GroupIndex)
    }
}

impl std::fmt::Display for GroupIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0 + 1)
    }
}

/// Storage for one group; small games never spill to the heap.
type Group = SmallVec<[VertexId; 8]>;

/// A validated partition: three pairwise-disjoint groups of in-range vertices.
///
/// Vertices may be left out of all three groups; they take no part in flips
/// for the round. The only way to obtain a `Partition` is
/// [`Partition::validate`].
///
/// ## Example
///
/// ```
/// use flip_runner::core::VertexId;
/// use flip_runner::partition::{GroupIndex, Partition};
///
/// let partition = Partition::validate(&[vec![0, 1], vec![2], vec![]], 4).unwrap();
///
/// assert_eq!(partition.group(GroupIndex::new(1).unwrap()), &[VertexId(2)]);
/// assert_eq!(partition.unassigned(), vec![VertexId(3)]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partition {
    groups: [Group; GROUP_COUNT],
    vertex_count: usize,
}

impl Partition {
    /// Validate three candidate groups against a graph with `vertex_count`
    /// vertices.
    ///
    /// Rules are applied in order across all groups:
    /// 1. every id lies in `[0, vertex_count)`, else `OutOfRangeVertex`;
    /// 2. no id appears twice, in different groups or the same one, else
    ///    `DuplicateAssignment`.
    ///
    /// Group order and the order of ids within a group are preserved.
    pub fn validate(
        groups: &[Vec<u32>; GROUP_COUNT],
        vertex_count: usize,
    ) -> Result<Self, PartitionError> {
        for (group, ids) in groups.iter().enumerate() {
            if let Some(&id) = ids
                .iter()
                .find(|&&id| !VertexId(id).in_range(vertex_count))
            {
                return Err(PartitionError::OutOfRangeVertex {
                    vertex: VertexId(id),
                    group,
                    vertex_count,
                });
            }
        }

        let mut owner: FxHashMap<VertexId, usize> = FxHashMap::default();
        for (group, ids) in groups.iter().enumerate() {
            for &id in ids {
                let vertex = VertexId(id);
                if let Some(&first_group) = owner.get(&vertex) {
                    return Err(PartitionError::DuplicateAssignment {
                        vertex,
                        first_group,
                        second_group: group,
                    });
                }
                owner.insert(vertex, group);
            }
        }

        let groups = [0, 1, 2].map(|g| groups[g].iter().copied().map(VertexId).collect());
        Ok(Self {
            groups,
            vertex_count,
        })
    }

    /// Vertex count the partition was validated against.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Members of one group, in the order the player listed them.
    #[must_use]
    pub fn group(&self, index: GroupIndex) -> &[VertexId] {
        &self.groups[index.index()]
    }

    /// Iterate over `(index, members)` for all three groups.
    pub fn groups(&self) -> impl Iterator<Item = (GroupIndex, &[VertexId])> {
        GroupIndex::all().map(move |g| (g, self.group(g)))
    }

    /// Which group a vertex belongs to, if any.
    #[must_use]
    pub fn group_of(&self, vertex: VertexId) -> Option<GroupIndex> {
        self.groups().find_map(|(g, members)| members.contains(&vertex).then_some(g))
    }

    /// Number of vertices placed in some group.
    #[must_use]
    pub fn assigned_count(&self) -> usize {
        self.groups.iter().map(SmallVec::len).sum()
    }

    /// Vertices that belong to no group, ascending.
    #[must_use]
    pub fn unassigned(&self) -> Vec<VertexId> {
        VertexId::all(self.vertex_count)
            .filter(|&v| self.group_of(v).is_none())
            .collect()
    }
}

impl std::fmt::Display for Partition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (g, members) in self.groups() {
            if g.index() > 0 {
                write!(f, " / ")?;
            }
            let ids: Vec<String> = members.iter().map(ToString::to_string).collect();
            write!(f, "{{{}}}", ids.join(","))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn g(index: usize) -> GroupIndex {
        GroupIndex::new(index).unwrap()
    }

    #[test]
    fn test_group_index_bounds() {
        assert_eq!(GroupIndex::new(2).unwrap().index(), 2);
        assert_eq!(GroupIndex::new(3), Err(FlipError::InvalidGroup { index: 3 }));
        assert_eq!(GroupIndex::from_one_based(1).unwrap().index(), 0);
        assert_eq!(GroupIndex::from_one_based(3).unwrap().index(), 2);
        assert!(GroupIndex::from_one_based(0).is_err());
        assert!(GroupIndex::from_one_based(4).is_err());
        assert_eq!(format!("{}", g(0)), "1");
    }

    #[test]
    fn test_valid_partition() {
        let partition = Partition::validate(&[vec![0, 1], vec![2, 3], vec![4, 5]], 6).unwrap();

        assert_eq!(partition.group(g(0)), &[VertexId(0), VertexId(1)]);
        assert_eq!(partition.group(g(2)), &[VertexId(4), VertexId(5)]);
        assert_eq!(partition.assigned_count(), 6);
        assert!(partition.unassigned().is_empty());
    }

    #[test]
    fn test_unassigned_vertices_allowed() {
        let partition = Partition::validate(&[vec![4], vec![], vec![1]], 6).unwrap();

        assert_eq!(
            partition.unassigned(),
            vec![VertexId(0), VertexId(2), VertexId(3), VertexId(5)]
        );
        assert_eq!(partition.group_of(VertexId(4)), Some(g(0)));
        assert_eq!(partition.group_of(VertexId(1)), Some(g(2)));
        assert_eq!(partition.group_of(VertexId(0)), None);
    }

    #[test]
    fn test_all_groups_empty() {
        let empty: [Vec<u32>; 3] = [vec![], vec![], vec![]];
        let partition = Partition::validate(&empty, 3).unwrap();
        assert_eq!(partition.assigned_count(), 0);
        assert_eq!(partition.unassigned().len(), 3);
    }

    #[test]
    fn test_out_of_range_rejected() {
        let err = Partition::validate(&[vec![0], vec![6], vec![]], 6).unwrap_err();
        assert_eq!(
            err,
            PartitionError::OutOfRangeVertex {
                vertex: VertexId(6),
                group: 1,
                vertex_count: 6
            }
        );
    }

    #[test]
    fn test_duplicate_across_groups_rejected() {
        let err = Partition::validate(&[vec![0, 1], vec![2], vec![1]], 6).unwrap_err();
        assert_eq!(
            err,
            PartitionError::DuplicateAssignment {
                vertex: VertexId(1),
                first_group: 0,
                second_group: 2
            }
        );
    }

    #[test]
    fn test_duplicate_within_group_rejected() {
        let err = Partition::validate(&[vec![3, 3], vec![], vec![]], 6).unwrap_err();
        assert!(matches!(
            err,
            PartitionError::DuplicateAssignment { first_group: 0, second_group: 0, .. }
        ));
    }

    #[test]
    fn test_range_checked_before_duplicates() {
        // Duplicate 0 appears first, but the range rule wins.
        let err = Partition::validate(&[vec![0], vec![0], vec![9]], 6).unwrap_err();
        assert!(matches!(err, PartitionError::OutOfRangeVertex { .. }));
    }

    #[test]
    fn test_display() {
        let partition = Partition::validate(&[vec![0, 1], vec![], vec![3]], 4).unwrap();
        assert_eq!(format!("{}", partition), "{0,1} / {} / {3}");
    }

    #[test]
    fn test_partition_serialization() {
        let partition = Partition::validate(&[vec![0], vec![1], vec![2, 3]], 4).unwrap();
        let json = serde_json::to_string(&partition).unwrap();
        let deserialized: Partition = serde_json::from_str(&json).unwrap();
        assert_eq!(partition, deserialized);
    }
}
