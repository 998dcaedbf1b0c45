use crate::graph::{VertexId, Weight};
use crate::search::ShortestPaths;

/// One row of the reachable-distance table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistanceRow {
    pub start: VertexId,
    pub vertex: VertexId,
    pub distance: Weight,
}

/// Walk parent pointers from `target`, collecting its ancestors.
///
/// The result excludes `target` and lists the nearest ancestor first, so the
/// start vertex (if reached) comes last. `parent` is indexed by `vertex - 1`.
/// The walk stops at a vertex with no parent or an id outside the slice, and
/// never takes more steps than there are slots.
pub fn reconstruct_path(target: VertexId, parent: &[Option<VertexId>]) -> Vec<VertexId> {
    let mut ancestors = Vec::new();
    let mut current = target;

    while ancestors.len() < parent.len() {
        let Some(&Some(p)) = current.checked_sub(1).and_then(|i| parent.get(i)) else {
            break;
        };
        ancestors.push(p);
        current = p;
    }

    ancestors
}

/// Every vertex with a finite distance, in ascending vertex order.
pub fn all_distances(start: VertexId, distance: &[Option<Weight>]) -> Vec<DistanceRow> {
    distance
        .iter()
        .enumerate()
        .filter_map(|(i, d)| {
            d.map(|distance| DistanceRow {
                start,
                vertex: i + 1,
                distance,
            })
        })
        .collect()
}

impl ShortestPaths {
    /// Ancestors of `target`, nearest first. See [`reconstruct_path`].
    pub fn ancestors(&self, target: VertexId) -> Vec<VertexId> {
        reconstruct_path(target, &self.parent)
    }

    /// Full path from the start to `target`, both endpoints included.
    /// `None` when `target` is unreachable or out of range.
    pub fn path_to(&self, target: VertexId) -> Option<Vec<VertexId>> {
        if !self.is_reachable(target) {
            return None;
        }
        let mut path = self.ancestors(target);
        path.reverse();
        path.push(target);
        Some(path)
    }

    pub fn all_distances(&self) -> Vec<DistanceRow> {
        all_distances(self.start, &self.distance)
    }
}
