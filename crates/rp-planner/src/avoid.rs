//! Location and directed-edge exclusion sets.

use rustc_hash::FxHashSet;

use rp_core::LocationId;

use crate::Path;

/// Locations a search may reach but never expand.
pub type BlockedNodes = FxHashSet<LocationId>;

/// Set of directed `(from, to)` location pairs a search may not traverse.
///
/// Direction matters: blocking `(1, 2)` leaves `2 → 1` usable.  Blocking a
/// pair blocks every road between those two locations in that direction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockedEdges(FxHashSet<(LocationId, LocationId)>);

impl BlockedEdges {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the pair was not already blocked.
    pub fn insert(&mut self, from: LocationId, to: LocationId) -> bool {
        self.0.insert((from, to))
    }

    #[inline]
    pub fn contains(&self, from: LocationId, to: LocationId) -> bool {
        self.0.contains(&(from, to))
    }

    /// Add every pair of `other` to `self`.
    pub fn extend_from(&mut self, other: &BlockedEdges) {
        self.0.extend(other.iter());
    }

    pub fn iter(&self) -> impl Iterator<Item = (LocationId, LocationId)> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(LocationId, LocationId)> for BlockedEdges {
    fn from_iter<I: IntoIterator<Item = (LocationId, LocationId)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<(LocationId, LocationId)> for BlockedEdges {
    fn extend<I: IntoIterator<Item = (LocationId, LocationId)>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

/// Both exclusion sets of one planning request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Avoid {
    pub nodes: BlockedNodes,
    pub edges: BlockedEdges,
}

impl Avoid {
    pub fn new(nodes: BlockedNodes, edges: BlockedEdges) -> Self {
        Self { nodes, edges }
    }

    /// Merge the edges `path` used, so later searches must avoid them.
    pub fn block_path(&mut self, path: &Path) {
        self.edges.extend_from(&path.used_edges);
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}
