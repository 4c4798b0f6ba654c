//! Location store, road network representation, and builder.
//!
//! # Data layout
//!
//! Locations live in a `Vec<Location>` indexed by [`NodeIdx`], in the order
//! they were added.  Two hash indexes map a [`LocationId`] or a textual code
//! to that slot in O(1).
//!
//! Roads use **Compressed Sparse Row (CSR)** format.  Given a slot `n`, its
//! outgoing roads occupy the slice:
//!
//! ```text
//! road_*[ node_out_start[n] .. node_out_start[n+1] ]
//! ```
//!
//! Road arrays are grouped by origin with a stable sort, so each location's
//! outgoing roads keep the order in which they were added.  The whole graph
//! is two arenas; dropping the network releases everything at once.

use rustc_hash::FxHashMap;

use rp_core::{LocationId, Minutes, NodeIdx, RoadIdx, TravelMode, NOT_DRIVABLE, is_drivable};

use crate::{NetworkError, NetworkResult};

// ── Location / Road ───────────────────────────────────────────────────────────

/// A node of the road network.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    /// Slot of this location in the arena.
    pub idx: NodeIdx,
    pub id: LocationId,
    pub code: String,
    pub has_parking: bool,
}

/// Copyable view of one directed road.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Road {
    pub from: NodeIdx,
    pub to: NodeIdx,
    /// Driving time, or [`NOT_DRIVABLE`].
    pub driving: Minutes,
    pub walking: Minutes,
}

impl Road {
    /// Cost of traversing this road in `mode`; `None` if the mode cannot use it.
    #[inline]
    pub fn cost(&self, mode: TravelMode) -> Option<Minutes> {
        match mode {
            TravelMode::Driving => is_drivable(self.driving).then_some(self.driving),
            TravelMode::Walking => Some(self.walking),
        }
    }
}

// ── RoadNetwork ───────────────────────────────────────────────────────────────

/// Directed road graph in CSR format plus id and code indexes.
///
/// Road fields are `pub` for direct indexed access on hot paths.  Do not
/// construct directly; use [`RoadNetworkBuilder`].
#[derive(Debug)]
pub struct RoadNetwork {
    // ── Node data ─────────────────────────────────────────────────────────
    locations: Vec<Location>,

    // ── CSR road adjacency ────────────────────────────────────────────────
    /// CSR row pointer.  Length = `node_count + 1`.
    pub node_out_start: Vec<u32>,

    // ── Road data (indexed by RoadIdx = position in grouped order) ────────
    /// Origin of each road.  Needed to walk predecessor roads back to the
    /// source during path reconstruction.
    pub road_from: Vec<NodeIdx>,
    pub road_to: Vec<NodeIdx>,
    pub road_driving: Vec<Minutes>,
    pub road_walking: Vec<Minutes>,

    // ── Indexes ───────────────────────────────────────────────────────────
    by_id: FxHashMap<LocationId, NodeIdx>,
    by_code: FxHashMap<String, NodeIdx>,
}

impl RoadNetwork {
    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.locations.len()
    }

    pub fn road_count(&self) -> usize {
        self.road_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    // ── Location lookup ───────────────────────────────────────────────────

    /// Location stored in slot `idx`.
    ///
    /// # Panics
    /// Panics if `idx` did not come from this network.
    #[inline]
    pub fn location(&self, idx: NodeIdx) -> &Location {
        &self.locations[idx.index()]
    }

    /// All locations in insertion order.
    pub fn locations(&self) -> impl Iterator<Item = &Location> + '_ {
        self.locations.iter()
    }

    /// Locations that offer parking, in insertion order.
    pub fn parking_locations(&self) -> impl Iterator<Item = &Location> + '_ {
        self.locations().filter(|l| l.has_parking)
    }

    /// Arena slot of location `id`.
    pub fn slot_of(&self, id: LocationId) -> NetworkResult<NodeIdx> {
        self.by_id
            .get(&id)
            .copied()
            .ok_or(NetworkError::LocationNotFound(id))
    }

    pub fn find_by_id(&self, id: LocationId) -> NetworkResult<&Location> {
        self.slot_of(id).map(|idx| self.location(idx))
    }

    pub fn find_by_code(&self, code: &str) -> NetworkResult<&Location> {
        self.by_code
            .get(code)
            .map(|&idx| self.location(idx))
            .ok_or_else(|| NetworkError::CodeNotFound(code.to_owned()))
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Iterator over the `RoadIdx`s of all roads leaving `node`, in the order
    /// they were added.
    #[inline]
    pub fn out_roads(&self, node: NodeIdx) -> impl Iterator<Item = RoadIdx> + '_ {
        let start = self.node_out_start[node.index()];
        let end = self.node_out_start[node.index() + 1];
        (start..end).map(RoadIdx)
    }

    #[inline]
    pub fn road(&self, road: RoadIdx) -> Road {
        let i = road.index();
        Road {
            from: self.road_from[i],
            to: self.road_to[i],
            driving: self.road_driving[i],
            walking: self.road_walking[i],
        }
    }
}

// ── RoadNetworkBuilder ────────────────────────────────────────────────────────

/// Construct a [`RoadNetwork`] incrementally, then call [`build`](Self::build).
///
/// Locations must be added before any road that references them.
///
/// # Example
///
/// ```
/// use rp_core::LocationId;
/// use rp_network::RoadNetworkBuilder;
///
/// let mut b = RoadNetworkBuilder::new();
/// b.add_location(LocationId(1), "A", false).unwrap();
/// b.add_location(LocationId(2), "B", true).unwrap();
/// b.add_road(LocationId(1), LocationId(2), 5, 10).unwrap();
/// let net = b.build();
/// assert_eq!(net.node_count(), 2);
/// assert_eq!(net.road_count(), 2); // one record per direction
/// ```
pub struct RoadNetworkBuilder {
    locations: Vec<Location>,
    raw_roads: Vec<RawRoad>,
    by_id: FxHashMap<LocationId, NodeIdx>,
    by_code: FxHashMap<String, NodeIdx>,
}

struct RawRoad {
    from: NodeIdx,
    to: NodeIdx,
    driving: Minutes,
    walking: Minutes,
}

impl RoadNetworkBuilder {
    pub fn new() -> Self {
        Self::with_capacity(0, 0)
    }

    /// Pre-allocate for the expected number of locations and physical roads.
    pub fn with_capacity(locations: usize, roads: usize) -> Self {
        Self {
            locations: Vec::with_capacity(locations),
            raw_roads: Vec::with_capacity(roads * 2),
            by_id: FxHashMap::with_capacity_and_hasher(locations, Default::default()),
            by_code: FxHashMap::with_capacity_and_hasher(locations, Default::default()),
        }
    }

    /// Add a location and return its arena slot.
    ///
    /// Both `id` and `code` must be unused.
    pub fn add_location(
        &mut self,
        id: LocationId,
        code: impl Into<String>,
        has_parking: bool,
    ) -> NetworkResult<NodeIdx> {
        let code = code.into();
        if self.by_id.contains_key(&id) {
            return Err(NetworkError::DuplicateId(id));
        }
        if self.by_code.contains_key(&code) {
            return Err(NetworkError::DuplicateCode(code));
        }

        let idx = NodeIdx(self.locations.len() as u32);
        self.by_id.insert(id, idx);
        self.by_code.insert(code.clone(), idx);
        self.locations.push(Location { idx, id, code, has_parking });
        Ok(idx)
    }

    /// Add a physical road between `from` and `to`.
    ///
    /// Always stores two directed records, `from → to` and `to → from`, with
    /// the same cost pair.  Pass [`NOT_DRIVABLE`] as `driving` for a
    /// walking-only road.
    pub fn add_road(
        &mut self,
        from: LocationId,
        to: LocationId,
        driving: Minutes,
        walking: Minutes,
    ) -> NetworkResult<()> {
        let a = self.slot_of(from)?;
        let b = self.slot_of(to)?;
        if walking == NOT_DRIVABLE {
            return Err(NetworkError::InvalidWalkingTime { from, to });
        }
        self.raw_roads.push(RawRoad { from: a, to: b, driving, walking });
        self.raw_roads.push(RawRoad { from: b, to: a, driving, walking });
        Ok(())
    }

    /// Look up the id of a location added earlier by its code (the distance
    /// files reference locations by code).
    pub fn find_by_code(&self, code: &str) -> NetworkResult<LocationId> {
        self.by_code
            .get(code)
            .map(|&idx| self.locations[idx.index()].id)
            .ok_or_else(|| NetworkError::CodeNotFound(code.to_owned()))
    }

    fn slot_of(&self, id: LocationId) -> NetworkResult<NodeIdx> {
        self.by_id
            .get(&id)
            .copied()
            .ok_or(NetworkError::LocationNotFound(id))
    }

    pub fn node_count(&self) -> usize {
        self.locations.len()
    }

    pub fn road_count(&self) -> usize {
        self.raw_roads.len()
    }

    /// Consume the builder and produce a [`RoadNetwork`].
    ///
    /// Time complexity: O(E log E) for the road grouping, where E = roads.
    pub fn build(self) -> RoadNetwork {
        let node_count = self.locations.len();
        let road_count = self.raw_roads.len();

        // Stable: roads leaving the same location keep insertion order.
        let mut raw = self.raw_roads;
        raw.sort_by_key(|r| r.from.0);

        let road_from:    Vec<NodeIdx> = raw.iter().map(|r| r.from).collect();
        let road_to:      Vec<NodeIdx> = raw.iter().map(|r| r.to).collect();
        let road_driving: Vec<Minutes> = raw.iter().map(|r| r.driving).collect();
        let road_walking: Vec<Minutes> = raw.iter().map(|r| r.walking).collect();

        let mut node_out_start = vec![0u32; node_count + 1];
        for r in &raw {
            node_out_start[r.from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            node_out_start[i] += node_out_start[i - 1];
        }
        debug_assert_eq!(node_out_start[node_count] as usize, road_count);

        log::debug!("built road network: {node_count} locations, {road_count} directed roads");

        RoadNetwork {
            locations: self.locations,
            node_out_start,
            road_from,
            road_to,
            road_driving,
            road_walking,
            by_id: self.by_id,
            by_code: self.by_code,
        }
    }
}

impl Default for RoadNetworkBuilder {
    fn default() -> Self {
        Self::new()
    }
}
