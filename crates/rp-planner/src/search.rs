//! Constrained shortest-path search.
//!
//! # Pluggability
//!
//! Planners call routing through the [`PathSearch`] trait, so a different
//! algorithm (A*, bidirectional Dijkstra) can be swapped in without touching
//! the planning strategies.  [`Dijkstra`] is the default.
//!
//! # Scratch state
//!
//! Tentative distances and predecessor roads live in two `Vec`s allocated by
//! each call and sized to the network arena.  The network itself is never
//! written to, so any number of searches may share it, sequentially or from
//! several threads.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use rp_core::{LocationId, Minutes, NodeIdx, RoadIdx, TravelMode};
use rp_network::RoadNetwork;

use crate::{BlockedEdges, BlockedNodes, PlanResult};

/// Tentative distance of a location no search has reached yet.
const UNREACHED: Minutes = Minutes::MAX;

// ── Path ──────────────────────────────────────────────────────────────────────

/// The result of a successful search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    /// Locations visited in order, source first, destination last.
    pub locations: Vec<LocationId>,
    /// Sum of the mode-selected road costs.
    pub cost: Minutes,
    /// Every directed `(from, to)` pair traversed by this path.
    pub used_edges: BlockedEdges,
}

impl Path {
    /// Zero-length path that stays at `at`.
    pub fn trivial(at: LocationId) -> Self {
        Self { locations: vec![at], cost: 0, used_edges: BlockedEdges::new() }
    }

    pub fn source(&self) -> LocationId {
        self.locations[0]
    }

    pub fn destination(&self) -> LocationId {
        self.locations[self.locations.len() - 1]
    }

    /// `true` if the source and destination are the same location.
    pub fn is_trivial(&self) -> bool {
        self.locations.len() == 1
    }

    /// Append `next`, which must start where `self` ends.  The shared
    /// location appears once in the result; costs and used edges add up.
    pub fn join(mut self, next: Path) -> Path {
        debug_assert_eq!(self.destination(), next.source());
        self.locations.pop();
        self.locations.extend(next.locations);
        self.cost = self.cost.saturating_add(next.cost);
        self.used_edges.extend_from(&next.used_edges);
        self
    }
}

// ── PathSearch trait ──────────────────────────────────────────────────────────

/// Single-source, single-destination search under avoid constraints.
///
/// Implementations must be `Send + Sync` so park-and-walk candidates can be
/// evaluated on Rayon worker threads.
pub trait PathSearch: Send + Sync {
    /// Cheapest path from `from` to `to` in `mode`.
    ///
    /// - A location in `nodes` can still be reached, but none of its roads is
    ///   followed.  A blocked source therefore yields no path unless
    ///   `from == to`.
    /// - A road is skipped when its `(origin, destination)` pair is in `edges`
    ///   or when `mode` cannot use it.
    ///
    /// Returns `Ok(None)` when no path exists under these constraints, and an
    /// error only when `from` or `to` is not in the network.
    fn search(
        &self,
        network: &RoadNetwork,
        from: LocationId,
        to: LocationId,
        mode: TravelMode,
        nodes: &BlockedNodes,
        edges: &BlockedEdges,
    ) -> PlanResult<Option<Path>>;

    /// Like [`search`](Self::search), then block the edges the found path
    /// used by merging them into `edges`.  Nothing is merged when no path
    /// is found.
    fn search_blocking(
        &self,
        network: &RoadNetwork,
        from: LocationId,
        to: LocationId,
        mode: TravelMode,
        nodes: &BlockedNodes,
        edges: &mut BlockedEdges,
    ) -> PlanResult<Option<Path>> {
        let found = self.search(network, from, to, mode, nodes, edges)?;
        if let Some(path) = &found {
            edges.extend_from(&path.used_edges);
        }
        Ok(found)
    }
}

// ── Dijkstra ──────────────────────────────────────────────────────────────────

/// Label-setting Dijkstra over the CSR road graph.
///
/// O((N + M) log N) per call.  Ties between equal tentative distances are
/// broken by arena slot, which makes results deterministic.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dijkstra;

impl PathSearch for Dijkstra {
    fn search(
        &self,
        network: &RoadNetwork,
        from: LocationId,
        to: LocationId,
        mode: TravelMode,
        nodes: &BlockedNodes,
        edges: &BlockedEdges,
    ) -> PlanResult<Option<Path>> {
        let found = dijkstra(network, from, to, mode, nodes, edges)?;
        match &found {
            Some(path) => log::debug!(
                "{mode} search {from} -> {to}: {} min over {} locations",
                path.cost,
                path.locations.len()
            ),
            None => log::debug!("{mode} search {from} -> {to}: no route"),
        }
        Ok(found)
    }
}

fn dijkstra(
    network: &RoadNetwork,
    from: LocationId,
    to: LocationId,
    mode: TravelMode,
    nodes: &BlockedNodes,
    edges: &BlockedEdges,
) -> PlanResult<Option<Path>> {
    let source = network.slot_of(from)?;
    let target = network.slot_of(to)?;
    if source == target {
        return Ok(Some(Path::trivial(from)));
    }

    let n = network.node_count();
    let mut dist = vec![UNREACHED; n];
    // prev_road[v] = road that reached v; RoadIdx::INVALID for the source and
    // for unreached locations.
    let mut prev_road = vec![RoadIdx::INVALID; n];

    dist[source.index()] = 0;

    // Reverse turns the max-heap into a min-heap; the slot breaks ties.
    let mut heap: BinaryHeap<Reverse<(Minutes, NodeIdx)>> = BinaryHeap::new();
    heap.push(Reverse((0, source)));

    while let Some(Reverse((cost, node))) = heap.pop() {
        // Skip stale heap entries.
        if cost > dist[node.index()] {
            continue;
        }

        // A popped label is final, so the target can be returned right away.
        if node == target {
            return Ok(Some(reconstruct(network, &prev_road, target, cost)));
        }

        let here = network.location(node).id;
        if nodes.contains(&here) {
            continue;
        }

        for road_idx in network.out_roads(node) {
            let road = network.road(road_idx);
            let Some(weight) = road.cost(mode) else {
                continue;
            };
            if edges.contains(here, network.location(road.to).id) {
                continue;
            }

            let new_cost = cost.saturating_add(weight);
            if new_cost < dist[road.to.index()] {
                dist[road.to.index()] = new_cost;
                prev_road[road.to.index()] = road_idx;
                heap.push(Reverse((new_cost, road.to)));
            }
        }
    }

    Ok(None)
}

fn reconstruct(
    network: &RoadNetwork,
    prev_road: &[RoadIdx],
    target: NodeIdx,
    cost: Minutes,
) -> Path {
    let mut locations = vec![network.location(target).id];
    let mut used_edges = BlockedEdges::new();

    let mut cur = target;
    loop {
        let r = prev_road[cur.index()];
        if r == RoadIdx::INVALID {
            break;
        }
        let road = network.road(r);
        let origin = network.location(road.from).id;
        used_edges.insert(origin, network.location(cur).id);
        locations.push(origin);
        cur = road.from;
    }
    locations.reverse();

    Path { locations, cost, used_edges }
}
