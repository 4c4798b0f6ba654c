//! Alternate-route and required-intermediate routing.
//!
//! Both strategies are compositions of two [`PathSearch`] calls that share
//! one avoid set; the first call's used edges are merged into it before the
//! second runs.

use rp_core::{LocationId, TravelMode};
use rp_network::RoadNetwork;

use crate::{Avoid, Path, PathSearch, PlanResult};

/// A primary route plus an edge-disjoint alternative.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoutePair {
    pub best: Option<Path>,
    /// Shares no directed edge with `best`.  Always `None` when `best` is
    /// `None` or trivial.
    pub alternate: Option<Path>,
}

/// Find the best route, then the best route that reuses none of its
/// directed edges.
///
/// `avoid` is left untouched; the chaining happens on a private copy.
pub fn best_and_alternate<S: PathSearch + ?Sized>(
    search: &S,
    network: &RoadNetwork,
    from: LocationId,
    to: LocationId,
    mode: TravelMode,
    avoid: &Avoid,
) -> PlanResult<RoutePair> {
    let mut edges = avoid.edges.clone();
    let best = search.search_blocking(network, from, to, mode, &avoid.nodes, &mut edges)?;

    let alternate = match &best {
        Some(path) if !path.is_trivial() => {
            search.search(network, from, to, mode, &avoid.nodes, &edges)?
        }
        _ => None,
    };

    Ok(RoutePair { best, alternate })
}

/// Route from `from` to `to` passing through `via`.
///
/// The second leg may not reuse a directed edge of the first.  If either leg
/// has no route the whole route is `None`; a partial path is never returned.
pub fn route_via<S: PathSearch + ?Sized>(
    search: &S,
    network: &RoadNetwork,
    from: LocationId,
    via: LocationId,
    to: LocationId,
    mode: TravelMode,
    avoid: &Avoid,
) -> PlanResult<Option<Path>> {
    let Some(first) = search.search(network, from, via, mode, &avoid.nodes, &avoid.edges)? else {
        log::debug!("no route {from} -> {via}; dropping route via {via}");
        return Ok(None);
    };

    let mut avoid = avoid.clone();
    avoid.block_path(&first);
    let Some(second) = search.search(network, via, to, mode, &avoid.nodes, &avoid.edges)? else {
        log::debug!("no route {via} -> {to}; dropping route via {via}");
        return Ok(None);
    };

    Ok(Some(first.join(second)))
}

/// Route honouring `avoid`, optionally forced through `via`.
pub fn restricted_route<S: PathSearch + ?Sized>(
    search: &S,
    network: &RoadNetwork,
    from: LocationId,
    to: LocationId,
    via: Option<LocationId>,
    mode: TravelMode,
    avoid: &Avoid,
) -> PlanResult<Option<Path>> {
    match via {
        Some(via) => route_via(search, network, from, via, to, mode, avoid),
        None => search.search(network, from, to, mode, &avoid.nodes, &avoid.edges),
    }
}
