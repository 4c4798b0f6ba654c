//! Park-and-walk planning: drive to a parking location, walk the rest.
//!
//! Every parking location other than the two endpoints is a candidate
//! transfer point.  For each one:
//!
//! ```text
//! drive   = search(source → parking, Driving)
//! walk    = search(parking → destination, Walking)
//! total   = drive.cost + walk.cost
//! exceed  = max(0, walk.cost − max_walk)
//! ```
//!
//! Candidates with `exceed == 0` compete for `best` (lowest total, then
//! lowest walking time, then earliest parking location).  The others become
//! suggestions, ranked by total time.
//!
//! Each candidate works on its own copy of the avoid edges.  With
//! [`PlannerConfig::block_driven_edges_for_walk`] set, the driving leg's edges
//! are merged into that copy before the walking leg runs.

use rp_core::{LocationId, Minutes, TravelMode};
use rp_network::RoadNetwork;

use crate::{Avoid, Path, PathSearch, PlanResult, PlannerConfig};

// ── Result types ──────────────────────────────────────────────────────────────

/// One evaluated transfer point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParkAndWalk {
    pub parking: LocationId,
    pub drive: Path,
    pub walk: Path,
    /// Driving plus walking time.
    pub total: Minutes,
    pub walking: Minutes,
    /// Walking time over the budget; 0 when within it.
    pub exceed: Minutes,
}

impl ParkAndWalk {
    pub fn within_budget(&self) -> bool {
        self.exceed == 0
    }
}

/// Outcome of a park-and-walk request.
///
/// | `best`  | `suggestions` | Meaning                                    |
/// |---------|---------------|--------------------------------------------|
/// | `Some`  | any           | A plan fits the walking budget             |
/// | `None`  | non-empty     | Plans exist, all walk too far              |
/// | `None`  | empty         | No parking location gives a drive + walk   |
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParkAndWalkPlan {
    pub best: Option<ParkAndWalk>,
    /// Over-budget plans, ascending by total time (stable for ties).
    pub suggestions: Vec<ParkAndWalk>,
}

impl ParkAndWalkPlan {
    /// No candidate produced a feasible drive and walk at all.
    pub fn is_infeasible(&self) -> bool {
        self.best.is_none() && self.suggestions.is_empty()
    }

    /// Candidates exist but every one exceeds the walking budget.
    pub fn is_over_budget(&self) -> bool {
        self.best.is_none() && !self.suggestions.is_empty()
    }

    /// The first `limit` suggestions, or all of them if there are fewer.
    pub fn ranked_suggestions(&self, limit: usize) -> &[ParkAndWalk] {
        &self.suggestions[..limit.min(self.suggestions.len())]
    }
}

// ── Planner ───────────────────────────────────────────────────────────────────

/// Evaluate every parking location between `from` and `to`.
///
/// Errors only if `from` or `to` is not in the network.
pub fn plan_park_and_walk<S: PathSearch + ?Sized>(
    search: &S,
    network: &RoadNetwork,
    from: LocationId,
    to: LocationId,
    max_walk: Minutes,
    avoid: &Avoid,
    config: &PlannerConfig,
) -> PlanResult<ParkAndWalkPlan> {
    network.slot_of(from)?;
    network.slot_of(to)?;

    let candidates: Vec<LocationId> = network
        .parking_locations()
        .map(|l| l.id)
        .filter(|&id| id != from && id != to)
        .collect();

    let evaluate = |parking: LocationId| {
        evaluate_candidate(search, network, from, parking, to, max_walk, avoid, config)
    };

    #[cfg(not(feature = "parallel"))]
    let evaluated: Vec<Option<ParkAndWalk>> = candidates
        .iter()
        .map(|&parking| evaluate(parking))
        .collect::<PlanResult<_>>()?;

    // Indexed collect keeps candidate order, so the fold below sees the same
    // sequence as the sequential path.
    #[cfg(feature = "parallel")]
    let evaluated: Vec<Option<ParkAndWalk>> = {
        use rayon::prelude::*;
        candidates
            .par_iter()
            .map(|&parking| evaluate(parking))
            .collect::<PlanResult<_>>()?
    };

    let mut plan = ParkAndWalkPlan::default();
    for candidate in evaluated.into_iter().flatten() {
        if !candidate.within_budget() {
            plan.suggestions.push(candidate);
            continue;
        }
        let better = match &plan.best {
            None => true,
            Some(best) => (candidate.total, candidate.walking) < (best.total, best.walking),
        };
        if better {
            plan.best = Some(candidate);
        }
    }
    plan.suggestions.sort_by_key(|s| s.total);

    match &plan.best {
        Some(best) => log::info!(
            "park-and-walk {from} -> {to}: park at {} ({} min total, {} min walking)",
            best.parking,
            best.total,
            best.walking
        ),
        None if plan.is_infeasible() => {
            log::info!("park-and-walk {from} -> {to}: no parking location gives a drive and a walk")
        }
        None => log::info!(
            "park-and-walk {from} -> {to}: nothing within {max_walk} min walking, {} suggestion(s)",
            plan.suggestions.len()
        ),
    }

    Ok(plan)
}

#[allow(clippy::too_many_arguments)]
fn evaluate_candidate<S: PathSearch + ?Sized>(
    search: &S,
    network: &RoadNetwork,
    from: LocationId,
    parking: LocationId,
    to: LocationId,
    max_walk: Minutes,
    avoid: &Avoid,
    config: &PlannerConfig,
) -> PlanResult<Option<ParkAndWalk>> {
    let mut edges = avoid.edges.clone();

    let drive = if config.block_driven_edges_for_walk {
        search.search_blocking(
            network,
            from,
            parking,
            TravelMode::Driving,
            &avoid.nodes,
            &mut edges,
        )?
    } else {
        search.search(network, from, parking, TravelMode::Driving, &avoid.nodes, &edges)?
    };
    let Some(drive) = drive else {
        return Ok(None);
    };

    let walk = search.search(network, parking, to, TravelMode::Walking, &avoid.nodes, &edges)?;
    let Some(walk) = walk else {
        return Ok(None);
    };

    let walking = walk.cost;
    Ok(Some(ParkAndWalk {
        parking,
        total: drive.cost.saturating_add(walking),
        walking,
        exceed: walking.saturating_sub(max_walk),
        drive,
        walk,
    }))
}
