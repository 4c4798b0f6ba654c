//! Request dispatcher owning the search algorithm and planner policy.

use rp_core::{LocationId, Minutes, TravelMode};
use rp_network::RoadNetwork;

use crate::{
    best_and_alternate, plan_park_and_walk, restricted_route, Avoid, Dijkstra,
    ParkAndWalkPlan, Path, PathSearch, PlanResult, PlannerConfig, RoutePair,
};

// ── Requests ──────────────────────────────────────────────────────────────────

/// The three kinds of planning request.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum RequestKind {
    /// Fastest driving route plus an edge-disjoint alternative.
    Driving,
    /// Driving route avoiding given locations/roads, optionally via a location.
    Restricted,
    /// Drive to a parking location, then walk.
    DrivingWalking,
}

/// A single planning request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanRequest {
    Driving {
        source:      LocationId,
        destination: LocationId,
    },
    Restricted {
        source:      LocationId,
        destination: LocationId,
        avoid:       Avoid,
        via:         Option<LocationId>,
    },
    DrivingWalking {
        source:      LocationId,
        destination: LocationId,
        max_walk:    Minutes,
        avoid:       Avoid,
    },
}

impl PlanRequest {
    pub fn kind(&self) -> RequestKind {
        match self {
            PlanRequest::Driving { .. }        => RequestKind::Driving,
            PlanRequest::Restricted { .. }     => RequestKind::Restricted,
            PlanRequest::DrivingWalking { .. } => RequestKind::DrivingWalking,
        }
    }

    pub fn source(&self) -> LocationId {
        match self {
            PlanRequest::Driving { source, .. }
            | PlanRequest::Restricted { source, .. }
            | PlanRequest::DrivingWalking { source, .. } => *source,
        }
    }

    pub fn destination(&self) -> LocationId {
        match self {
            PlanRequest::Driving { destination, .. }
            | PlanRequest::Restricted { destination, .. }
            | PlanRequest::DrivingWalking { destination, .. } => *destination,
        }
    }
}

/// Result of [`RoutePlanner::plan`], one variant per [`RequestKind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanOutcome {
    Driving(RoutePair),
    Restricted(Option<Path>),
    DrivingWalking(ParkAndWalkPlan),
}

impl PlanOutcome {
    pub fn kind(&self) -> RequestKind {
        match self {
            PlanOutcome::Driving(_)        => RequestKind::Driving,
            PlanOutcome::Restricted(_)     => RequestKind::Restricted,
            PlanOutcome::DrivingWalking(_) => RequestKind::DrivingWalking,
        }
    }
}

// ── RoutePlanner ──────────────────────────────────────────────────────────────

/// Answers [`PlanRequest`]s against one network.
///
/// The network is borrowed immutably, so several planners (or threads) may
/// share it.
pub struct RoutePlanner<'n, S: PathSearch = Dijkstra> {
    network: &'n RoadNetwork,
    search:  S,
    config:  PlannerConfig,
}

impl<'n> RoutePlanner<'n, Dijkstra> {
    pub fn new(network: &'n RoadNetwork, config: PlannerConfig) -> Self {
        Self::with_search(network, Dijkstra, config)
    }
}

impl<'n, S: PathSearch> RoutePlanner<'n, S> {
    pub fn with_search(network: &'n RoadNetwork, search: S, config: PlannerConfig) -> Self {
        Self { network, search, config }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Run one request.
    ///
    /// Fails only when the source or destination (or a `via` location) is not
    /// in the network; an unreachable destination is an empty outcome.
    pub fn plan(&self, request: &PlanRequest) -> PlanResult<PlanOutcome> {
        let (source, destination) = (request.source(), request.destination());
        let from = self.network.find_by_id(source)?;
        let to = self.network.find_by_id(destination)?;

        log::debug!(
            "planning {:?} request {source} ({}) -> {destination} ({})",
            request.kind(),
            from.code,
            to.code
        );

        let outcome = match request {
            PlanRequest::Driving { .. } => PlanOutcome::Driving(best_and_alternate(
                &self.search,
                self.network,
                source,
                destination,
                TravelMode::Driving,
                &Avoid::default(),
            )?),
            PlanRequest::Restricted { avoid, via, .. } => PlanOutcome::Restricted(restricted_route(
                &self.search,
                self.network,
                source,
                destination,
                *via,
                TravelMode::Driving,
                avoid,
            )?),
            PlanRequest::DrivingWalking { max_walk, avoid, .. } => {
                PlanOutcome::DrivingWalking(plan_park_and_walk(
                    &self.search,
                    self.network,
                    source,
                    destination,
                    *max_walk,
                    avoid,
                    &self.config,
                )?)
            }
        };
        Ok(outcome)
    }
}
