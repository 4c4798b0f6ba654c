//! Result-file writer.
//!
//! Every result starts with the request endpoints:
//!
//! ```text
//! Source:1
//! Destination:4
//! ```
//!
//! followed by lines depending on the request kind.  Routes are rendered as
//! `1,3,4 (5 min)`, or `none` when absent.
//!
//! | Kind            | Lines                                                       |
//! |-----------------|-------------------------------------------------------------|
//! | driving         | `BestDrivingRoute`, `AlternativeRoute`                      |
//! | restricted      | `RestrictedDrivingRoute`                                    |
//! | driving-walking | `DrivingRoute`, `ParkingNode`, `WalkingRoute`, `TotalTime`  |
//!
//! A driving-walking request with no plan inside the walking budget lists the
//! ranked suggestions instead, numbered from 1 (`DrivingRoute1`, ...), each
//! walking route annotated with `(Exceeds by N min)`.  With no candidate at
//! all, every field is `none` and a `Message` line explains why.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path as FsPath;

use rp_core::Minutes;
use rp_planner::{ParkAndWalk, ParkAndWalkPlan, Path, PlanOutcome, PlanRequest};

use crate::{IoError, IoResult};

/// Create (or truncate) `path` and write the result to it.
pub fn write_outcome_file(
    path:             &FsPath,
    request:          &PlanRequest,
    outcome:          &PlanOutcome,
    suggestion_limit: usize,
) -> IoResult<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write_outcome(&mut out, request, outcome, suggestion_limit)?;
    out.flush()?;
    log::info!("wrote result to {}", path.display());
    Ok(())
}

/// Render `outcome` for `request` into `out`.
///
/// At most `suggestion_limit` over-budget suggestions are listed.
pub fn write_outcome<W: Write>(
    out:              &mut W,
    request:          &PlanRequest,
    outcome:          &PlanOutcome,
    suggestion_limit: usize,
) -> IoResult<()> {
    writeln!(out, "Source:{}", request.source())?;
    writeln!(out, "Destination:{}", request.destination())?;

    match (request, outcome) {
        (PlanRequest::Driving { .. }, PlanOutcome::Driving(pair)) => {
            writeln!(out, "BestDrivingRoute:{}", route(pair.best.as_ref()))?;
            writeln!(out, "AlternativeRoute:{}", route(pair.alternate.as_ref()))?;
        }
        (PlanRequest::Restricted { .. }, PlanOutcome::Restricted(path)) => {
            writeln!(out, "RestrictedDrivingRoute:{}", route(path.as_ref()))?;
        }
        (PlanRequest::DrivingWalking { max_walk, .. }, PlanOutcome::DrivingWalking(plan)) => {
            write_park_and_walk(out, plan, *max_walk, suggestion_limit)?;
        }
        _ => {
            return Err(IoError::KindMismatch {
                request: request.kind(),
                outcome: outcome.kind(),
            });
        }
    }
    Ok(())
}

fn write_park_and_walk<W: Write>(
    out:              &mut W,
    plan:             &ParkAndWalkPlan,
    max_walk:         Minutes,
    suggestion_limit: usize,
) -> IoResult<()> {
    if let Some(best) = &plan.best {
        writeln!(out, "DrivingRoute:{}", route(Some(&best.drive)))?;
        writeln!(out, "ParkingNode:{}", best.parking)?;
        writeln!(out, "WalkingRoute:{}", route(Some(&best.walk)))?;
        writeln!(out, "TotalTime:{}", best.total)?;
    } else if plan.is_over_budget() {
        for (i, s) in plan.ranked_suggestions(suggestion_limit).iter().enumerate() {
            write_suggestion(out, i + 1, s)?;
        }
    } else {
        writeln!(out, "DrivingRoute:none")?;
        writeln!(out, "ParkingNode:none")?;
        writeln!(out, "WalkingRoute:none")?;
        writeln!(out, "TotalTime:none")?;
        writeln!(out, "Message:No possible route with max walking time of {max_walk} minutes.")?;
    }
    Ok(())
}

fn write_suggestion<W: Write>(out: &mut W, n: usize, s: &ParkAndWalk) -> IoResult<()> {
    writeln!(out, "DrivingRoute{n}:{}", route(Some(&s.drive)))?;
    writeln!(out, "ParkingNode{n}:{}", s.parking)?;
    writeln!(out, "WalkingRoute{n}:{}(Exceeds by {} min)", route(Some(&s.walk)), s.exceed)?;
    writeln!(out, "TotalTime{n}:{}", s.total)?;
    Ok(())
}

fn route(path: Option<&Path>) -> String {
    match path {
        None => "none".to_owned(),
        Some(p) => {
            let ids: Vec<String> = p.locations.iter().map(|id| id.to_string()).collect();
            format!("{} ({} min)", ids.join(","), p.cost)
        }
    }
}
