//! CSV network loader.
//!
//! # CSV formats
//!
//! Both files start with a header row, which is skipped.  Columns are read by
//! position, so header wording does not matter.
//!
//! Locations, one row per location:
//!
//! ```csv
//! Location,Id,Code,Parking
//! Downtown,1,DT,0
//! Harbour,2,HB,1
//! ```
//!
//! Distances, one row per physical road, endpoints given by code:
//!
//! ```csv
//! Location1,Location2,Driving,Walking
//! DT,HB,5,10
//! HB,PK,X,3
//! ```
//!
//! | Field     | Meaning                                                 |
//! |-----------|---------------------------------------------------------|
//! | `Parking` | `1` = location offers parking, anything else = no       |
//! | `Driving` | minutes, or `X` for a road that cannot be driven        |
//! | `Walking` | minutes                                                 |
//!
//! Rows with an empty or missing required field are skipped with a warning.
//! A road naming an unknown code, or a duplicate id/code, aborts the load.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use rp_core::{LocationId, Minutes, NOT_DRIVABLE};
use rp_network::{RoadNetwork, RoadNetworkBuilder};

use crate::{IoError, IoResult};

// ── CSV records ───────────────────────────────────────────────────────────────

// Missing trailing columns deserialize as empty, so short rows are skipped
// like rows with blank fields.
#[derive(Deserialize, Default)]
#[serde(default)]
struct LocationRecord {
    _name:   String,
    id:      Option<u32>,
    code:    String,
    parking: String,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct DistanceRecord {
    from:    String,
    to:      String,
    driving: String,
    walking: Option<Minutes>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a complete network from a locations file and a distances file.
pub fn load_network(locations: &Path, distances: &Path) -> IoResult<RoadNetwork> {
    let network = load_network_readers(File::open(locations)?, File::open(distances)?)?;
    if network.is_empty() {
        log::warn!("{} holds no usable locations", locations.display());
    }
    log::info!(
        "loaded {} locations from {} and {} directed roads from {}",
        network.node_count(),
        locations.display(),
        network.road_count(),
        distances.display()
    );
    Ok(network)
}

/// Like [`load_network`] but accepts any `Read` sources.
///
/// Useful for testing (pass a `std::io::Cursor`).
pub fn load_network_readers<L: Read, D: Read>(locations: L, distances: D) -> IoResult<RoadNetwork> {
    let mut builder = RoadNetworkBuilder::new();
    load_locations_reader(locations, &mut builder)?;
    load_distances_reader(distances, &mut builder)?;
    Ok(builder.build())
}

/// Add every location row of `reader` to `builder`.  Returns the number of
/// locations added.
pub fn load_locations_reader<R: Read>(
    reader: R,
    builder: &mut RoadNetworkBuilder,
) -> IoResult<usize> {
    let before = builder.node_count();
    for (line, record) in records(reader) {
        let row: LocationRecord = record?.deserialize(None)?;
        let Some(id) = row.id else {
            log::warn!("locations line {line}: missing id, row skipped");
            continue;
        };
        if row.code.is_empty() || row.parking.is_empty() {
            log::warn!("locations line {line}: missing code or parking flag, row skipped");
            continue;
        }
        builder.add_location(LocationId(id), row.code, row.parking == "1")?;
    }
    Ok(builder.node_count() - before)
}

/// Add every road row of `reader` to `builder`.  Locations must already be
/// loaded.  Returns the number of physical roads added.
pub fn load_distances_reader<R: Read>(
    reader: R,
    builder: &mut RoadNetworkBuilder,
) -> IoResult<usize> {
    let before = builder.road_count();
    for (line, record) in records(reader) {
        let row: DistanceRecord = record?.deserialize(None)?;
        if row.from.is_empty() || row.to.is_empty() {
            log::warn!("distances line {line}: missing location code, row skipped");
            continue;
        }
        let Some(walking) = row.walking else {
            log::warn!("distances line {line}: missing walking time, row skipped");
            continue;
        };

        let driving = parse_driving(&row.driving, line)?;
        let from = builder.find_by_code(&row.from)?;
        let to = builder.find_by_code(&row.to)?;
        builder.add_road(from, to, driving, walking)?;
    }
    // Every physical road is stored once per direction.
    Ok((builder.road_count() - before) / 2)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Data rows of `reader` paired with their 1-based line number.
fn records<R: Read>(
    reader: R,
) -> impl Iterator<Item = (u64, Result<csv::StringRecord, csv::Error>)> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader)
        .into_records()
        .map(|r| {
            let line = match &r {
                Ok(rec) => rec.position().map_or(0, |p| p.line()),
                Err(e) => e.position().map_or(0, |p| p.line()),
            };
            (line, r)
        })
}

fn parse_driving(s: &str, line: u64) -> IoResult<Minutes> {
    match s {
        "X" | "x" => Ok(NOT_DRIVABLE),
        n => n.parse::<Minutes>().map_err(|_| {
            IoError::parse(line, format!("invalid driving time {n:?}: expected minutes or \"X\""))
        }),
    }
}
