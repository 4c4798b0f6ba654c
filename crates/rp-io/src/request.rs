//! Request-file parser.
//!
//! # Format
//!
//! One `Key:Value` pair per line.  Keys are case-sensitive; unknown keys are
//! ignored with a warning.
//!
//! ```text
//! Mode:driving
//! Source:5
//! Destination:4
//! AvoidNodes:2,3
//! AvoidSegments:(1,2),(3,4)
//! IncludeNode:6
//! ```
//!
//! | Key             | Used by                      | Value                     |
//! |-----------------|------------------------------|---------------------------|
//! | `Mode`          | kind detection               | `driving`, `driving-walking` |
//! | `Source`        | all                          | location id               |
//! | `Destination`   | all                          | location id               |
//! | `MaxWalkTime`   | driving-walking (required)   | minutes                   |
//! | `AvoidNodes`    | restricted, driving-walking  | comma-separated ids       |
//! | `AvoidSegments` | restricted, driving-walking  | `(from,to)` pairs, directed |
//! | `IncludeNode`   | restricted                   | location id               |
//!
//! Empty values (`AvoidNodes:`) mean "nothing".

use rp_core::{LocationId, Minutes};
use rp_planner::{Avoid, BlockedEdges, BlockedNodes, PlanRequest, RequestKind};

use crate::{IoError, IoResult};

const RESTRICTION_KEYS: [&str; 3] = ["AvoidNodes", "AvoidSegments", "IncludeNode"];

/// One `Key:Value` line with its 1-based line number.
struct Entry<'a> {
    line:  u64,
    key:   &'a str,
    value: &'a str,
}

struct Fields<'a> {
    entries: Vec<Entry<'a>>,
}

impl<'a> Fields<'a> {
    fn parse(text: &'a str) -> IoResult<Self> {
        let mut entries = Vec::new();
        for (i, raw) in text.lines().enumerate() {
            let line = i as u64 + 1;
            let raw = raw.trim();
            if raw.is_empty() {
                continue;
            }
            let (key, value) = raw
                .split_once(':')
                .ok_or_else(|| IoError::parse(line, format!("expected Key:Value, got {raw:?}")))?;
            entries.push(Entry { line, key: key.trim(), value: value.trim() });
        }
        Ok(Self { entries })
    }

    fn get(&self, key: &str) -> Option<&Entry<'a>> {
        self.entries.iter().find(|e| e.key == key)
    }

    fn required_id(&self, key: &'static str) -> IoResult<LocationId> {
        let entry = self.get(key).ok_or(IoError::MissingKey(key))?;
        parse_id(entry.value, entry.line)
    }

    fn optional_id(&self, key: &str) -> IoResult<Option<LocationId>> {
        match self.get(key) {
            Some(e) if !e.value.is_empty() => parse_id(e.value, e.line).map(Some),
            _ => Ok(None),
        }
    }

    fn avoid(&self) -> IoResult<Avoid> {
        let nodes = match self.get("AvoidNodes") {
            Some(e) => parse_nodes(e.value, e.line)?,
            None => BlockedNodes::default(),
        };
        let edges = match self.get("AvoidSegments") {
            Some(e) => parse_segments(e.value, e.line)?,
            None => BlockedEdges::new(),
        };
        Ok(Avoid::new(nodes, edges))
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Decide which kind of request `text` describes.
///
/// `Mode:driving-walking` selects [`RequestKind::DrivingWalking`]; otherwise
/// any restriction key with a non-empty value selects
/// [`RequestKind::Restricted`], and plain [`RequestKind::Driving`] remains.
pub fn detect_kind(text: &str) -> IoResult<RequestKind> {
    let fields = Fields::parse(text)?;
    if let Some(mode) = fields.get("Mode") {
        match mode.value {
            "driving-walking" => return Ok(RequestKind::DrivingWalking),
            "driving" => {}
            other => {
                return Err(IoError::parse(
                    mode.line,
                    format!("unknown mode {other:?}: expected \"driving\" or \"driving-walking\""),
                ));
            }
        }
    }
    let restricted = RESTRICTION_KEYS
        .iter()
        .any(|k| fields.get(k).is_some_and(|e| !e.value.is_empty()));
    if restricted {
        Ok(RequestKind::Restricted)
    } else {
        Ok(RequestKind::Driving)
    }
}

/// Parse `text` as a request of the given `kind`.
///
/// Keys that `kind` does not use are ignored.
pub fn parse_request(text: &str, kind: RequestKind) -> IoResult<PlanRequest> {
    let fields = Fields::parse(text)?;
    for e in &fields.entries {
        if !is_known_key(e.key) {
            log::warn!("request line {}: unknown key {:?} ignored", e.line, e.key);
        }
    }

    let source = fields.required_id("Source")?;
    let destination = fields.required_id("Destination")?;

    let request = match kind {
        RequestKind::Driving => PlanRequest::Driving { source, destination },
        RequestKind::Restricted => {
            let avoid = fields.avoid()?;
            let via = fields.optional_id("IncludeNode")?;
            if avoid.is_empty() && via.is_none() {
                log::warn!("restricted request names nothing to avoid or include");
            } else {
                log::debug!(
                    "restricted request avoids {} location(s) and {} segment(s)",
                    avoid.nodes.len(),
                    avoid.edges.len()
                );
            }
            PlanRequest::Restricted { source, destination, avoid, via }
        }
        RequestKind::DrivingWalking => {
            let entry = fields.get("MaxWalkTime").ok_or(IoError::MissingKey("MaxWalkTime"))?;
            let max_walk = entry.value.parse::<Minutes>().map_err(|_| {
                IoError::parse(entry.line, format!("invalid MaxWalkTime {:?}", entry.value))
            })?;
            PlanRequest::DrivingWalking { source, destination, max_walk, avoid: fields.avoid()? }
        }
    };
    Ok(request)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn is_known_key(key: &str) -> bool {
    matches!(key, "Mode" | "Source" | "Destination" | "MaxWalkTime")
        || RESTRICTION_KEYS.iter().any(|k| *k == key)
}

fn parse_id(s: &str, line: u64) -> IoResult<LocationId> {
    s.trim()
        .parse::<u32>()
        .map(LocationId)
        .map_err(|_| IoError::parse(line, format!("invalid location id {s:?}")))
}

fn parse_nodes(value: &str, line: u64) -> IoResult<BlockedNodes> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| parse_id(s, line))
        .collect()
}

/// Parse `(from,to),(from,to),...` into directed pairs.
fn parse_segments(value: &str, line: u64) -> IoResult<BlockedEdges> {
    let mut edges = BlockedEdges::new();
    let mut rest = value;
    while let Some(open) = rest.find('(') {
        let close = rest[open..]
            .find(')')
            .map(|c| open + c)
            .ok_or_else(|| IoError::parse(line, format!("unclosed segment in {value:?}")))?;
        let (from, to) = rest[open + 1..close]
            .split_once(',')
            .ok_or_else(|| IoError::parse(line, format!("segment needs two ids in {value:?}")))?;
        edges.insert(parse_id(from, line)?, parse_id(to, line)?);
        rest = &rest[close + 1..];
    }
    Ok(edges)
}
