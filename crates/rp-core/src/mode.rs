//! Travel mode selecting which cost of a road a search uses.

/// How the traveller moves along a road.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TravelMode {
    /// Uses the driving time; roads marked not-drivable are skipped.
    #[default]
    Driving,
    /// Uses the walking time; every road is walkable.
    Walking,
}

impl TravelMode {
    /// Lower-case label used in log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            TravelMode::Driving => "driving",
            TravelMode::Walking => "walking",
        }
    }
}

impl std::fmt::Display for TravelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
