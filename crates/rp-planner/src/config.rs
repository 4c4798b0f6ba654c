//! Planner tuning knobs.

/// Policy settings shared by every planning request.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlannerConfig {
    /// Upper bound on how many over-budget park-and-walk suggestions are
    /// reported.  Fewer are reported when fewer exist.
    pub suggestion_limit: usize,

    /// When `true`, the walking leg of a park-and-walk plan may not reuse any
    /// directed road the driving leg used.
    pub block_driven_edges_for_walk: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            suggestion_limit:            2,
            block_driven_edges_for_walk: true,
        }
    }
}
