//! Travel-time units.
//!
//! All costs are whole minutes, matching the granularity of the distance
//! files.  Sums are taken with `saturating_add` so a long chain of roads can
//! never wrap around into a small value.

/// A travel time in minutes.
pub type Minutes = u32;

/// Reserved driving time marking a road that cannot be driven.
///
/// Written as `X` in distance files.  Walking times never take this value.
pub const NOT_DRIVABLE: Minutes = Minutes::MAX;

/// `true` unless `driving` is the [`NOT_DRIVABLE`] sentinel.
#[inline]
pub fn is_drivable(driving: Minutes) -> bool {
    driving != NOT_DRIVABLE
}
