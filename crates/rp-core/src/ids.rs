//! Strongly typed, zero-cost identifier wrappers.
//!
//! Two families live here:
//!
//! - [`LocationId`] is the *external* identity of a location, as it appears in
//!   input files and results.  Values are arbitrary and need not be dense.
//! - [`NodeIdx`] and [`RoadIdx`] are *arena slots* inside a built network.
//!   They are dense, start at 0, and index straight into the network's `Vec`s.
//!
//! Never mix the two: a `LocationId` is translated to its `NodeIdx` once via
//! the network's id index, and every search works on slots from then on.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID", equal to `MAX`.
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Numeric id of a location as given by the data files.
    pub struct LocationId(u32);
}

typed_id! {
    /// Slot of a location in the network arena.
    pub struct NodeIdx(u32);
}

typed_id! {
    /// Slot of a directed road in the network arena.
    pub struct RoadIdx(u32);
}

// Location ids are printed bare because they appear verbatim in result files.
impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for NodeIdx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeIdx({})", self.0)
    }
}

impl fmt::Display for RoadIdx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RoadIdx({})", self.0)
    }
}
