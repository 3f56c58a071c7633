//! Strongly typed floor and elevator identifiers.
//!
//! Both are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.

use std::fmt;

// ── Floor ─────────────────────────────────────────────────────────────────────

/// A 1-based floor number.  Floor 1 is the lobby; the top floor is the
/// building's `floor_count`.
///
/// Nothing stops you from writing `Floor(0)`; range checks live at the
/// boundaries (config validation, arrival validation) rather than here.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Floor(pub u32);

impl Floor {
    /// The ground floor, where every elevator starts.
    pub const GROUND: Floor = Floor(1);

    /// Zero-based slot for per-floor `Vec` storage (`Floor(1)` → 0).
    ///
    /// # Panics
    /// Panics in debug mode on `Floor(0)`.
    #[inline(always)]
    pub fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// The floor directly above.
    #[inline]
    pub fn up(self) -> Floor {
        Floor(self.0 + 1)
    }

    /// The floor directly below.  Saturates at 0 so an out-of-range result is
    /// visible to range checks instead of wrapping.
    #[inline]
    pub fn down(self) -> Floor {
        Floor(self.0.saturating_sub(1))
    }

    /// Absolute number of floors between `self` and `other`.
    #[inline]
    pub fn distance(self, other: Floor) -> u32 {
        self.0.abs_diff(other.0)
    }

    /// `true` if `self` lies in `1..=top`.
    #[inline]
    pub fn is_within(self, top: Floor) -> bool {
        self.0 >= 1 && self.0 <= top.0
    }

    /// Iterate every floor from the ground floor up to and including `top`.
    pub fn range_to(top: Floor) -> impl DoubleEndedIterator<Item = Floor> {
        (1..=top.0).map(Floor)
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}", self.0)
    }
}

// ── ElevatorId ────────────────────────────────────────────────────────────────

/// Position of an elevator in the fleet.  Fleet order is fixed for a run, so
/// this doubles as a `Vec` index.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElevatorId(pub u32);

impl ElevatorId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ElevatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ElevatorId({})", self.0)
    }
}

impl From<ElevatorId> for usize {
    #[inline(always)]
    fn from(id: ElevatorId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for ElevatorId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<ElevatorId, Self::Error> {
        u32::try_from(n).map(ElevatorId)
    }
}
