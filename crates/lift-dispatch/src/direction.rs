//! One-floor elevator moves.

use std::cmp::Ordering;
use std::fmt;

use lift_core::Floor;

/// The move an elevator makes in one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    Stay,
}

impl Direction {
    /// Floor change: +1, -1, or 0.
    #[inline]
    pub fn delta(self) -> i32 {
        match self {
            Direction::Up => 1,
            Direction::Down => -1,
            Direction::Stay => 0,
        }
    }

    /// The floor reached by applying this move to `from`.
    #[inline]
    pub fn apply(self, from: Floor) -> Floor {
        match self {
            Direction::Up => from.up(),
            Direction::Down => from.down(),
            Direction::Stay => from,
        }
    }

    /// The single step that brings `from` closer to `to`.
    pub fn toward(from: Floor, to: Floor) -> Direction {
        match to.cmp(&from) {
            Ordering::Greater => Direction::Up,
            Ordering::Less => Direction::Down,
            Ordering::Equal => Direction::Stay,
        }
    }

    /// `false` for `Down` on floor 1 (or below) and `Up` on `top` (or above).
    pub fn is_legal_at(self, floor: Floor, top: Floor) -> bool {
        match self {
            Direction::Up => floor < top,
            Direction::Down => floor > Floor::GROUND,
            Direction::Stay => true,
        }
    }

    /// Every legal move for an elevator on `floor`, in `Down, Stay, Up` order.
    pub fn legal_at(floor: Floor, top: Floor) -> &'static [Direction] {
        static ALL: [Direction; 3] = [Direction::Down, Direction::Stay, Direction::Up];
        let lo = if Direction::Down.is_legal_at(floor, top) { 0 } else { 1 };
        let hi = if Direction::Up.is_legal_at(floor, top) { 3 } else { 2 };
        &ALL[lo..hi]
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Stay => "stay",
        })
    }
}
