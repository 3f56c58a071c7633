//! A person travelling between two floors.

use lift_core::Floor;

/// Somebody who arrived on `start` and wants to reach `target`.
///
/// `wait_time` counts the rounds elapsed since arrival without reaching the
/// target, whether spent on a floor or inside an elevator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Person {
    pub start:     Floor,
    pub target:    Floor,
    pub wait_time: u32,
}

impl Person {
    pub fn new(start: Floor, target: Floor) -> Self {
        Self { start, target, wait_time: 0 }
    }

    /// Coarse 0–4 frustration scale derived from `wait_time`.
    ///
    /// | wait time | level |
    /// |-----------|-------|
    /// | 0–2       | 0     |
    /// | 3–4       | 1     |
    /// | 5–6       | 2     |
    /// | 7–8       | 3     |
    /// | 9+        | 4     |
    pub fn anger_level(&self) -> u8 {
        match self.wait_time {
            0..=2 => 0,
            3..=4 => 1,
            5..=6 => 2,
            7..=8 => 3,
            _ => 4,
        }
    }

    /// `true` if standing on (or stopped at) `floor` means this trip is done.
    #[inline]
    pub fn wants_off_at(&self, floor: Floor) -> bool {
        self.target == floor
    }
}
