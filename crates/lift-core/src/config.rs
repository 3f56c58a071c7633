//! Building configuration.

use crate::{CoreError, CoreResult, Floor};

/// Static shape of the simulated building.
///
/// Applications may deserialize this (with the `serde` feature); the
/// simulation itself only validates it.  The number of rounds to simulate is
/// not part of the building and is passed to `Sim::run` instead.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuildingConfig {
    /// Number of floors, numbered `1..=floor_count`.  At least 2.
    pub floor_count: u32,

    /// Number of elevators in the fleet.  At least 1.
    pub elevator_count: usize,

    /// Maximum passengers per elevator.  At least 1.
    pub elevator_capacity: usize,
}

impl BuildingConfig {
    /// Check every field's lower bound, reporting the first violation.
    pub fn validate(&self) -> CoreResult<()> {
        if self.floor_count < 2 {
            return Err(CoreError::Config(format!(
                "floor_count must be at least 2, got {}",
                self.floor_count
            )));
        }
        if self.elevator_count < 1 {
            return Err(CoreError::Config("elevator_count must be at least 1, got 0".into()));
        }
        if self.elevator_capacity < 1 {
            return Err(CoreError::Config("elevator_capacity must be at least 1, got 0".into()));
        }
        Ok(())
    }

    /// The highest floor number.
    #[inline]
    pub fn top_floor(&self) -> Floor {
        Floor(self.floor_count)
    }
}

/// Validate a requested run length.  Separate from [`BuildingConfig`] because
/// rounds are chosen per `run` call.
pub fn validate_rounds(rounds: u64) -> CoreResult<()> {
    if rounds < 1 {
        return Err(CoreError::Config("round count must be at least 1, got 0".into()));
    }
    Ok(())
}
