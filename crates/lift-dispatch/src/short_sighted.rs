//! Greedy nearest-target strategy.

use lift_core::Floor;
use lift_entities::{Elevator, WaitingRegistry};

use crate::{Direction, DispatchPolicy};

/// Always heads for the closest thing to do.
///
/// - **Loaded**: the onboard target closest to the current floor.
/// - **Empty**: the closest floor with somebody waiting.
/// - **Empty, nobody waiting anywhere**: stay.
///
/// Distance ties go to the lower floor.  Boarding order is irrelevant.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShortSightedPolicy;

impl ShortSightedPolicy {
    fn choose(elevator: &Elevator, waiting: &WaitingRegistry) -> Direction {
        let here = elevator.current_floor;

        let target = if elevator.is_empty() {
            closest(here, waiting.occupied_floors())
        } else {
            closest(here, elevator.passengers().iter().map(|p| p.target))
        };

        target.map_or(Direction::Stay, |floor| Direction::toward(here, floor))
    }
}

/// Nearest of `candidates` to `here`, lower floor on ties.
fn closest(here: Floor, candidates: impl Iterator<Item = Floor>) -> Option<Floor> {
    candidates.min_by_key(|&floor| (floor.distance(here), floor))
}

impl DispatchPolicy for ShortSightedPolicy {
    fn move_elevators(
        &mut self,
        fleet:      &[Elevator],
        waiting:    &WaitingRegistry,
        _max_floor: Floor,
    ) -> Vec<Direction> {
        fleet
            .iter()
            .map(|elevator| Self::choose(elevator, waiting))
            .collect()
    }

    fn name(&self) -> &'static str {
        "short_sighted"
    }
}
