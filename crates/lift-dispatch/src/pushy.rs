//! First-come, first-served per elevator.

use lift_core::Floor;
use lift_entities::{Elevator, WaitingRegistry};

use crate::{Direction, DispatchPolicy};

/// The longest-riding passenger decides where each elevator goes.
///
/// - **Loaded**: step toward the target of `passengers[0]`.
/// - **Empty**: scan floors upward from 1 and step toward the *first* floor
///   (other than the current one) with somebody waiting.  This is the
///   lowest such floor, not the nearest.
/// - **Empty, nobody waiting**: stay.
#[derive(Debug, Default, Clone, Copy)]
pub struct PushyPassengerPolicy;

impl PushyPassengerPolicy {
    fn choose(elevator: &Elevator, waiting: &WaitingRegistry, max_floor: Floor) -> Direction {
        let here = elevator.current_floor;

        if let Some(oldest) = elevator.passengers().first() {
            // Equal only for a rider whose start was their target.
            return Direction::toward(here, oldest.target);
        }

        Floor::range_to(max_floor)
            .find(|&floor| floor != here && waiting.has_waiting(floor))
            .map_or(Direction::Stay, |floor| Direction::toward(here, floor))
    }
}

impl DispatchPolicy for PushyPassengerPolicy {
    fn move_elevators(
        &mut self,
        fleet:     &[Elevator],
        waiting:   &WaitingRegistry,
        max_floor: Floor,
    ) -> Vec<Direction> {
        fleet
            .iter()
            .map(|elevator| Self::choose(elevator, waiting, max_floor))
            .collect()
    }

    fn name(&self) -> &'static str {
        "pushy"
    }
}
