//! Baseline strategy: move at random.

use lift_core::{Floor, SimRng};
use lift_entities::{Elevator, WaitingRegistry};

use crate::{Direction, DispatchPolicy};

/// Picks uniformly among the legal moves for each elevator: three choices in
/// the interior, two at either end.  Ignores passengers and waiting people.
pub struct RandomPolicy {
    rng: SimRng,
}

impl RandomPolicy {
    pub fn new(rng: SimRng) -> Self {
        Self { rng }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(SimRng::new(seed))
    }
}

impl DispatchPolicy for RandomPolicy {
    fn move_elevators(
        &mut self,
        fleet:     &[Elevator],
        _waiting:  &WaitingRegistry,
        max_floor: Floor,
    ) -> Vec<Direction> {
        fleet
            .iter()
            .map(|elevator| {
                let options = Direction::legal_at(elevator.current_floor, max_floor);
                self.rng.choose(options).copied().unwrap_or(Direction::Stay)
            })
            .collect()
    }

    fn name(&self) -> &'static str {
        "random"
    }
}
