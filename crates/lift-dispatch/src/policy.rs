//! The `DispatchPolicy` trait — the main extension point for user code.

use lift_core::Floor;
use lift_entities::{Elevator, WaitingRegistry};

use crate::Direction;

/// Pluggable elevator dispatch.
///
/// Called once per round, after boarding.  Implementations receive the fleet
/// and the waiting registry read-only and return exactly one [`Direction`]
/// per elevator, in fleet order.  State that must survive between rounds
/// (such as an RNG) lives in the policy itself; references to entities must
/// not be kept past the call.
///
/// # Example
///
/// ```rust
/// use lift_core::Floor;
/// use lift_dispatch::{Direction, DispatchPolicy};
/// use lift_entities::{Elevator, WaitingRegistry};
///
/// /// Parks every elevator in the lobby.
/// struct ReturnToLobby;
///
/// impl DispatchPolicy for ReturnToLobby {
///     fn move_elevators(
///         &mut self,
///         fleet:      &[Elevator],
///         _waiting:   &WaitingRegistry,
///         _max_floor: Floor,
///     ) -> Vec<Direction> {
///         fleet
///             .iter()
///             .map(|e| Direction::toward(e.current_floor, Floor::GROUND))
///             .collect()
///     }
/// }
/// ```
pub trait DispatchPolicy {
    /// Decide this round's move for every elevator.
    ///
    /// Must return `fleet.len()` directions, none of which may be `Down` on
    /// floor 1 or `Up` on `max_floor`.
    fn move_elevators(
        &mut self,
        fleet:     &[Elevator],
        waiting:   &WaitingRegistry,
        max_floor: Floor,
    ) -> Vec<Direction>;

    /// Short human-readable name used in logs.
    fn name(&self) -> &'static str {
        "custom"
    }
}

impl<P: DispatchPolicy + ?Sized> DispatchPolicy for Box<P> {
    fn move_elevators(
        &mut self,
        fleet:     &[Elevator],
        waiting:   &WaitingRegistry,
        max_floor: Floor,
    ) -> Vec<Direction> {
        (**self).move_elevators(fleet, waiting, max_floor)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
