use lift_arrivals::ArrivalError;
use lift_core::{CoreError, ElevatorId, Floor};
use lift_dispatch::Direction;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation {0}")]
    Config(#[from] CoreError),

    #[error("arrival data error: {0}")]
    Arrival(#[from] ArrivalError),

    #[error("dispatch policy {policy:?} returned {got} moves for a fleet of {expected}")]
    MoveCountMismatch {
        policy:   &'static str,
        expected: usize,
        got:      usize,
    },

    #[error("dispatch policy {policy:?} moved {elevator} {direction} from {floor} (top floor {top})")]
    IllegalMove {
        policy:    &'static str,
        elevator:  ElevatorId,
        floor:     Floor,
        top:       Floor,
        direction: Direction,
    },
}

pub type SimResult<T> = Result<T, SimError>;
