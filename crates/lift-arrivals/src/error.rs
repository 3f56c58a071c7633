use lift_core::{Floor, Round};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArrivalError {
    #[error("arrival source configuration error: {0}")]
    Config(String),

    #[error("arrival data parse error on line {line}: {message}")]
    Parse { line: u64, message: String },

    #[error("{round}: floor {floor} is outside 1..={floor_count}")]
    FloorOutOfRange {
        round:       Round,
        floor:       Floor,
        floor_count: u32,
    },

    #[error("{round}: person starting on {start} was listed under {key}")]
    StartMismatch {
        round: Round,
        key:   Floor,
        start: Floor,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ArrivalResult<T> = Result<T, ArrivalError>;
