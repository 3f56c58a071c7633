//! Plain data row types written by output backends.

use lift_sim::{RoundSummary, Statistics};

/// One round's counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRow {
    pub round:       u64,
    pub arrived:     u64,
    pub disembarked: u64,
    pub boarded:     u64,
    pub waiting:     u64,
    pub aboard:      u64,
}

impl From<&RoundSummary> for RoundRow {
    fn from(s: &RoundSummary) -> Self {
        Self {
            round:       s.round.0,
            arrived:     s.arrived as u64,
            disembarked: s.disembarked as u64,
            boarded:     s.boarded as u64,
            waiting:     s.waiting as u64,
            aboard:      s.aboard as u64,
        }
    }
}

/// The final statistics of a run.  Wait columns are `-1` when nobody
/// completed a trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatisticsRow {
    pub rounds_run:       u64,
    pub total_people:     u64,
    pub people_completed: u64,
    pub min_wait:         i64,
    pub max_wait:         i64,
    pub avg_wait:         i64,
}

impl From<&Statistics> for StatisticsRow {
    fn from(s: &Statistics) -> Self {
        Self {
            rounds_run:       s.rounds_run,
            total_people:     s.total_people,
            people_completed: s.people_completed,
            min_wait:         s.min_wait,
            max_wait:         s.max_wait,
            avg_wait:         s.avg_wait,
        }
    }
}
