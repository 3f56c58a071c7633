//! Per-round summaries and end-of-run statistics.

use lift_core::Round;

/// Counters for one completed round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundSummary {
    pub round:       Round,
    /// People generated this round.
    pub arrived:     usize,
    /// People who reached their target this round.
    pub disembarked: usize,
    pub boarded:     usize,
    /// People on floors at the end of the round.
    pub waiting:     usize,
    /// People inside elevators at the end of the round.
    pub aboard:      usize,
}

/// Aggregate results of a run.
///
/// The wait fields hold [`Statistics::UNDEFINED_WAIT`] when nobody completed
/// a trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Statistics {
    pub rounds_run:       u64,
    pub total_people:     u64,
    pub people_completed: u64,
    pub min_wait:         i64,
    pub max_wait:         i64,
    /// Integer average, truncated toward zero.
    pub avg_wait:         i64,
}

impl Statistics {
    /// Sentinel for min/max/avg when `people_completed == 0`.
    pub const UNDEFINED_WAIT: i64 = -1;

    /// Aggregate the wait times of every completed trip.
    pub fn from_samples(rounds_run: u64, total_people: u64, completed_waits: &[u32]) -> Self {
        let people_completed = completed_waits.len() as u64;

        let (min_wait, max_wait, avg_wait) = match (
            completed_waits.iter().min(),
            completed_waits.iter().max(),
        ) {
            (Some(&min), Some(&max)) => {
                let sum: u64 = completed_waits.iter().map(|&w| w as u64).sum();
                (min as i64, max as i64, (sum / people_completed) as i64)
            }
            _ => (Self::UNDEFINED_WAIT, Self::UNDEFINED_WAIT, Self::UNDEFINED_WAIT),
        };

        Self {
            rounds_run,
            total_people,
            people_completed,
            min_wait,
            max_wait,
            avg_wait,
        }
    }

    /// `true` if at least one person reached their target.
    #[inline]
    pub fn has_completions(&self) -> bool {
        self.people_completed > 0
    }
}
