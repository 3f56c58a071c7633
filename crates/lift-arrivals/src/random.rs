//! Uniform random arrivals.

use lift_core::{Floor, Round, SimRng};
use lift_entities::Person;

use crate::{ArrivalError, ArrivalResult, ArrivalSource, Arrivals};

/// Generates a fixed number of people every round, each with a start and a
/// target drawn as two *distinct* floors uniformly at random.
///
/// With `people_per_round = None` the source generates nobody.
pub struct RandomArrivals {
    floor_count:      u32,
    people_per_round: Option<usize>,
    rng:              SimRng,
}

impl RandomArrivals {
    /// Fails if the building has fewer than two floors, since no distinct
    /// start/target pair exists.
    pub fn new(floor_count: u32, people_per_round: Option<usize>, rng: SimRng) -> ArrivalResult<Self> {
        if floor_count < 2 {
            return Err(ArrivalError::Config(format!(
                "random arrivals need at least 2 floors, got {floor_count}"
            )));
        }
        Ok(Self { floor_count, people_per_round, rng })
    }

    /// Convenience constructor seeding a fresh [`SimRng`].
    pub fn seeded(floor_count: u32, people_per_round: Option<usize>, seed: u64) -> ArrivalResult<Self> {
        Self::new(floor_count, people_per_round, SimRng::new(seed))
    }
}

impl ArrivalSource for RandomArrivals {
    fn generate(&mut self, _round: Round) -> Option<Arrivals> {
        let count = self.people_per_round?;

        let mut arrivals = Arrivals::new();
        for _ in 0..count {
            let pair = rand::seq::index::sample(self.rng.inner(), self.floor_count as usize, 2);
            let start = Floor(pair.index(0) as u32 + 1);
            let target = Floor(pair.index(1) as u32 + 1);
            arrivals.entry(start).or_default().push(Person::new(start, target));
        }
        Some(arrivals)
    }
}
