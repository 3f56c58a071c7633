//! Pre-recorded arrivals.

use std::collections::BTreeMap;

use lift_core::{Floor, Round};
use lift_entities::Person;

use crate::{ArrivalSource, Arrivals};

/// A fixed `round → [(start, target)]` table.
///
/// `generate` hands out fresh copies each time it is called, so the same
/// script can drive any number of runs and every run sees identical people.
#[derive(Debug, Clone, Default)]
pub struct ScriptedArrivals {
    by_round: BTreeMap<Round, Vec<(Floor, Floor)>>,
}

impl ScriptedArrivals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`insert`][Self::insert].
    pub fn push(mut self, round: u64, start: u32, target: u32) -> Self {
        self.insert(Round(round), Floor(start), Floor(target));
        self
    }

    /// Schedule one person to appear on `start` at `round`.  People scheduled
    /// for the same round arrive in insertion order.
    pub fn insert(&mut self, round: Round, start: Floor, target: Floor) {
        self.by_round.entry(round).or_default().push((start, target));
    }

    /// Total people across all rounds.
    pub fn people(&self) -> usize {
        self.by_round.values().map(Vec::len).sum()
    }

    /// Rounds that have at least one arrival, ascending.
    pub fn rounds(&self) -> impl Iterator<Item = Round> + '_ {
        self.by_round.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.by_round.is_empty()
    }
}

impl ArrivalSource for ScriptedArrivals {
    fn generate(&mut self, round: Round) -> Option<Arrivals> {
        let trips = self.by_round.get(&round)?;
        let mut arrivals = Arrivals::new();
        for &(start, target) in trips {
            arrivals.entry(start).or_default().push(Person::new(start, target));
        }
        Some(arrivals)
    }
}
