//! The `ArrivalSource` trait — the simulation's only input of new people.

use std::collections::BTreeMap;

use lift_core::{Floor, Round};
use lift_entities::Person;

use crate::{ArrivalError, ArrivalResult};

/// New arrivals for one round, keyed by the floor they appear on.
///
/// Each list is in arrival order.  Floors absent from the map had no
/// arrivals; a `BTreeMap` keeps iteration ascending so merging is
/// deterministic.
pub type Arrivals = BTreeMap<Floor, Vec<Person>>;

/// Produces the people who appear in the building each round.
///
/// Implementations must list every person under the floor equal to their
/// `start`, and keep `start`/`target` inside `1..=floor_count`.  The
/// simulation checks both with [`validate_arrivals`] and aborts the run on a
/// violation.  `start == target` is tolerated.
pub trait ArrivalSource {
    /// Arrivals for `round`, or `None` if nobody arrives.
    fn generate(&mut self, round: Round) -> Option<Arrivals>;
}

impl<A: ArrivalSource + ?Sized> ArrivalSource for Box<A> {
    fn generate(&mut self, round: Round) -> Option<Arrivals> {
        (**self).generate(round)
    }
}

/// An [`ArrivalSource`] that never produces anybody.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoArrivals;

impl ArrivalSource for NoArrivals {
    fn generate(&mut self, _round: Round) -> Option<Arrivals> {
        None
    }
}

/// Check one round's arrivals against the building.
///
/// Reports the first offending floor key, start floor, or target floor.
pub fn validate_arrivals(round: Round, arrivals: &Arrivals, floor_count: u32) -> ArrivalResult<()> {
    let top = Floor(floor_count);
    let out_of_range = |floor: Floor| ArrivalError::FloorOutOfRange { round, floor, floor_count };

    for (&key, people) in arrivals {
        if !key.is_within(top) {
            return Err(out_of_range(key));
        }
        for person in people {
            if person.start != key {
                return Err(ArrivalError::StartMismatch { round, key, start: person.start });
            }
            if !person.target.is_within(top) {
                return Err(out_of_range(person.target));
            }
        }
    }
    Ok(())
}
