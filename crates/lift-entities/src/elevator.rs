//! A single elevator car.

use std::collections::VecDeque;

use lift_core::Floor;

use crate::Person;

/// One elevator in the fleet.
///
/// `passengers` is kept in boarding order, oldest first; dispatch strategies
/// rely on index 0 being the longest-riding passenger.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Elevator {
    pub current_floor: Floor,
    passengers:        Vec<Person>,
    capacity:          usize,
}

impl Elevator {
    /// An empty elevator parked on the ground floor.
    ///
    /// `capacity` is validated by `BuildingConfig::validate`; a zero-capacity
    /// elevator is representable but can never board anyone.
    pub fn new(capacity: usize) -> Self {
        Self {
            current_floor: Floor::GROUND,
            passengers:    Vec::with_capacity(capacity),
            capacity,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Onboard passengers, oldest boarding first.
    #[inline]
    pub fn passengers(&self) -> &[Person] {
        &self.passengers
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.passengers.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.passengers.len() >= self.capacity
    }

    #[inline]
    pub fn free_slots(&self) -> usize {
        self.capacity.saturating_sub(self.passengers.len())
    }

    /// Fraction of capacity in use, in `[0, 1]`.
    pub fn fullness(&self) -> f64 {
        if self.capacity == 0 {
            return 1.0;
        }
        self.passengers.len() as f64 / self.capacity as f64
    }

    /// Remove every passenger whose target is the current floor and return
    /// them in boarding order.
    ///
    /// The passenger list is rebuilt in a single partition pass, so adjacent
    /// arrivals are never skipped.
    pub fn disembark(&mut self) -> Vec<Person> {
        let floor = self.current_floor;
        let (arrived, staying): (Vec<Person>, Vec<Person>) = std::mem::take(&mut self.passengers)
            .into_iter()
            .partition(|p| p.wants_off_at(floor));
        self.passengers = staying;
        arrived
    }

    /// Move people from the front of `queue` into this elevator until it is
    /// full or the queue is empty.  Returns how many boarded.
    pub fn board_from(&mut self, queue: &mut VecDeque<Person>) -> usize {
        let n = self.free_slots().min(queue.len());
        self.passengers.extend(queue.drain(..n));
        n
    }

    /// Increment every passenger's wait time by one round.
    pub fn age_passengers(&mut self) {
        for p in &mut self.passengers {
            p.wait_time += 1;
        }
    }
}
