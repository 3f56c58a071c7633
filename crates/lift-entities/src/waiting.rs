//! Per-floor FIFO queues of people waiting for an elevator.

use std::collections::VecDeque;

use lift_core::Floor;

use crate::Person;

/// People standing on each floor, in arrival order.
///
/// Dense storage: one queue per floor `1..=floor_count`, indexed by
/// [`Floor::index`].  Floors outside that range have no queue; accessors
/// return `None` (or an empty slice view) for them instead of panicking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WaitingRegistry {
    queues: Vec<VecDeque<Person>>,
}

impl WaitingRegistry {
    /// An empty registry for floors `1..=floor_count`.
    pub fn new(floor_count: u32) -> Self {
        Self {
            queues: vec![VecDeque::new(); floor_count as usize],
        }
    }

    /// Number of floors covered.
    #[inline]
    pub fn floor_count(&self) -> u32 {
        self.queues.len() as u32
    }

    /// The queue for `floor`, front = earliest arrival.
    pub fn queue(&self, floor: Floor) -> Option<&VecDeque<Person>> {
        self.slot(floor).map(|i| &self.queues[i])
    }

    /// Mutable queue for `floor`.
    pub fn queue_mut(&mut self, floor: Floor) -> Option<&mut VecDeque<Person>> {
        let i = self.slot(floor)?;
        Some(&mut self.queues[i])
    }

    /// Number of people waiting on `floor` (0 for unknown floors).
    pub fn waiting_at(&self, floor: Floor) -> usize {
        self.queue(floor).map_or(0, VecDeque::len)
    }

    /// `true` if at least one person is waiting on `floor`.
    #[inline]
    pub fn has_waiting(&self, floor: Floor) -> bool {
        self.waiting_at(floor) > 0
    }

    /// `true` if anyone is waiting anywhere in the building.
    pub fn any_waiting(&self) -> bool {
        self.queues.iter().any(|q| !q.is_empty())
    }

    /// Total people waiting across all floors.
    pub fn total_waiting(&self) -> usize {
        self.queues.iter().map(VecDeque::len).sum()
    }

    /// Floors with at least one person waiting, ascending.
    pub fn occupied_floors(&self) -> impl Iterator<Item = Floor> + '_ {
        self.queues
            .iter()
            .enumerate()
            .filter(|(_, q)| !q.is_empty())
            .map(|(i, _)| Floor(i as u32 + 1))
    }

    /// Append `people` to the back of `floor`'s queue, preserving their order.
    ///
    /// Returns the people back if `floor` is outside the registry.
    pub fn enqueue(&mut self, floor: Floor, people: Vec<Person>) -> Result<(), Vec<Person>> {
        match self.queue_mut(floor) {
            Some(q) => {
                q.extend(people);
                Ok(())
            }
            None => Err(people),
        }
    }

    /// Increment the wait time of everybody waiting on every floor.
    pub fn age_all(&mut self) {
        for person in self.queues.iter_mut().flatten() {
            person.wait_time += 1;
        }
    }

    /// Drop everybody, keeping the floor layout.
    pub fn clear(&mut self) {
        for q in &mut self.queues {
            q.clear();
        }
    }

    fn slot(&self, floor: Floor) -> Option<usize> {
        if floor.0 >= 1 && floor.0 <= self.floor_count() {
            Some(floor.index())
        } else {
            None
        }
    }
}
