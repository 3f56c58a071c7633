//! Unit tests for lift-entities.

use lift_core::Floor;

use crate::Person;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn person(start: u32, target: u32) -> Person {
    Person::new(Floor(start), Floor(target))
}

// ── Person ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod person_tests {
    use super::*;

    #[test]
    fn new_person_has_not_waited() {
        let p = person(1, 4);
        assert_eq!(p.wait_time, 0);
        assert_eq!(p.anger_level(), 0);
    }

    #[test]
    fn anger_level_bands() {
        let levels: Vec<u8> = (0..=10)
            .map(|w| Person { wait_time: w, ..person(1, 2) }.anger_level())
            .collect();
        assert_eq!(levels, vec![0, 0, 0, 1, 1, 2, 2, 3, 3, 4, 4]);
    }

    #[test]
    fn wants_off_only_at_target() {
        let p = person(2, 5);
        assert!(p.wants_off_at(Floor(5)));
        assert!(!p.wants_off_at(Floor(2)));
    }
}

// ── Elevator ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod elevator_tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::Elevator;

    #[test]
    fn starts_empty_on_ground_floor() {
        let e = Elevator::new(3);
        assert_eq!(e.current_floor, Floor::GROUND);
        assert!(e.is_empty());
        assert_eq!(e.free_slots(), 3);
        assert_eq!(e.fullness(), 0.0);
    }

    #[test]
    fn board_stops_at_capacity() {
        let mut e = Elevator::new(2);
        let mut queue: VecDeque<Person> = [person(1, 3), person(1, 4), person(1, 5)].into();
        assert_eq!(e.board_from(&mut queue), 2);
        assert!(e.is_full());
        assert_eq!(e.fullness(), 1.0);
        // Remaining person keeps their place at the front.
        assert_eq!(queue.len(), 1);
        assert_eq!(queue[0].target, Floor(5));
    }

    #[test]
    fn board_preserves_fifo_order() {
        let mut e = Elevator::new(5);
        let mut queue: VecDeque<Person> = [person(1, 6), person(1, 2), person(1, 4)].into();
        e.board_from(&mut queue);
        let targets: Vec<u32> = e.passengers().iter().map(|p| p.target.0).collect();
        assert_eq!(targets, vec![6, 2, 4]);
    }

    #[test]
    fn board_from_empty_queue_is_noop() {
        let mut e = Elevator::new(2);
        let mut queue = VecDeque::new();
        assert_eq!(e.board_from(&mut queue), 0);
        assert!(e.is_empty());
    }

    #[test]
    fn disembark_removes_all_adjacent_matches() {
        // Two adjacent riders for floor 3 — the classic skipped-element case.
        let mut e = Elevator::new(4);
        let mut queue: VecDeque<Person> =
            [person(1, 3), person(1, 3), person(1, 5), person(1, 3)].into();
        e.board_from(&mut queue);
        e.current_floor = Floor(3);

        let off = e.disembark();
        assert_eq!(off.len(), 3);
        assert!(off.iter().all(|p| p.target == Floor(3)));
        assert_eq!(e.passengers().len(), 1);
        assert_eq!(e.passengers()[0].target, Floor(5));
    }

    #[test]
    fn disembark_keeps_boarding_order_of_remaining() {
        let mut e = Elevator::new(4);
        let mut queue: VecDeque<Person> =
            [person(1, 6), person(1, 2), person(1, 5), person(1, 2)].into();
        e.board_from(&mut queue);
        e.current_floor = Floor(2);
        e.disembark();
        let targets: Vec<u32> = e.passengers().iter().map(|p| p.target.0).collect();
        assert_eq!(targets, vec![6, 5]);
    }

    #[test]
    fn age_passengers_increments_everyone() {
        let mut e = Elevator::new(2);
        let mut queue: VecDeque<Person> = [person(1, 3), person(1, 4)].into();
        e.board_from(&mut queue);
        e.age_passengers();
        e.age_passengers();
        assert!(e.passengers().iter().all(|p| p.wait_time == 2));
    }
}

// ── WaitingRegistry ───────────────────────────────────────────────────────────

#[cfg(test)]
mod waiting_tests {
    use super::*;
    use crate::WaitingRegistry;

    #[test]
    fn new_registry_is_empty() {
        let w = WaitingRegistry::new(5);
        assert_eq!(w.floor_count(), 5);
        assert!(!w.any_waiting());
        assert_eq!(w.total_waiting(), 0);
        assert_eq!(w.occupied_floors().count(), 0);
    }

    #[test]
    fn enqueue_appends_in_order() {
        let mut w = WaitingRegistry::new(4);
        w.enqueue(Floor(2), vec![person(2, 1), person(2, 4)]).unwrap();
        w.enqueue(Floor(2), vec![person(2, 3)]).unwrap();
        let targets: Vec<u32> = w.queue(Floor(2)).unwrap().iter().map(|p| p.target.0).collect();
        assert_eq!(targets, vec![1, 4, 3]);
        assert_eq!(w.waiting_at(Floor(2)), 3);
    }

    #[test]
    fn enqueue_out_of_range_hands_people_back() {
        let mut w = WaitingRegistry::new(3);
        let rejected = w.enqueue(Floor(4), vec![person(4, 1)]).unwrap_err();
        assert_eq!(rejected.len(), 1);
        assert!(w.enqueue(Floor(0), vec![]).is_err());
        assert!(!w.any_waiting());
    }

    #[test]
    fn unknown_floors_read_as_empty() {
        let w = WaitingRegistry::new(3);
        assert!(w.queue(Floor(0)).is_none());
        assert!(w.queue(Floor(9)).is_none());
        assert_eq!(w.waiting_at(Floor(9)), 0);
        assert!(!w.has_waiting(Floor(0)));
    }

    #[test]
    fn occupied_floors_ascending() {
        let mut w = WaitingRegistry::new(6);
        w.enqueue(Floor(5), vec![person(5, 1)]).unwrap();
        w.enqueue(Floor(2), vec![person(2, 1)]).unwrap();
        let floors: Vec<Floor> = w.occupied_floors().collect();
        assert_eq!(floors, vec![Floor(2), Floor(5)]);
    }

    #[test]
    fn age_all_and_clear() {
        let mut w = WaitingRegistry::new(3);
        w.enqueue(Floor(1), vec![person(1, 3)]).unwrap();
        w.enqueue(Floor(3), vec![person(3, 1)]).unwrap();
        w.age_all();
        assert_eq!(w.queue(Floor(1)).unwrap()[0].wait_time, 1);
        assert_eq!(w.queue(Floor(3)).unwrap()[0].wait_time, 1);
        w.clear();
        assert_eq!(w.total_waiting(), 0);
        assert_eq!(w.floor_count(), 3);
    }
}
