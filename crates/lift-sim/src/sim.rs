//! The `Sim` struct and its round loop.

use lift_arrivals::{ArrivalError, ArrivalSource, validate_arrivals};
use lift_core::{BuildingConfig, ElevatorId, Floor, Round, validate_rounds};
use lift_dispatch::{Direction, DispatchPolicy};
use lift_entities::{Elevator, WaitingRegistry};
use tracing::{debug, info, trace, warn};

use crate::{NoopObserver, RoundSummary, SimError, SimObserver, SimResult, Statistics};

/// The main simulation runner.
///
/// `Sim<A, P>` owns the fleet and the waiting registry and drives the
/// five-stage round (arrival, disembark, board, move, age).  The dispatch
/// policy only ever sees them read-only; every mutation happens here.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<A: ArrivalSource, P: DispatchPolicy> {
    /// Building shape (floors, elevators, capacity).
    pub config: BuildingConfig,

    /// Source of new people.  Called exactly once per round.
    pub arrivals: A,

    /// The dispatch strategy.  Called exactly once per round.
    pub policy: P,

    pub(crate) fleet:           Vec<Elevator>,
    pub(crate) waiting:         WaitingRegistry,
    pub(crate) current_round:   Round,
    pub(crate) total_people:    u64,
    /// Final wait time of every person who reached their target.
    pub(crate) completed_waits: Vec<u32>,
}

impl<A: ArrivalSource, P: DispatchPolicy> Sim<A, P> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run `rounds` rounds from the initial state and return the statistics.
    ///
    /// Any state left over from earlier calls is discarded first, so each run
    /// starts with empty elevators on floor 1 and nobody waiting.
    pub fn run(&mut self, rounds: u64) -> SimResult<Statistics> {
        self.run_with(rounds, &mut NoopObserver)
    }

    /// Like [`run`][Self::run], reporting to `observer` at round boundaries.
    pub fn run_with<O: SimObserver>(&mut self, rounds: u64, observer: &mut O) -> SimResult<Statistics> {
        validate_rounds(rounds)?;
        self.reset();

        info!(
            rounds,
            floors    = self.config.floor_count,
            elevators = self.config.elevator_count,
            capacity  = self.config.elevator_capacity,
            policy    = self.policy.name(),
            "simulation starting"
        );

        for _ in 0..rounds {
            self.step(observer)?;
        }

        let stats = self.statistics();
        observer.on_sim_end(&stats);
        info!(
            rounds_run       = stats.rounds_run,
            total_people     = stats.total_people,
            people_completed = stats.people_completed,
            min_wait         = stats.min_wait,
            max_wait         = stats.max_wait,
            avg_wait         = stats.avg_wait,
            "simulation finished"
        );
        Ok(stats)
    }

    /// Run exactly one round from the current position.
    ///
    /// Useful for tests and incremental stepping.  Does not reset.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<RoundSummary> {
        let round = self.current_round;
        observer.on_round_start(round);

        let summary = self.process_round(round)?;

        observer.on_round_end(&summary);
        debug!(
            round       = round.0,
            arrived     = summary.arrived,
            disembarked = summary.disembarked,
            boarded     = summary.boarded,
            waiting     = summary.waiting,
            aboard      = summary.aboard,
            "round complete"
        );

        self.current_round = round.next();
        Ok(summary)
    }

    /// Statistics for the rounds processed so far.
    pub fn statistics(&self) -> Statistics {
        Statistics::from_samples(self.current_round.0, self.total_people, &self.completed_waits)
    }

    /// Return to the initial state: empty elevators on floor 1, empty queues,
    /// counters at zero.  Collaborators (arrival source, policy) keep their
    /// own state.
    pub fn reset(&mut self) {
        for elevator in &mut self.fleet {
            *elevator = Elevator::new(self.config.elevator_capacity);
        }
        self.waiting.clear();
        self.current_round = Round::ZERO;
        self.total_people = 0;
        self.completed_waits.clear();
    }

    // ── Read-only views ───────────────────────────────────────────────────

    /// The fleet, in fixed fleet order.
    pub fn fleet(&self) -> &[Elevator] {
        &self.fleet
    }

    pub fn waiting(&self) -> &WaitingRegistry {
        &self.waiting
    }

    /// The next round to be processed (equals rounds completed so far).
    pub fn current_round(&self) -> Round {
        self.current_round
    }

    pub fn total_people(&self) -> u64 {
        self.total_people
    }

    pub fn people_completed(&self) -> u64 {
        self.completed_waits.len() as u64
    }

    pub fn people_aboard(&self) -> usize {
        self.fleet.iter().map(|e| e.passengers().len()).sum()
    }

    /// Wait times of completed trips, in completion order.
    pub fn completed_waits(&self) -> &[u32] {
        &self.completed_waits
    }

    // ── Core round processing ─────────────────────────────────────────────

    fn process_round(&mut self, round: Round) -> SimResult<RoundSummary> {
        let arrived = self.arrive(round)?;
        let disembarked = self.disembark();
        let boarded = self.board();
        self.move_fleet(round)?;
        self.age();

        Ok(RoundSummary {
            round,
            arrived,
            disembarked,
            boarded,
            waiting: self.waiting.total_waiting(),
            aboard:  self.people_aboard(),
        })
    }

    /// ① Merge this round's arrivals into the floor queues.
    fn arrive(&mut self, round: Round) -> SimResult<usize> {
        let Some(arrivals) = self.arrivals.generate(round) else {
            return Ok(0);
        };
        let floor_count = self.config.floor_count;
        validate_arrivals(round, &arrivals, floor_count)?;

        let mut arrived = 0;
        for (floor, people) in arrivals {
            for person in people.iter().filter(|p| p.start == p.target) {
                warn!(round = round.0, floor = person.start.0, "person arrived on their own target floor");
            }
            arrived += people.len();
            self.waiting
                .enqueue(floor, people)
                .map_err(|_| ArrivalError::FloorOutOfRange { round, floor, floor_count })?;
        }

        self.total_people += arrived as u64;
        Ok(arrived)
    }

    /// ② Everyone whose target is their elevator's floor gets off.
    fn disembark(&mut self) -> usize {
        let mut disembarked = 0;
        for elevator in &mut self.fleet {
            let off = elevator.disembark();
            disembarked += off.len();
            self.completed_waits.extend(off.iter().map(|p| p.wait_time));
        }
        disembarked
    }

    /// ③ Fill elevators from their floor's queue: floors ascending, fleet
    /// order within a floor, each elevator to capacity before the next.
    fn board(&mut self) -> usize {
        let mut boarded = 0;
        for floor in Floor::range_to(self.config.top_floor()) {
            let Some(queue) = self.waiting.queue_mut(floor) else {
                continue;
            };
            for elevator in self.fleet.iter_mut().filter(|e| e.current_floor == floor) {
                if queue.is_empty() {
                    break;
                }
                boarded += elevator.board_from(queue);
                debug_assert!(elevator.passengers().len() <= elevator.capacity());
            }
        }
        boarded
    }

    /// ④ Ask the policy for one move per elevator, check every move, then
    /// apply them all.
    fn move_fleet(&mut self, round: Round) -> SimResult<()> {
        let top = self.config.top_floor();
        let moves = self.policy.move_elevators(&self.fleet, &self.waiting, top);
        trace!(round = round.0, policy = self.policy.name(), ?moves, "dispatch");

        if moves.len() != self.fleet.len() {
            return Err(SimError::MoveCountMismatch {
                policy:   self.policy.name(),
                expected: self.fleet.len(),
                got:      moves.len(),
            });
        }

        for (i, (elevator, &direction)) in self.fleet.iter().zip(&moves).enumerate() {
            if !direction.is_legal_at(elevator.current_floor, top) {
                return Err(illegal_move(self.policy.name(), i, elevator.current_floor, top, direction));
            }
        }

        for (elevator, direction) in self.fleet.iter_mut().zip(moves) {
            elevator.current_floor = direction.apply(elevator.current_floor);
        }
        Ok(())
    }

    /// ⑤ One more round of waiting for everyone not yet delivered.
    fn age(&mut self) {
        self.waiting.age_all();
        for elevator in &mut self.fleet {
            elevator.age_passengers();
        }
    }
}

fn illegal_move(
    policy:    &'static str,
    index:     usize,
    floor:     Floor,
    top:       Floor,
    direction: Direction,
) -> SimError {
    SimError::IllegalMove {
        policy,
        elevator: ElevatorId(index as u32),
        floor,
        top,
        direction,
    }
}
