//! `lift-sim` — round loop orchestrator for the rust_lift elevator simulation.
//!
//! # Five-stage round
//!
//! ```text
//! for round in 0..rounds:
//!   ① Arrival    — ArrivalSource::generate(round); validate; append to the
//!                  per-floor queues in arrival order.
//!   ② Disembark  — every passenger whose target is the elevator's floor
//!                  leaves; their wait time becomes a completed sample.
//!   ③ Board      — floors ascending, elevators in fleet order; each elevator
//!                  fills to capacity from the front of its floor's queue.
//!   ④ Move       — DispatchPolicy::move_elevators once; validate; apply.
//!   ⑤ Age        — +1 wait for everyone still waiting or riding.
//! ```
//!
//! Later stages observe the effects of earlier ones within the same round.
//! The run is single-threaded; the stage order is the only synchronisation.
//!
//! # Quick-start
//!
//! ```rust
//! use lift_arrivals::ScriptedArrivals;
//! use lift_core::BuildingConfig;
//! use lift_dispatch::PushyPassengerPolicy;
//! use lift_sim::SimBuilder;
//!
//! let config = BuildingConfig { floor_count: 6, elevator_count: 1, elevator_capacity: 3 };
//! let arrivals = ScriptedArrivals::new().push(0, 1, 6);
//! let mut sim = SimBuilder::new(config, arrivals, PushyPassengerPolicy).build()?;
//!
//! let stats = sim.run(6)?;
//! assert_eq!(stats.people_completed, 1);
//! assert_eq!(stats.max_wait, 5);
//! # Ok::<(), lift_sim::SimError>(())
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod stats;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
pub use stats::{RoundSummary, Statistics};
