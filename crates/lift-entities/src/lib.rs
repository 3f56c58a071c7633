//! `lift-entities` — the simulation's plain data: people, elevators, and the
//! per-floor waiting registry.
//!
//! # Crate layout
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`person`]   | `Person` (start, target, wait time, anger level)       |
//! | [`elevator`] | `Elevator` (floor, passengers in boarding order, capacity) |
//! | [`waiting`]  | `WaitingRegistry` (per-floor FIFO queues)              |
//!
//! Nothing here knows about rounds or dispatch.  Mutation helpers keep the
//! representation invariants local: an elevator never exceeds its capacity
//! through [`Elevator::board_from`], and [`Elevator::disembark`] removes every
//! arrived passenger in one pass.

pub mod elevator;
pub mod person;
pub mod waiting;

#[cfg(test)]
mod tests;

pub use elevator::Elevator;
pub use person::Person;
pub use waiting::WaitingRegistry;
