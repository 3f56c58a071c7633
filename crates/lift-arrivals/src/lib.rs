//! `lift-arrivals` — where people come from.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                      |
//! |--------------|---------------------------------------------------------------|
//! | [`source`]   | `ArrivalSource` trait, `Arrivals` map, `NoArrivals`, validation |
//! | [`random`]   | `RandomArrivals` — N people per round on distinct random floors |
//! | [`scripted`] | `ScriptedArrivals` — fixed `round → [(start, target)]` table   |
//! | [`loader`]   | `load_arrivals_csv`, `load_arrivals_reader`                   |
//! | [`error`]    | `ArrivalError`, `ArrivalResult<T>`                            |
//!
//! The simulation calls [`ArrivalSource::generate`] exactly once per round and
//! merges the result into its waiting registry.  Sources are expected to be
//! cheap and synchronous; file-backed data is read eagerly by the loader
//! before the run starts.

pub mod error;
pub mod loader;
pub mod random;
pub mod scripted;
pub mod source;


pub use error::{ArrivalError, ArrivalResult};
pub use loader::{load_arrivals_csv, load_arrivals_reader};
pub use random::RandomArrivals;
pub use scripted::ScriptedArrivals;
pub use source::{ArrivalSource, Arrivals, NoArrivals, validate_arrivals};
