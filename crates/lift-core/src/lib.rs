//! `lift-core` — foundational types for the `rust_lift` elevator simulation.
//!
//! This crate is a dependency of every other `lift-*` crate.  It has no
//! `lift-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`ids`]     | `Floor`, `ElevatorId`                                 |
//! | [`time`]    | `Round`                                               |
//! | [`rng`]     | `SimRng` (seedable, injected into random strategies)  |
//! | [`config`]  | `BuildingConfig`                                      |
//! | [`error`]   | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{BuildingConfig, validate_rounds};
pub use error::{CoreError, CoreResult};
pub use ids::{ElevatorId, Floor};
pub use rng::SimRng;
pub use time::Round;
