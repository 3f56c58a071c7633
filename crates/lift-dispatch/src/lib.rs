//! `lift-dispatch` — deciding where elevators go.
//!
//! # Crate layout
//!
//! | Module            | Contents                                                   |
//! |-------------------|------------------------------------------------------------|
//! | [`direction`]     | `Direction` (`Up`, `Down`, `Stay`) and boundary helpers    |
//! | [`policy`]        | `DispatchPolicy` trait                                     |
//! | [`random`]        | `RandomPolicy` — uniform over legal moves, seeded          |
//! | [`pushy`]         | `PushyPassengerPolicy` — the oldest rider decides          |
//! | [`short_sighted`] | `ShortSightedPolicy` — greedy nearest target               |
//! | [`kind`]          | `PolicyKind` — name-based selection for configuration      |
//! | [`error`]         | `DispatchError`                                            |
//!
//! # Contract
//!
//! A policy sees the whole fleet and the waiting registry read-only and
//! returns one [`Direction`] per elevator, in fleet order.  It must never
//! return `Down` for an elevator on floor 1 or `Up` for one on the top floor.
//! The simulation applies the moves and treats any violation as a bug in the
//! policy: the run aborts rather than clamping the move.

pub mod direction;
pub mod error;
pub mod kind;
pub mod policy;
pub mod pushy;
pub mod random;
pub mod short_sighted;


pub use direction::Direction;
pub use error::DispatchError;
pub use kind::PolicyKind;
pub use policy::DispatchPolicy;
pub use pushy::PushyPassengerPolicy;
pub use random::RandomPolicy;
pub use short_sighted::ShortSightedPolicy;
