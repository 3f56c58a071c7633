//! Name-based policy selection.

use std::fmt;
use std::str::FromStr;

use lift_core::SimRng;

use crate::{DispatchError, DispatchPolicy, PushyPassengerPolicy, RandomPolicy, ShortSightedPolicy};

/// The built-in strategies, for choosing one from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PolicyKind {
    Random,
    #[cfg_attr(feature = "serde", serde(rename = "pushy"))]
    PushyPassenger,
    ShortSighted,
}

impl PolicyKind {
    pub const ALL: [PolicyKind; 3] = [
        PolicyKind::Random,
        PolicyKind::PushyPassenger,
        PolicyKind::ShortSighted,
    ];

    /// Instantiate the strategy.  `seed` is only used by [`RandomPolicy`].
    pub fn build(self, seed: u64) -> Box<dyn DispatchPolicy> {
        match self {
            PolicyKind::Random => Box::new(RandomPolicy::new(SimRng::new(seed))),
            PolicyKind::PushyPassenger => Box::new(PushyPassengerPolicy),
            PolicyKind::ShortSighted => Box::new(ShortSightedPolicy),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PolicyKind::Random => "random",
            PolicyKind::PushyPassenger => "pushy",
            PolicyKind::ShortSighted => "short_sighted",
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyKind {
    type Err = DispatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "random" => Ok(PolicyKind::Random),
            "pushy" | "pushy_passenger" => Ok(PolicyKind::PushyPassenger),
            "short_sighted" | "shortsighted" => Ok(PolicyKind::ShortSighted),
            other => Err(DispatchError::UnknownPolicy(other.to_string())),
        }
    }
}
