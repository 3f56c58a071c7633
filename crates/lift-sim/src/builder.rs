//! Builder for constructing a [`Sim`].

use lift_arrivals::ArrivalSource;
use lift_core::{BuildingConfig, Round};
use lift_dispatch::DispatchPolicy;
use lift_entities::{Elevator, WaitingRegistry};

use crate::{Sim, SimResult};

/// Builder for [`Sim<A, P>`].
///
/// # Required inputs
///
/// - [`BuildingConfig`] — floors, elevators, capacity
/// - `A: ArrivalSource` — e.g. [`lift_arrivals::ScriptedArrivals`]
/// - `P: DispatchPolicy` — e.g. [`lift_dispatch::ShortSightedPolicy`], or a
///   `Box<dyn DispatchPolicy>` from [`lift_dispatch::PolicyKind::build`]
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, RandomArrivals::seeded(6, Some(2), 42)?, ShortSightedPolicy)
///     .build()?;
/// let stats = sim.run(100)?;
/// ```
pub struct SimBuilder<A: ArrivalSource, P: DispatchPolicy> {
    config:   BuildingConfig,
    arrivals: A,
    policy:   P,
}

impl<A: ArrivalSource, P: DispatchPolicy> SimBuilder<A, P> {
    pub fn new(config: BuildingConfig, arrivals: A, policy: P) -> Self {
        Self { config, arrivals, policy }
    }

    /// Validate the configuration and return a [`Sim`] in its initial state:
    /// every elevator empty on floor 1, every floor queue empty.
    pub fn build(self) -> SimResult<Sim<A, P>> {
        self.config.validate()?;

        let fleet = (0..self.config.elevator_count)
            .map(|_| Elevator::new(self.config.elevator_capacity))
            .collect();
        let waiting = WaitingRegistry::new(self.config.floor_count);

        Ok(Sim {
            config:          self.config,
            arrivals:        self.arrivals,
            policy:          self.policy,
            fleet,
            waiting,
            current_round:   Round::ZERO,
            total_people:    0,
            completed_waits: Vec::new(),
        })
    }
}
