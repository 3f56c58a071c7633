//! Simulation observer trait for progress reporting and data collection.

use lift_core::Round;

use crate::{RoundSummary, Statistics};

/// Callbacks invoked by [`Sim::run_with`][crate::Sim::run_with] at round
/// boundaries.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SimObserver for ProgressPrinter {
///     fn on_round_end(&mut self, summary: &RoundSummary) {
///         println!("{}: {} waiting, {} aboard", summary.round, summary.waiting, summary.aboard);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each round, before arrivals.
    fn on_round_start(&mut self, _round: Round) {}

    /// Called after the age stage with the round's counters.
    fn on_round_end(&mut self, _summary: &RoundSummary) {}

    /// Called once after the final round with the run's statistics.
    fn on_sim_end(&mut self, _stats: &Statistics) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
