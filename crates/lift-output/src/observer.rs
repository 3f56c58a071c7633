//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use lift_sim::{RoundSummary, SimObserver, Statistics};
use tracing::warn;

use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult, RoundRow, StatisticsRow};

/// A [`SimObserver`] that writes round summaries and the final statistics to
/// any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run_with()` returns, check for errors
/// with [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                warn!(error = %e, "simulation output write failed");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_round_end(&mut self, summary: &RoundSummary) {
        let result = self.writer.write_round(&RoundRow::from(summary));
        self.store_err(result);
    }

    fn on_sim_end(&mut self, stats: &Statistics) {
        let result = self.writer.write_statistics(&StatisticsRow::from(stats));
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
