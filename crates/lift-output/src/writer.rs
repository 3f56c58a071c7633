//! The `OutputWriter` trait implemented by backend writers.

use crate::{OutputResult, RoundRow, StatisticsRow};

/// Trait implemented by output backends.
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with
/// [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write one round summary row.
    fn write_round(&mut self, row: &RoundRow) -> OutputResult<()>;

    /// Write the end-of-run statistics row.
    fn write_statistics(&mut self, row: &StatisticsRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
