//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `round_summaries.csv`
//! - `statistics.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, RoundRow, StatisticsRow};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    rounds:     Writer<File>,
    statistics: Writer<File>,
    finished:   bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut rounds = Writer::from_path(dir.join("round_summaries.csv"))?;
        rounds.write_record(["round", "arrived", "disembarked", "boarded", "waiting", "aboard"])?;

        let mut statistics = Writer::from_path(dir.join("statistics.csv"))?;
        statistics.write_record([
            "rounds_run",
            "total_people",
            "people_completed",
            "min_wait",
            "max_wait",
            "avg_wait",
        ])?;

        Ok(Self {
            rounds,
            statistics,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_round(&mut self, row: &RoundRow) -> OutputResult<()> {
        self.rounds.write_record(&[
            row.round.to_string(),
            row.arrived.to_string(),
            row.disembarked.to_string(),
            row.boarded.to_string(),
            row.waiting.to_string(),
            row.aboard.to_string(),
        ])?;
        Ok(())
    }

    fn write_statistics(&mut self, row: &StatisticsRow) -> OutputResult<()> {
        self.statistics.write_record(&[
            row.rounds_run.to_string(),
            row.total_people.to_string(),
            row.people_completed.to_string(),
            row.min_wait.to_string(),
            row.max_wait.to_string(),
            row.avg_wait.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.rounds.flush()?;
        self.statistics.flush()?;
        Ok(())
    }
}
