//! Integration tests for lift-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{RoundRow, StatisticsRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn round_row(round: u64) -> RoundRow {
        RoundRow { round, arrived: 2, disembarked: 1, boarded: 1, waiting: 3, aboard: round }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("round_summaries.csv").exists());
        assert!(dir.path().join("statistics.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("round_summaries.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["round", "arrived", "disembarked", "boarded", "waiting", "aboard"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("statistics.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers2,
            ["rounds_run", "total_people", "people_completed", "min_wait", "max_wait", "avg_wait"]
        );
    }

    #[test]
    fn round_rows_written_in_order() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        for r in 0..3 {
            w.write_round(&round_row(r)).unwrap();
        }
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("round_summaries.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][0], "0");
        assert_eq!(&rows[2][0], "2");
        assert_eq!(&rows[2][5], "2"); // aboard
        assert_eq!(&rows[1][4], "3"); // waiting
    }

    #[test]
    fn statistics_sentinel_written_as_minus_one() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_statistics(&StatisticsRow {
            rounds_run:       10,
            total_people:     0,
            people_completed: 0,
            min_wait:         -1,
            max_wait:         -1,
            avg_wait:         -1,
        })
        .unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("statistics.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "10");
        assert_eq!(&rows[0][3], "-1");
        assert_eq!(&rows[0][5], "-1");
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tmp();
        assert!(CsvWriter::new(&dir.path().join("nope")).is_err());
    }
}

#[cfg(test)]
mod observer_tests {
    use lift_arrivals::ScriptedArrivals;
    use lift_core::BuildingConfig;
    use lift_dispatch::ShortSightedPolicy;
    use lift_sim::SimBuilder;

    use crate::row::{RoundRow, StatisticsRow};
    use crate::writer::OutputWriter;
    use crate::{CsvWriter, OutputError, OutputResult, SimOutputObserver};

    /// In-memory writer for asserting what the observer forwards.
    #[derive(Default)]
    struct MemWriter {
        rounds:   Vec<RoundRow>,
        stats:    Vec<StatisticsRow>,
        finished: usize,
    }

    impl OutputWriter for MemWriter {
        fn write_round(&mut self, row: &RoundRow) -> OutputResult<()> {
            self.rounds.push(*row);
            Ok(())
        }
        fn write_statistics(&mut self, row: &StatisticsRow) -> OutputResult<()> {
            self.stats.push(*row);
            Ok(())
        }
        fn finish(&mut self) -> OutputResult<()> {
            self.finished += 1;
            Ok(())
        }
    }

    /// Writer whose every call fails.
    struct FailingWriter;

    impl OutputWriter for FailingWriter {
        fn write_round(&mut self, _row: &RoundRow) -> OutputResult<()> {
            Err(OutputError::Io(std::io::Error::other("disk full")))
        }
        fn write_statistics(&mut self, _row: &StatisticsRow) -> OutputResult<()> {
            Err(OutputError::Io(std::io::Error::other("still full")))
        }
        fn finish(&mut self) -> OutputResult<()> {
            Ok(())
        }
    }

    fn config() -> BuildingConfig {
        BuildingConfig { floor_count: 4, elevator_count: 1, elevator_capacity: 2 }
    }

    #[test]
    fn observer_forwards_every_round_and_final_stats() {
        let arrivals = ScriptedArrivals::new().push(0, 1, 4).push(1, 2, 1);
        let mut sim = SimBuilder::new(config(), arrivals, ShortSightedPolicy).build().unwrap();
        let mut obs = SimOutputObserver::new(MemWriter::default());
        let stats = sim.run_with(8, &mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let writer = obs.into_writer();
        assert_eq!(writer.rounds.len(), 8);
        assert_eq!(writer.rounds[0].arrived, 1);
        assert_eq!(writer.stats, vec![StatisticsRow::from(&stats)]);
        assert_eq!(writer.finished, 1);
    }

    #[test]
    fn first_error_is_kept() {
        let arrivals = ScriptedArrivals::new();
        let mut sim = SimBuilder::new(config(), arrivals, ShortSightedPolicy).build().unwrap();
        let mut obs = SimOutputObserver::new(FailingWriter);
        sim.run_with(3, &mut obs).unwrap();

        let err = obs.take_error().expect("stored error");
        assert!(err.to_string().contains("disk full"));
        assert!(obs.take_error().is_none());
    }

    #[test]
    fn end_to_end_csv() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let arrivals = ScriptedArrivals::new().push(0, 1, 3);
        let mut sim = SimBuilder::new(config(), arrivals, ShortSightedPolicy).build().unwrap();
        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        sim.run_with(5, &mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let mut rdr = csv::Reader::from_path(dir.path().join("statistics.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(&rows[0][2], "1"); // people_completed
        assert_eq!(&rows[0][3], "2"); // min_wait
    }
}
