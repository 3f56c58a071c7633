//! CSV arrival loader.
//!
//! # CSV format
//!
//! No header row.  One record per round that has arrivals: the round number
//! followed by any number of `start,target` floor pairs.
//!
//! ```csv
//! 0,1,4,2,6
//! 3,6,1
//! 7,5,2,5,3,1,6
//! ```
//!
//! Round 0 above brings two people (1→4 and 2→6), round 3 one person.  Rounds
//! missing from the file have no arrivals.  Several records for the same
//! round append in file order.  Fields may carry surrounding whitespace.
//!
//! Every floor is checked against `1..=floor_count` while loading, so a bad
//! file fails before any round runs.

use std::io::Read;
use std::path::Path;

use lift_core::{Floor, Round};
use tracing::debug;

use crate::{ArrivalError, ArrivalResult, ScriptedArrivals};

// ── Public API ────────────────────────────────────────────────────────────────

/// Load an arrival script from a CSV file.
pub fn load_arrivals_csv(path: &Path, floor_count: u32) -> ArrivalResult<ScriptedArrivals> {
    let file = std::fs::File::open(path).map_err(ArrivalError::Io)?;
    load_arrivals_reader(file, floor_count)
}

/// Like [`load_arrivals_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor` or a byte slice).
pub fn load_arrivals_reader<R: Read>(reader: R, floor_count: u32) -> ArrivalResult<ScriptedArrivals> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let top = Floor(floor_count);
    let mut script = ScriptedArrivals::new();

    for result in csv_reader.records() {
        let record = result.map_err(|e| ArrivalError::Parse {
            line:    e.position().map_or(0, |p| p.line()),
            message: e.to_string(),
        })?;
        let line = record.position().map_or(0, |p| p.line());

        let mut fields = record.iter();
        let Some(round_field) = fields.next() else {
            continue;
        };
        let round = Round(parse_field::<u64>(round_field, "round", line)?);

        let floors: Vec<&str> = fields.collect();
        if floors.len() % 2 != 0 {
            return Err(ArrivalError::Parse {
                line,
                message: format!("start floor {:?} has no matching target floor", floors[floors.len() - 1]),
            });
        }

        for pair in floors.chunks_exact(2) {
            let start = Floor(parse_field::<u32>(pair[0], "start floor", line)?);
            let target = Floor(parse_field::<u32>(pair[1], "target floor", line)?);
            for floor in [start, target] {
                if !floor.is_within(top) {
                    return Err(ArrivalError::FloorOutOfRange { round, floor, floor_count });
                }
            }
            script.insert(round, start, target);
        }
    }

    debug!(
        rounds = script.rounds().count(),
        people = script.people(),
        "loaded arrival script"
    );
    Ok(script)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_field<T: std::str::FromStr>(raw: &str, what: &str, line: u64) -> ArrivalResult<T> {
    raw.parse::<T>().map_err(|_| ArrivalError::Parse {
        line,
        message: format!("invalid {what} {raw:?}: expected a non-negative integer"),
    })
}
