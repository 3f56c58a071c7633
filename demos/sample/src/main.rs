//! sample — the classic small run of the rust_lift elevator simulation.
//!
//! Six floors, three elevators of capacity three, arrivals read from an
//! embedded CSV script.  Every built-in dispatch policy runs against the same
//! script so their statistics can be compared side by side, then the
//! short-sighted policy is run once more against random arrivals with its
//! per-round summaries written to CSV.
//!
//! Set `RUST_LOG=debug` to see per-round counters.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use lift_arrivals::{RandomArrivals, load_arrivals_reader};
use lift_core::BuildingConfig;
use lift_dispatch::{PolicyKind, ShortSightedPolicy};
use lift_output::{CsvWriter, SimOutputObserver};
use lift_sim::{SimBuilder, Statistics};

// ── Constants ─────────────────────────────────────────────────────────────────

const FLOOR_COUNT:       u32   = 6;
const ELEVATOR_COUNT:    usize = 3;
const ELEVATOR_CAPACITY: usize = 3;
const ROUNDS:            u64   = 10;
const SEED:              u64   = 42;
const RANDOM_ROUNDS:     u64   = 200;
const PEOPLE_PER_ROUND:  usize = 2;
const OUTPUT_DIR:        &str  = "output/sample";

// ── Arrival script ────────────────────────────────────────────────────────────

// round, then (start, target) pairs.
const ARRIVALS_CSV: &str = "\
0,1,4,5,3\n\
1,1,6\n\
2,2,1,6,1,3,5\n\
4,1,2\n\
5,4,6,4,1\n\
7,6,2,3,1\n\
";

fn print_row(label: &str, s: &Statistics) {
    println!(
        "{:<15} {:>6} {:>6} {:>9} {:>6} {:>6} {:>6}",
        label, s.rounds_run, s.total_people, s.people_completed, s.min_wait, s.max_wait, s.avg_wait,
    );
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = BuildingConfig {
        floor_count:       FLOOR_COUNT,
        elevator_count:    ELEVATOR_COUNT,
        elevator_capacity: ELEVATOR_CAPACITY,
    };

    println!("=== sample — rust_lift elevator simulation ===");
    println!(
        "Floors: {FLOOR_COUNT}  |  Elevators: {ELEVATOR_COUNT} x {ELEVATOR_CAPACITY}  |  Rounds: {ROUNDS}"
    );
    println!();

    // 1. Load the arrival script once; each run replays it.
    let script = load_arrivals_reader(ARRIVALS_CSV.as_bytes(), FLOOR_COUNT)?;
    println!("Loaded {} people over {} rounds", script.people(), script.rounds().count());
    println!();

    // 2. Compare every policy on the same script.
    println!(
        "{:<15} {:>6} {:>6} {:>9} {:>6} {:>6} {:>6}",
        "policy", "rounds", "people", "completed", "min", "max", "avg"
    );
    println!("{}", "-".repeat(60));
    for kind in PolicyKind::ALL {
        let mut sim = SimBuilder::new(config.clone(), script.clone(), kind.build(SEED)).build()?;
        let stats = sim.run(ROUNDS)?;
        print_row(kind.as_str(), &stats);
    }
    println!();

    // 3. Longer random run with CSV output.
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let arrivals = RandomArrivals::seeded(FLOOR_COUNT, Some(PEOPLE_PER_ROUND), SEED)?;
    let mut sim = SimBuilder::new(config, arrivals, ShortSightedPolicy).build()?;
    let mut obs = SimOutputObserver::new(CsvWriter::new(Path::new(OUTPUT_DIR))?);

    let t0 = Instant::now();
    let stats = sim.run_with(RANDOM_ROUNDS, &mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }

    println!("Random arrivals, short_sighted, {RANDOM_ROUNDS} rounds in {:.3} ms", elapsed.as_secs_f64() * 1e3);
    println!("{}", serde_json::to_string_pretty(&stats)?);
    println!("Round summaries written to {OUTPUT_DIR}/round_summaries.csv");

    Ok(())
}
