//! Offline replay driver.
//!
//! Usage: `replay <trace-file> [capacity]`
//!
//! Reads a three-column trace, replays it through FIFO, LRU, and CLOCK with
//! the given capacity, and prints the comparison report. Any trace error
//! aborts before a single statistic is printed.

use std::env;
use std::process::ExitCode;

use replaykit::sim::SimulationBuilder;
use replaykit::trace;

const DEFAULT_CAPACITY: usize = 10_000;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    let Some(path) = args.get(1) else {
        let program = args.first().map_or("replay", String::as_str);
        eprintln!("usage: {program} <trace-file> [capacity]");
        return ExitCode::FAILURE;
    };

    let capacity = match args.get(2) {
        Some(raw) => match raw.parse::<usize>() {
            Ok(capacity) => capacity,
            Err(_) => {
                eprintln!("invalid capacity: {raw}");
                return ExitCode::FAILURE;
            },
        },
        None => DEFAULT_CAPACITY,
    };

    let addrs = match trace::read_trace_file(path) {
        Ok(addrs) => addrs,
        Err(err) => {
            eprintln!("{path}: {err}");
            return ExitCode::FAILURE;
        },
    };

    let mut sim = match SimulationBuilder::new(capacity).try_build() {
        Ok(sim) => sim,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        },
    };

    let summary = trace::summarize(&addrs);
    sim.replay(&addrs);

    println!(
        "Trace: {} accesses, {} distinct addresses, capacity {}",
        summary.accesses, summary.distinct, capacity
    );
    println!();
    print!("{sim}");
    ExitCode::SUCCESS
}
