//! Rank all eight algorithms on every reference pattern.
//!
//! Uses a virtual clock (1µs per step), so the table is reproducible and
//! reflects step counts rather than machine speed.
//!
//! Run with:
//!   cargo run -p sortvision-bench --example pattern_matrix

use std::time::Duration;

use sortvision_bench::{reference_inputs, reference_orchestrator};
use sortvision_core::{CancellationToken, NullSink};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let orch = reference_orchestrator(Duration::from_micros(1))?;

    println!("{:<16} {:<10} {:<10} {:>10}", "pattern", "fastest", "slowest", "speedup");
    for (name, values) in reference_inputs(42)? {
        let report = orch.run_benchmark_all(&values, &mut NullSink, Duration::ZERO, &CancellationToken::new());
        if let Some(s) = report.summary() {
            println!(
                "{:<16} {:<10} {:<10} {:>9.1}x",
                name,
                s.fastest.name(),
                s.slowest.name(),
                s.speedup.unwrap_or(f64::NAN)
            );
        }
    }
    Ok(())
}
