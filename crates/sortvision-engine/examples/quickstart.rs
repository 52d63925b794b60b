//! SortVision quickstart: generate, validate, run, and benchmark.
//!
//! Demonstrates:
//!   1. Generating a seeded nearly-sorted pattern
//!   2. Validating a user-typed array
//!   3. Running one algorithm with a closure sink
//!   4. Benchmarking all eight algorithms under virtual time
//!   5. Static estimates and advice for the winner
//!
//! Run with:
//!   RUST_LOG=sortvision_engine=debug cargo run --example quickstart

use std::time::Duration;

use sortvision_core::{AlgorithmId, CancellationToken, NullSink, StepEvent};
use sortvision_engine::{
    advise, estimate, generate_pattern, validate_text, EngineConfig, InputProfile, Orchestrator,
    Scenario, Validation,
};
use sortvision_patterns::{PatternGenerator, PatternKind, PatternSpec};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    println!("=== SortVision Quickstart ===\n");

    // ─── Inputs ─────────────────────────────────────────────────

    let mut gen = PatternGenerator::seeded(42);
    let spec = PatternSpec::new(
        PatternKind::NearlySorted {
            perturbation: PatternKind::DEFAULT_PERTURBATION,
        },
        24,
    );
    let pattern = generate_pattern(&spec, &mut gen)?;
    println!("nearlySorted(24): {pattern:?}");

    let typed = match validate_text("12, -7, 300, 45, 0, 9") {
        Validation::Accepted(values) => values,
        Validation::Rejected(e) => return Err(e.into()),
        Validation::NoArray => return Ok(()),
    };
    println!("typed input:      {typed:?}\n");

    // ─── Single run ─────────────────────────────────────────────

    let orch = Orchestrator::builder()
        .config(EngineConfig::virtual_time(Duration::from_micros(5)))
        .build()?;

    let mut frames = 0usize;
    let mut sink = |event: StepEvent, values: &[i32]| {
        frames += 1;
        if frames <= 3 {
            println!("  step {frames}: {event:?} {values:?}");
        }
    };
    let report = orch.run_one(AlgorithmId::Insertion, &typed, &mut sink, Duration::ZERO)?;
    println!(
        "insertion: {:?} in {} steps, {} swaps, {} comparisons\n",
        report.values, report.steps, report.metrics.swaps, report.metrics.comparisons
    );

    // ─── Benchmark ──────────────────────────────────────────────

    let bench = orch.run_benchmark_all(&pattern, &mut NullSink, Duration::ZERO, &CancellationToken::new());
    for r in bench.ranking() {
        println!(
            "  #{} {:<9} {:>9.3} ms  swaps {:>4}  comparisons {:>4}",
            r.rank,
            r.algorithm.name(),
            r.metrics.elapsed_ms(),
            r.metrics.swaps,
            r.metrics.comparisons
        );
    }
    if let Some(s) = bench.summary() {
        println!(
            "\nfastest {} / slowest {}: gap {:.3} ms, speedup {}",
            s.fastest,
            s.slowest,
            s.time_gap_ms,
            s.speedup.map_or("n/a".to_string(), |x| format!("{x:.1}x"))
        );
    }

    // ─── Advice ─────────────────────────────────────────────────

    let profile = InputProfile::analyze(&pattern);
    if let Some(winner) = bench.winner() {
        let e = estimate(winner.algorithm, pattern.len(), Scenario::Average, &profile);
        let a = advise(winner.algorithm, &profile);
        println!(
            "\n{}: estimated {:.2} ms, {:.4} MiB; {}",
            winner.algorithm.descriptor().display_name,
            e.time_ms,
            e.memory_mb,
            a.recommendation
        );
        for note in &a.notes {
            println!("  - {note}");
        }
    }

    Ok(())
}
