//! Background run: stream frames from a worker thread and cancel midway.
//!
//! Run with:
//!   cargo run --example background_run

use std::sync::Arc;
use std::time::Duration;

use sortvision_core::AlgorithmId;
use sortvision_engine::{Frame, Orchestrator};
use sortvision_patterns::{PatternGenerator, PatternKind, PatternSpec};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::DEBUG.into()),
        )
        .init();

    let values = PatternGenerator::seeded(7).generate(&PatternSpec::new(PatternKind::Random, 60))?;
    let orch = Arc::new(Orchestrator::new());
    let handle = orch.spawn_run(AlgorithmId::Bubble, values, Duration::from_millis(1))?;

    let mut steps = 0u32;
    for frame in handle.iter() {
        match frame {
            Frame::Started { algorithm, values } => {
                println!("{algorithm} started on {} values", values.len());
            }
            Frame::Step { event, .. } => {
                steps += 1;
                if steps % 100 == 0 {
                    println!("  {steps} steps, last {event:?}");
                }
                if steps == 500 {
                    println!("  cancelling");
                    handle.cancel();
                }
            }
            Frame::Finished {
                algorithm,
                status,
                metrics,
            } => {
                println!(
                    "{algorithm} {status} after {:.1} ms ({} swaps, {} comparisons)",
                    metrics.elapsed_ms(),
                    metrics.swaps,
                    metrics.comparisons
                );
            }
        }
    }

    let report = handle.join()??;
    println!("final array sorted: {}", report.values.windows(2).all(|w| w[0] <= w[1]));
    Ok(())
}
