//! Benchmark inputs and profiles for the SortVision engine.
//!
//! - [`reference_inputs`]: one maximum-size array per pattern, seeded
//! - [`reference_orchestrator`]: virtual-time orchestrator for stable rankings
//! - [`run_sorter`]: one sorter on one input, no orchestration overhead

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::time::Duration;

use sortvision_algorithms::{Flow, SortContext, Sorter, VirtualPacer};
use sortvision_core::{CancellationToken, NullSink, RunMetrics, MAX_ARRAY_SIZE};
use sortvision_engine::{ConfigError, EngineConfig, Orchestrator};
use sortvision_patterns::{PatternError, PatternGenerator, PatternKind, PatternSpec};

/// Every pattern kind with its default parameters.
pub fn reference_kinds() -> [PatternKind; 9] {
    [
        PatternKind::Random,
        PatternKind::Sorted,
        PatternKind::ReverseSorted,
        PatternKind::NearlySorted {
            perturbation: PatternKind::DEFAULT_PERTURBATION,
        },
        PatternKind::FewUnique {
            unique_count: PatternKind::DEFAULT_UNIQUE_COUNT,
        },
        PatternKind::ManyDuplicates {
            duplicate_factor: PatternKind::DEFAULT_MANY_DUPLICATES,
        },
        PatternKind::HighDuplicates {
            duplicate_factor: PatternKind::DEFAULT_HIGH_DUPLICATES,
        },
        PatternKind::BellCurve {
            mean: PatternKind::DEFAULT_MEAN,
            std_dev: PatternKind::DEFAULT_STD_DEV,
        },
        PatternKind::Stepped {
            step_count: PatternKind::DEFAULT_STEP_COUNT,
        },
    ]
}

/// One `MAX_ARRAY_SIZE` array per reference kind, keyed by pattern name.
pub fn reference_inputs(seed: u64) -> Result<Vec<(&'static str, Vec<i32>)>, PatternError> {
    let mut gen = PatternGenerator::seeded(seed);
    reference_kinds()
        .into_iter()
        .map(|kind| {
            let values = gen.generate(&PatternSpec::new(kind, MAX_ARRAY_SIZE))?;
            Ok((kind.name(), values))
        })
        .collect()
}

/// Orchestrator charging `step_cost` per step on a virtual clock.
pub fn reference_orchestrator(step_cost: Duration) -> Result<Orchestrator, ConfigError> {
    Orchestrator::builder()
        .config(EngineConfig::virtual_time(step_cost))
        .build()
}

/// Sort `values` in place with a null sink and zero-cost virtual pacing.
pub fn run_sorter(sorter: &dyn Sorter, values: &mut [i32]) -> (Flow, RunMetrics) {
    let token = CancellationToken::new();
    let mut pacer = VirtualPacer::new(Duration::ZERO);
    let mut sink = NullSink;
    let mut ctx = SortContext::new(&mut sink, &mut pacer, &token, Duration::ZERO);
    let flow = sorter.sort(values, &mut ctx);
    (flow, ctx.metrics())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortvision_algorithms::builtins;

    #[test]
    fn reference_inputs_cover_every_kind() {
        let inputs = reference_inputs(42).unwrap();
        assert_eq!(inputs.len(), 9);
        assert!(inputs.iter().all(|(_, v)| v.len() == MAX_ARRAY_SIZE));
        assert_eq!(inputs[0].0, "random");
        assert_eq!(inputs[8].0, "stepped");
    }

    #[test]
    fn reference_inputs_are_seeded() {
        assert_eq!(reference_inputs(7).unwrap(), reference_inputs(7).unwrap());
    }

    #[test]
    fn run_sorter_sorts_reference_inputs() {
        for (_, input) in reference_inputs(3).unwrap() {
            for sorter in builtins() {
                let mut values = input.clone();
                let (flow, _) = run_sorter(sorter.as_ref(), &mut values);
                assert!(flow.is_ok());
                assert!(values.windows(2).all(|w| w[0] <= w[1]), "{}", sorter.id());
            }
        }
    }
}
