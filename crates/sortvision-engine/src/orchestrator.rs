//! Single runs and sequential benchmarks over the sorter registry.
//!
//! Every run follows the same protocol: copy the input, announce the run
//! to the sink, drive the sorter through a [`SortContext`] until it
//! completes or observes cancellation, verify the output, then announce
//! the result. Panics inside the sorter (or the sink) are caught at the
//! run boundary and reported as [`SortError::Panicked`].

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::time::Duration;

use indexmap::IndexMap;
use sortvision_algorithms::{builtins, Interrupt, SortContext, Sorter};
use sortvision_core::{
    AlgorithmDescriptor, AlgorithmId, CancellationToken, Invariant, RunReport, RunStatus,
    SortError, StepSink,
};

use crate::benchmark::{BenchmarkFailure, BenchmarkReport};
use crate::config::{ConfigError, EngineConfig};
use crate::error::EngineError;

// ── Orchestrator ───────────────────────────────────────────────────

/// Drives sorters over private copies of an input array.
///
/// Holds one [`Sorter`] per [`AlgorithmId`], the eight built-ins unless
/// replaced through [`OrchestratorBuilder::sorter`]. `Orchestrator` is
/// `Send + Sync`; wrap it in an `Arc` to use the background runners.
pub struct Orchestrator {
    sorters: IndexMap<AlgorithmId, Box<dyn Sorter>>,
    config: EngineConfig,
}

impl Orchestrator {
    /// Orchestrator with the built-in sorters and the default configuration.
    pub fn new() -> Self {
        Self {
            sorters: registry(),
            config: EngineConfig::default(),
        }
    }

    /// Start building a customised orchestrator.
    pub fn builder() -> OrchestratorBuilder {
        OrchestratorBuilder {
            config: EngineConfig::default(),
            overrides: Vec::new(),
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Registered algorithms, in canonical order.
    pub fn algorithms(&self) -> impl Iterator<Item = AlgorithmId> + '_ {
        self.sorters.keys().copied()
    }

    /// Descriptor of the sorter registered for `id`.
    pub fn descriptor(&self, id: AlgorithmId) -> Option<&'static AlgorithmDescriptor> {
        self.sorters.get(&id).map(|s| s.descriptor())
    }

    /// Run one algorithm on a private copy of `values`.
    ///
    /// Returns `Ok` for both completed and cancelled runs; check
    /// [`RunReport::status`]. The sink sees `begin`, every step in
    /// execution order, then `finish` on success.
    pub fn run(
        &self,
        id: AlgorithmId,
        values: &[i32],
        sink: &mut dyn StepSink,
        delay: Duration,
        token: &CancellationToken,
    ) -> Result<RunReport, EngineError> {
        let sorter = self
            .sorters
            .get(&id)
            .ok_or(EngineError::UnknownAlgorithm { algorithm: id })?;

        let mut output = values.to_vec();
        let mut pacer = self.config.timing.pacer();
        tracing::info!(algorithm = %id, len = values.len(), ?delay, "run started");
        sink.begin(id, &output);

        let mut ctx = SortContext::new(&mut *sink, pacer.as_mut(), token, delay);
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| sorter.sort(&mut output, &mut ctx)));
        let metrics = ctx.metrics();
        let steps = ctx.steps();
        drop(ctx);

        let status = match outcome {
            Ok(Ok(())) => RunStatus::Completed,
            Ok(Err(Interrupt::Cancelled)) => {
                tracing::debug!(algorithm = %id, steps, "run cancelled");
                RunStatus::Cancelled
            }
            Ok(Err(Interrupt::Fault(reason))) => {
                return Err(SortError::Fault {
                    algorithm: id,
                    reason,
                }
                .into());
            }
            Err(payload) => {
                return Err(SortError::Panicked {
                    algorithm: id,
                    message: panic_message(payload.as_ref()),
                }
                .into());
            }
        };

        if self.config.verify_results {
            verify(values, &output, status).map_err(|invariant| SortError::InvariantViolated {
                algorithm: id,
                invariant,
            })?;
        }

        sink.finish(id, status, &metrics);
        tracing::info!(
            algorithm = %id,
            %status,
            swaps = metrics.swaps,
            comparisons = metrics.comparisons,
            elapsed_ms = metrics.elapsed_ms(),
            steps,
            "run finished"
        );
        Ok(RunReport {
            algorithm: id,
            status,
            metrics,
            steps,
            values: output,
        })
    }

    /// [`run`](Self::run) with a freshly minted token that nobody else
    /// holds, so the run always completes.
    pub fn run_one(
        &self,
        id: AlgorithmId,
        values: &[i32],
        sink: &mut dyn StepSink,
        delay: Duration,
    ) -> Result<RunReport, EngineError> {
        self.run(id, values, sink, delay, &CancellationToken::new())
    }

    /// Run `ids` sequentially on identical copies of `values`.
    ///
    /// A failing algorithm is recorded in
    /// [`failures`](BenchmarkReport::failures) and the queue continues.
    /// Once the token is cancelled the in-flight run resolves as
    /// cancelled (and is still ranked) and every algorithm not yet
    /// started is reported as skipped.
    pub fn run_benchmark(
        &self,
        ids: &[AlgorithmId],
        values: &[i32],
        sink: &mut dyn StepSink,
        delay: Duration,
        token: &CancellationToken,
    ) -> BenchmarkReport {
        tracing::info!(algorithms = ids.len(), len = values.len(), "benchmark started");
        let mut runs = Vec::with_capacity(ids.len());
        let mut failures = Vec::new();
        let mut skipped = Vec::new();

        for (pos, &id) in ids.iter().enumerate() {
            if token.is_cancelled() {
                skipped.extend_from_slice(&ids[pos..]);
                tracing::debug!(skipped = skipped.len(), next = %id, "benchmark cancelled");
                break;
            }
            match self.run(id, values, sink, delay, token) {
                Ok(report) => runs.push(report),
                Err(error) => {
                    tracing::warn!(algorithm = %id, %error, "benchmark entry failed");
                    failures.push(BenchmarkFailure {
                        algorithm: id,
                        error,
                    });
                }
            }
        }

        let report = BenchmarkReport::new(runs, failures, skipped);
        tracing::info!(
            ranked = report.ranking().len(),
            failed = report.failures().len(),
            skipped = report.skipped().len(),
            winner = report.winner().map(|w| w.algorithm.name()),
            "benchmark finished"
        );
        report
    }

    /// Benchmark over the configured
    /// [`benchmark_order`](EngineConfig::benchmark_order).
    pub fn run_benchmark_all(
        &self,
        values: &[i32],
        sink: &mut dyn StepSink,
        delay: Duration,
        token: &CancellationToken,
    ) -> BenchmarkReport {
        self.run_benchmark(&self.config.benchmark_order, values, sink, delay, token)
    }
}

impl Default for Orchestrator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Orchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Orchestrator")
            .field("algorithms", &self.sorters.keys().collect::<Vec<_>>())
            .field("config", &self.config)
            .finish()
    }
}

// ── OrchestratorBuilder ────────────────────────────────────────────

/// Builder for [`Orchestrator`].
pub struct OrchestratorBuilder {
    config: EngineConfig,
    overrides: Vec<Box<dyn Sorter>>,
}

impl OrchestratorBuilder {
    /// Use `config` instead of the default.
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the sorter registered under `sorter.id()`.
    pub fn sorter(mut self, sorter: Box<dyn Sorter>) -> Self {
        self.overrides.push(sorter);
        self
    }

    /// Validate the configuration and build the orchestrator.
    pub fn build(self) -> Result<Orchestrator, ConfigError> {
        self.config.validate()?;
        let mut sorters = registry();
        for sorter in self.overrides {
            // Replacing keeps the entry's position in the map.
            sorters.insert(sorter.id(), sorter);
        }
        Ok(Orchestrator {
            sorters,
            config: self.config,
        })
    }
}

// ── Helpers ────────────────────────────────────────────────────────

fn registry() -> IndexMap<AlgorithmId, Box<dyn Sorter>> {
    builtins().map(|s| (s.id(), s)).collect()
}

/// Check a resolved run's output against its input.
fn verify(input: &[i32], output: &[i32], status: RunStatus) -> Result<(), Invariant> {
    let mut a = input.to_vec();
    let mut b = output.to_vec();
    a.sort_unstable();
    b.sort_unstable();
    if a != b {
        return Err(Invariant::NotPermutation);
    }
    if status == RunStatus::Completed {
        if let Some(index) = output.windows(2).position(|w| w[0] > w[1]) {
            return Err(Invariant::NotSorted { index });
        }
    }
    Ok(())
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortvision_core::NullSink;

    #[test]
    fn verify_accepts_sorted_permutation() {
        assert!(verify(&[3, 1, 2], &[1, 2, 3], RunStatus::Completed).is_ok());
    }

    #[test]
    fn verify_allows_unsorted_cancelled_output() {
        assert!(verify(&[3, 1, 2], &[1, 3, 2], RunStatus::Cancelled).is_ok());
        assert_eq!(
            verify(&[3, 1, 2], &[1, 3, 2], RunStatus::Completed),
            Err(Invariant::NotSorted { index: 1 })
        );
    }

    #[test]
    fn verify_rejects_lost_elements() {
        assert_eq!(
            verify(&[3, 1, 2], &[1, 1, 2], RunStatus::Cancelled),
            Err(Invariant::NotPermutation)
        );
    }

    #[test]
    fn panic_message_extracts_strings() {
        let boxed: Box<dyn Any + Send> = Box::new("boom");
        assert_eq!(panic_message(boxed.as_ref()), "boom");
        let boxed: Box<dyn Any + Send> = Box::new(String::from("bang"));
        assert_eq!(panic_message(boxed.as_ref()), "bang");
        let boxed: Box<dyn Any + Send> = Box::new(7u8);
        assert_eq!(panic_message(boxed.as_ref()), "non-string panic payload");
    }

    #[test]
    fn registry_is_in_canonical_order() {
        let orch = Orchestrator::new();
        assert_eq!(orch.algorithms().collect::<Vec<_>>(), AlgorithmId::ALL.to_vec());
    }

    #[test]
    fn builder_rejects_invalid_config() {
        let err = Orchestrator::builder()
            .config(EngineConfig {
                frame_capacity: 0,
                ..EngineConfig::default()
            })
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::FrameCapacityZero);
    }

    #[test]
    fn run_does_not_mutate_the_caller_array() {
        let orch = Orchestrator::builder()
            .config(EngineConfig::virtual_time(Duration::ZERO))
            .build()
            .unwrap();
        let input = vec![4, 2, 3, 1];
        let report = orch
            .run_one(AlgorithmId::Heap, &input, &mut NullSink, Duration::ZERO)
            .unwrap();
        assert_eq!(input, vec![4, 2, 3, 1]);
        assert_eq!(report.values, vec![1, 2, 3, 4]);
    }
}
