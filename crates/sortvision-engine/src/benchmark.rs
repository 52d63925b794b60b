//! Benchmark results: ranking, failures, and the head-to-head summary.

use sortvision_core::{AlgorithmId, RunMetrics, RunReport, RunStatus};

use crate::error::EngineError;

/// One ranked entry of a benchmark.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RankedResult {
    /// 1-based position, fastest first.
    pub rank: usize,
    /// Algorithm that produced this entry.
    pub algorithm: AlgorithmId,
    /// Final metrics of the run.
    pub metrics: RunMetrics,
    /// A run interrupted mid-benchmark is still ranked, as cancelled.
    pub status: RunStatus,
}

impl RankedResult {
    /// Swaps per comparison, or 0 when nothing was compared.
    pub fn swap_ratio(&self) -> f64 {
        if self.metrics.comparisons == 0 {
            0.0
        } else {
            self.metrics.swaps as f64 / self.metrics.comparisons as f64
        }
    }

    /// Counted operations per elapsed millisecond, or 0 for an instant run.
    pub fn operations_per_ms(&self) -> f64 {
        let ms = self.metrics.elapsed_ms();
        if ms <= 0.0 {
            0.0
        } else {
            (self.metrics.swaps + self.metrics.comparisons) as f64 / ms
        }
    }
}

/// An algorithm that failed inside a benchmark.
#[derive(Clone, Debug, PartialEq)]
pub struct BenchmarkFailure {
    /// The failing algorithm.
    pub algorithm: AlgorithmId,
    /// Why it failed.
    pub error: EngineError,
}

/// Fastest-versus-slowest comparison over a benchmark's ranking.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BenchmarkSummary {
    /// Rank 1.
    pub fastest: AlgorithmId,
    /// Last rank.
    pub slowest: AlgorithmId,
    /// Elapsed milliseconds of the fastest run.
    pub fastest_ms: f64,
    /// Elapsed milliseconds of the slowest run.
    pub slowest_ms: f64,
    /// `slowest_ms / fastest_ms`; `None` when the fastest run took no time.
    pub speedup: Option<f64>,
    /// `slowest_ms - fastest_ms`.
    pub time_gap_ms: f64,
}

/// Outcome of a sequential benchmark.
#[derive(Clone, Debug, PartialEq)]
pub struct BenchmarkReport {
    runs: Vec<RunReport>,
    ranking: Vec<RankedResult>,
    failures: Vec<BenchmarkFailure>,
    skipped: Vec<AlgorithmId>,
}

impl BenchmarkReport {
    pub(crate) fn new(
        runs: Vec<RunReport>,
        failures: Vec<BenchmarkFailure>,
        skipped: Vec<AlgorithmId>,
    ) -> Self {
        let mut order: Vec<&RunReport> = runs.iter().collect();
        // Stable: equal times keep execution order.
        order.sort_by_key(|r| r.metrics.elapsed);
        let ranking = order
            .into_iter()
            .enumerate()
            .map(|(i, r)| RankedResult {
                rank: i + 1,
                algorithm: r.algorithm,
                metrics: r.metrics,
                status: r.status,
            })
            .collect();
        Self {
            runs,
            ranking,
            failures,
            skipped,
        }
    }

    /// Resolved runs sorted by ascending elapsed time.
    pub fn ranking(&self) -> &[RankedResult] {
        &self.ranking
    }

    /// Resolved runs in execution order, with their final arrays.
    pub fn runs(&self) -> &[RunReport] {
        &self.runs
    }

    /// Algorithms that failed, in execution order.
    pub fn failures(&self) -> &[BenchmarkFailure] {
        &self.failures
    }

    /// Algorithms never started because the token was cancelled.
    pub fn skipped(&self) -> &[AlgorithmId] {
        &self.skipped
    }

    /// The fastest resolved run, if any.
    pub fn winner(&self) -> Option<&RankedResult> {
        self.ranking.first()
    }

    /// Ranked entry for `id`.
    pub fn result(&self, id: AlgorithmId) -> Option<&RankedResult> {
        self.ranking.iter().find(|r| r.algorithm == id)
    }

    /// Whether the benchmark observed cancellation.
    pub fn cancelled(&self) -> bool {
        !self.skipped.is_empty() || self.ranking.iter().any(|r| r.status.is_cancelled())
    }

    /// Fastest-versus-slowest figures; `None` with fewer than one ranked run.
    pub fn summary(&self) -> Option<BenchmarkSummary> {
        let fastest = self.ranking.first()?;
        let slowest = self.ranking.last()?;
        let fastest_ms = fastest.metrics.elapsed_ms();
        let slowest_ms = slowest.metrics.elapsed_ms();
        Some(BenchmarkSummary {
            fastest: fastest.algorithm,
            slowest: slowest.algorithm,
            fastest_ms,
            slowest_ms,
            speedup: (fastest_ms > 0.0).then(|| slowest_ms / fastest_ms),
            time_gap_ms: slowest_ms - fastest_ms,
        })
    }

    /// How much faster `a` ran than `relative_to`, as a rounded percentage.
    ///
    /// Computed as `round((t_a / t_b - 1) * -100)`; negative when `a` was
    /// slower. `None` if either algorithm is unranked or `relative_to`
    /// took no time.
    pub fn percent_faster(&self, a: AlgorithmId, relative_to: AlgorithmId) -> Option<i64> {
        let t_a = self.result(a)?.metrics.elapsed_ms();
        let t_b = self.result(relative_to)?.metrics.elapsed_ms();
        if t_b <= 0.0 {
            return None;
        }
        Some(((t_a / t_b - 1.0) * -100.0).round() as i64)
    }
}
