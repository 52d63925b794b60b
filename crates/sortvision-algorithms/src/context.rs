//! Execution context passed to sorters during a run.
//!
//! [`SortContext`] owns the run's side channels: the step sink, the pacer
//! that suspends after each step, the cancellation token, and the swap and
//! comparison counters.

use std::fmt;
use std::thread;
use std::time::{Duration, Instant};

use sortvision_core::{CancellationToken, RunMetrics, StepEvent, StepSink};

/// Why a sorter stopped before completing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Interrupt {
    /// The cancellation token was observed after a step.
    Cancelled,
    /// The sorter hit an internal inconsistency and aborted.
    Fault(String),
}

impl fmt::Display for Interrupt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled => write!(f, "cancelled"),
            Self::Fault(reason) => write!(f, "fault: {reason}"),
        }
    }
}

/// Result type threaded through every suspension point.
pub type Flow<T = ()> = Result<T, Interrupt>;

/// Suspension primitive and time source for a run.
///
/// Called exactly once after every emitted step.
pub trait Pacer: Send {
    /// Suspend for one step with the configured inter-step delay.
    fn pause(&mut self, delay: Duration);

    /// Time elapsed since the run started, as seen by this pacer.
    fn elapsed(&self) -> Duration;
}

/// Wall-clock pacing: sleeps for the delay, or yields the thread when the
/// delay is zero.
#[derive(Debug)]
pub struct RealtimePacer {
    started: Instant,
}

impl RealtimePacer {
    /// Start the clock now.
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }
}

impl Pacer for RealtimePacer {
    fn pause(&mut self, delay: Duration) {
        if delay.is_zero() {
            thread::yield_now();
        } else {
            thread::sleep(delay);
        }
    }

    fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// Simulated pacing: never sleeps, and advances a virtual clock by
/// `delay + step_cost` per step.
///
/// Elapsed time is a pure function of the step count, which makes
/// benchmark rankings reproducible.
#[derive(Clone, Debug, Default)]
pub struct VirtualPacer {
    elapsed: Duration,
    step_cost: Duration,
}

impl VirtualPacer {
    /// A virtual clock charging `step_cost` on top of each delay.
    pub fn new(step_cost: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            step_cost,
        }
    }
}

impl Pacer for VirtualPacer {
    fn pause(&mut self, delay: Duration) {
        self.elapsed = self
            .elapsed
            .saturating_add(delay)
            .saturating_add(self.step_cost);
    }

    fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

/// Execution context passed to [`Sorter::sort`](crate::Sorter::sort).
///
/// # Step protocol
///
/// [`emit`](Self::emit) delivers one event to the sink together with the
/// current array view, suspends through the pacer, then checks the token.
/// The order "emit, suspend, check" is fixed; a cancelled token surfaces
/// as `Err(Interrupt::Cancelled)` at the next emission.
///
/// Counters are bumped explicitly so that sorters which do not track
/// metrics simply never call [`count_comparison`](Self::count_comparison)
/// or [`count_swap`](Self::count_swap).
pub struct SortContext<'a> {
    sink: &'a mut dyn StepSink,
    pacer: &'a mut dyn Pacer,
    token: &'a CancellationToken,
    delay: Duration,
    swaps: u64,
    comparisons: u64,
    steps: u64,
}

impl<'a> SortContext<'a> {
    /// Construct a context for one run.
    ///
    /// Typically called by the orchestrator. For testing, pass a closure
    /// sink and a [`VirtualPacer`].
    pub fn new(
        sink: &'a mut dyn StepSink,
        pacer: &'a mut dyn Pacer,
        token: &'a CancellationToken,
        delay: Duration,
    ) -> Self {
        Self {
            sink,
            pacer,
            token,
            delay,
            swaps: 0,
            comparisons: 0,
            steps: 0,
        }
    }

    /// Emit one step, suspend, then check for cancellation.
    pub fn emit(&mut self, event: StepEvent, values: &[i32]) -> Flow {
        self.steps += 1;
        self.sink.on_step(event, values);
        self.pacer.pause(self.delay);
        if self.token.is_cancelled() {
            Err(Interrupt::Cancelled)
        } else {
            Ok(())
        }
    }

    /// Emit a comparison focused on `index`.
    pub fn compare_at(&mut self, values: &[i32], index: usize) -> Flow {
        self.emit(StepEvent::compare(index), values)
    }

    /// Emit an exchange focused on `index`.
    pub fn swap_at(&mut self, values: &[i32], index: usize) -> Flow {
        self.emit(StepEvent::swap(index), values)
    }

    /// Count one comparison.
    pub fn count_comparison(&mut self) {
        self.comparisons += 1;
    }

    /// Count one swap.
    pub fn count_swap(&mut self) {
        self.swaps += 1;
    }

    /// Snapshot of the counters and the pacer's elapsed time.
    pub fn metrics(&self) -> RunMetrics {
        RunMetrics {
            swaps: self.swaps,
            comparisons: self.comparisons,
            elapsed: self.pacer.elapsed(),
        }
    }

    /// Number of steps emitted so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Whether the run's token has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}
