//! Runs and benchmarks on a dedicated worker thread.
//!
//! The worker owns an `Arc<Orchestrator>` and its own copy of the input.
//! Every sink callback becomes a [`Frame`] on a bounded crossbeam channel,
//! so a consumer on another thread sees steps in execution order. The
//! [`RunHandle`] holds the channel's receiving end, the run's
//! [`CancellationToken`], and the worker's join handle.
//!
//! A full channel blocks the worker (backpressure). Consumers must drain
//! [`frames`](RunHandle::frames) or cancel; dropping the handle does both.

use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{Receiver, SendTimeoutError, Sender};
use sortvision_core::{
    AlgorithmId, CancellationToken, RunMetrics, RunReport, RunStatus, StepEvent, StepSink,
};

use crate::benchmark::BenchmarkReport;
use crate::error::EngineError;
use crate::orchestrator::Orchestrator;

/// How long a blocked send waits before re-checking cancellation.
const SEND_POLL: Duration = Duration::from_millis(10);

// ── Frame ──────────────────────────────────────────────────────────

/// One sink callback, streamed from a background run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Frame {
    /// A run began on a copy of the input.
    Started {
        /// The algorithm about to run.
        algorithm: AlgorithmId,
        /// The initial array.
        values: Vec<i32>,
    },
    /// A step was emitted.
    Step {
        /// Highlighted indices.
        event: StepEvent,
        /// Snapshot of the array at emission time.
        values: Vec<i32>,
    },
    /// A run resolved and passed verification.
    Finished {
        /// The algorithm that ran.
        algorithm: AlgorithmId,
        /// Completion or cancellation.
        status: RunStatus,
        /// Final metrics.
        metrics: RunMetrics,
    },
}

// ── ChannelSink ────────────────────────────────────────────────────

struct ChannelSink {
    tx: Sender<Frame>,
    token: CancellationToken,
}

impl ChannelSink {
    fn send(&self, mut frame: Frame) {
        loop {
            match self.tx.send_timeout(frame, SEND_POLL) {
                Ok(()) => return,
                Err(SendTimeoutError::Timeout(f)) => {
                    // The run stops at its next check; nobody needs the frame.
                    if self.token.is_cancelled() {
                        return;
                    }
                    frame = f;
                }
                Err(SendTimeoutError::Disconnected(_)) => {
                    self.token.cancel();
                    return;
                }
            }
        }
    }
}

impl StepSink for ChannelSink {
    fn on_step(&mut self, event: StepEvent, values: &[i32]) {
        self.send(Frame::Step {
            event,
            values: values.to_vec(),
        });
    }

    fn begin(&mut self, algorithm: AlgorithmId, values: &[i32]) {
        self.send(Frame::Started {
            algorithm,
            values: values.to_vec(),
        });
    }

    fn finish(&mut self, algorithm: AlgorithmId, status: RunStatus, metrics: &RunMetrics) {
        self.send(Frame::Finished {
            algorithm,
            status,
            metrics: *metrics,
        });
    }
}

// ── RunHandle ──────────────────────────────────────────────────────

/// Handle to a background run or benchmark producing `T`.
///
/// Dropping the handle cancels the run and joins the worker.
pub struct RunHandle<T> {
    token: CancellationToken,
    frames: Receiver<Frame>,
    thread_name: String,
    thread: Option<JoinHandle<T>>,
}

impl<T> RunHandle<T> {
    /// Request cancellation. The worker resolves at its next step.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// The run's cancellation token.
    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    /// Receiving end of the frame channel. Disconnects when the worker exits.
    pub fn frames(&self) -> &Receiver<Frame> {
        &self.frames
    }

    /// Blocking iterator over frames until the worker exits.
    pub fn iter(&self) -> crossbeam_channel::Iter<'_, Frame> {
        self.frames.iter()
    }

    /// Whether the worker thread has exited.
    pub fn is_finished(&self) -> bool {
        self.thread.as_ref().is_none_or(|h| h.is_finished())
    }

    /// Wait for the worker and return its result.
    ///
    /// Frames not yet received are discarded while waiting, so a worker
    /// blocked on a full channel still runs to completion.
    pub fn join(mut self) -> Result<T, EngineError> {
        let handle = self.thread.take().ok_or_else(|| EngineError::WorkerLost {
            thread: self.thread_name.clone(),
        })?;
        // Ends when the worker drops its sender.
        for _ in self.frames.iter() {}
        join_worker(handle, &self.thread_name)
    }
}

impl<T> Drop for RunHandle<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.thread.take() {
            self.token.cancel();
            let _ = join_worker(handle, &self.thread_name);
        }
    }
}

impl<T> std::fmt::Debug for RunHandle<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RunHandle")
            .field("thread", &self.thread_name)
            .field("cancelled", &self.token.is_cancelled())
            .field("pending_frames", &self.frames.len())
            .finish()
    }
}

fn join_worker<T>(handle: JoinHandle<T>, name: &str) -> Result<T, EngineError> {
    handle.join().map_err(|_| {
        tracing::error!(thread = name, "background worker lost");
        EngineError::WorkerLost {
            thread: name.to_string(),
        }
    })
}

// ── Spawning ───────────────────────────────────────────────────────

impl Orchestrator {
    /// Run `id` on a worker thread named `sortvision-<id>`.
    ///
    /// Fails immediately if no sorter is registered for `id` or the
    /// thread cannot be spawned. The worker's result carries every other
    /// failure.
    pub fn spawn_run(
        self: &Arc<Self>,
        id: AlgorithmId,
        values: Vec<i32>,
        delay: Duration,
    ) -> Result<RunHandle<Result<RunReport, EngineError>>, EngineError> {
        if self.descriptor(id).is_none() {
            return Err(EngineError::UnknownAlgorithm { algorithm: id });
        }
        let orchestrator = Arc::clone(self);
        self.spawn_worker(format!("sortvision-{id}"), move |sink, token| {
            orchestrator.run(id, &values, sink, delay, token)
        })
    }

    /// Benchmark `ids` on a worker thread named `sortvision-benchmark`.
    pub fn spawn_benchmark(
        self: &Arc<Self>,
        ids: Vec<AlgorithmId>,
        values: Vec<i32>,
        delay: Duration,
    ) -> Result<RunHandle<BenchmarkReport>, EngineError> {
        let orchestrator = Arc::clone(self);
        self.spawn_worker("sortvision-benchmark".to_string(), move |sink, token| {
            orchestrator.run_benchmark(&ids, &values, sink, delay, token)
        })
    }

    fn spawn_worker<T, F>(&self, name: String, work: F) -> Result<RunHandle<T>, EngineError>
    where
        T: Send + 'static,
        F: FnOnce(&mut dyn StepSink, &CancellationToken) -> T + Send + 'static,
    {
        let (tx, rx) = crossbeam_channel::bounded(self.config().frame_capacity);
        let token = CancellationToken::new();
        let worker_token = token.clone();
        let thread = thread::Builder::new()
            .name(name.clone())
            .spawn(move || {
                let mut sink = ChannelSink {
                    tx,
                    token: worker_token.clone(),
                };
                work(&mut sink, &worker_token)
            })
            .map_err(|e| EngineError::ThreadSpawnFailed {
                reason: e.to_string(),
            })?;
        tracing::debug!(thread = %name, "background worker spawned");
        Ok(RunHandle {
            token,
            frames: rx,
            thread_name: name,
            thread: Some(thread),
        })
    }
}
