//! Step events and the sink contract consumed by renderers.

use crate::algorithm::AlgorithmId;
use crate::metrics::{RunMetrics, RunStatus};

/// One observable operation inside a running algorithm.
///
/// At most one of `compare` and `swap` is set by the built-in algorithms.
/// Events are delivered in strict execution order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct StepEvent {
    /// Index currently being compared, if any.
    pub compare: Option<usize>,
    /// Index just written by an exchange, if any.
    pub swap: Option<usize>,
}

impl StepEvent {
    /// An event with neither index set.
    pub const IDLE: StepEvent = StepEvent {
        compare: None,
        swap: None,
    };

    /// A comparison focused on `index`.
    pub fn compare(index: usize) -> Self {
        Self {
            compare: Some(index),
            swap: None,
        }
    }

    /// An exchange focused on `index`.
    pub fn swap(index: usize) -> Self {
        Self {
            compare: None,
            swap: Some(index),
        }
    }
}

/// Receives step events from a running algorithm.
///
/// `on_step` is called synchronously on the algorithm's thread, with a view
/// of the array as it is at that moment. The view is only valid for the
/// duration of the call; sinks that need to keep it must copy it.
///
/// `begin` and `finish` bracket each run and default to no-ops. Any
/// `FnMut(StepEvent, &[i32])` closure is a sink.
pub trait StepSink {
    /// Observe one step.
    fn on_step(&mut self, event: StepEvent, values: &[i32]);

    /// Called once before the first step of a run.
    fn begin(&mut self, _algorithm: AlgorithmId, _values: &[i32]) {}

    /// Called once after a run resolves, successfully or by cancellation.
    fn finish(&mut self, _algorithm: AlgorithmId, _status: RunStatus, _metrics: &RunMetrics) {}
}

impl<F> StepSink for F
where
    F: FnMut(StepEvent, &[i32]),
{
    fn on_step(&mut self, event: StepEvent, values: &[i32]) {
        self(event, values);
    }
}

/// A sink that discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl StepSink for NullSink {
    fn on_step(&mut self, _event: StepEvent, _values: &[i32]) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_one_index() {
        assert_eq!(StepEvent::compare(3).compare, Some(3));
        assert_eq!(StepEvent::compare(3).swap, None);
        assert_eq!(StepEvent::swap(4).swap, Some(4));
        assert_eq!(StepEvent::swap(4).compare, None);
        assert_eq!(StepEvent::default(), StepEvent::IDLE);
    }

    #[test]
    fn closures_are_sinks() {
        let mut seen = Vec::new();
        {
            let mut sink = |event: StepEvent, values: &[i32]| seen.push((event, values.to_vec()));
            let sink: &mut dyn StepSink = &mut sink;
            sink.begin(AlgorithmId::Bubble, &[2, 1]);
            sink.on_step(StepEvent::compare(0), &[2, 1]);
            sink.on_step(StepEvent::swap(0), &[1, 2]);
        }
        assert_eq!(
            seen,
            vec![
                (StepEvent::compare(0), vec![2, 1]),
                (StepEvent::swap(0), vec![1, 2]),
            ]
        );
    }
}
