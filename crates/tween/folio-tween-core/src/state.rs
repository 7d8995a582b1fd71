//! Per-tween runtime state and the time-stepping function.
//!
//! Lifecycle: `Pending` → (first update) → `Running` → (elapsed >= duration) → `Completed`.
//! `Completed` is terminal; further updates leave the state untouched.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::spec::TweenSpec;

/// Outcome of one [`TweenState::advance`] call.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Advance {
    /// Nothing changed: the timestamp was non-finite or the tween had already completed.
    Ignored,
    /// Current values were resampled.
    Sampled,
    /// This call completed the tween.
    Completed,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Pending,
    Running,
    Completed,
}

/// Mutable half of a tween. Keys of `current` always match the spec's properties.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TweenState {
    phase: Phase,
    start_time: Option<f64>,
    current: IndexMap<String, f64>,
}

impl TweenState {
    /// Pending state whose current values are the start values.
    pub fn new(spec: &TweenSpec) -> Self {
        Self {
            phase: Phase::Pending,
            start_time: None,
            current: spec.start_values(),
        }
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Timestamp latched by the first update; never changes afterwards.
    #[inline]
    pub fn start_time(&self) -> Option<f64> {
        self.start_time
    }

    #[inline]
    pub fn current(&self) -> &IndexMap<String, f64> {
        &self.current
    }

    #[inline]
    pub fn value(&self, name: &str) -> Option<f64> {
        self.current.get(name).copied()
    }

    #[inline]
    pub fn is_completed(&self) -> bool {
        self.phase == Phase::Completed
    }

    /// Advance to `timestamp` (ms). Reports `Completed` only on the call that completes the tween.
    ///
    /// - the first call latches `timestamp` as the start time
    /// - elapsed time is clamped at zero, so an earlier timestamp samples the start values
    /// - non-finite timestamps are ignored
    pub fn advance(&mut self, spec: &TweenSpec, timestamp: f64) -> Advance {
        if self.phase == Phase::Completed {
            return Advance::Ignored;
        }
        if !timestamp.is_finite() {
            log::warn!("ignoring non-finite tween timestamp {timestamp}");
            return Advance::Ignored;
        }

        let start = *self.start_time.get_or_insert(timestamp);
        self.phase = Phase::Running;

        let elapsed = (timestamp - start).max(0.0);
        if elapsed < spec.duration_ms() {
            spec.sample_into(elapsed, &mut self.current);
            Advance::Sampled
        } else {
            self.phase = Phase::Completed;
            Advance::Completed
        }
    }

    /// Overwrite current values with the end values.
    pub(crate) fn snap_to_end(&mut self, spec: &TweenSpec) {
        for (name, range) in spec.properties() {
            if let Some(slot) = self.current.get_mut(name) {
                *slot = range.end;
            }
        }
    }
}

/// Pure form of [`TweenState::advance`]: returns the next state and whether
/// this step completed the tween. The input state is left untouched.
pub fn step(spec: &TweenSpec, state: &TweenState, timestamp: f64) -> (TweenState, bool) {
    let mut next = state.clone();
    let completed = next.advance(spec, timestamp) == Advance::Completed;
    (next, completed)
}
