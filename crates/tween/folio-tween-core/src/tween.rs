//! A single tween: validated spec, runtime state and the one-shot completion callback.

use std::fmt;

use indexmap::IndexMap;

use crate::ids::TweenId;
use crate::spec::TweenSpec;
use crate::state::{Advance, Phase, TweenState};

/// Completion callback. Boxed `FnOnce` so it can only ever run once.
pub type OnComplete = Box<dyn FnOnce()>;

/// Result of one [`Tween::update`] call.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TweenStatus {
    /// Timestamp was non-finite; nothing was latched or resampled.
    Ignored,
    /// Current values were resampled.
    Running,
    /// This call completed the tween and ran its callback.
    Completed,
    /// The tween had already completed; nothing happened.
    Finished,
}

pub struct Tween {
    id: TweenId,
    spec: TweenSpec,
    state: TweenState,
    on_complete: Option<OnComplete>,
}

impl fmt::Debug for Tween {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tween")
            .field("id", &self.id)
            .field("spec", &self.spec)
            .field("state", &self.state)
            .field("on_complete", &self.on_complete.is_some())
            .finish()
    }
}

impl Tween {
    pub fn new(id: TweenId, spec: TweenSpec) -> Self {
        let state = TweenState::new(&spec);
        Self {
            id,
            spec,
            state,
            on_complete: None,
        }
    }

    /// Register the completion callback, replacing any previous one.
    pub fn on_complete(&mut self, callback: impl FnOnce() + 'static) {
        self.on_complete = Some(Box::new(callback));
    }

    #[inline]
    pub fn id(&self) -> TweenId {
        self.id
    }

    #[inline]
    pub fn spec(&self) -> &TweenSpec {
        &self.spec
    }

    #[inline]
    pub fn state(&self) -> &TweenState {
        &self.state
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    #[inline]
    pub fn current(&self) -> &IndexMap<String, f64> {
        self.state.current()
    }

    #[inline]
    pub fn value(&self, name: &str) -> Option<f64> {
        self.state.value(name)
    }

    /// Drive the tween to `timestamp` (ms). The callback runs on the
    /// transition into `Completed` and never again.
    pub fn update(&mut self, timestamp: f64) -> TweenStatus {
        match self.state.phase() {
            Phase::Completed => return TweenStatus::Finished,
            Phase::Pending | Phase::Running => {}
        }
        match self.state.advance(&self.spec, timestamp) {
            Advance::Ignored => TweenStatus::Ignored,
            Advance::Sampled => TweenStatus::Running,
            Advance::Completed => {
                if let Some(callback) = self.on_complete.take() {
                    callback();
                }
                TweenStatus::Completed
            }
        }
    }

    pub(crate) fn snap_to_end(&mut self) {
        self.state.snap_to_end(&self.spec);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::TweenBuilder;
    use std::cell::Cell;
    use std::rc::Rc;

    fn spec(duration: f64) -> TweenSpec {
        TweenBuilder::new()
            .duration(duration)
            .start([("x", 0.0)])
            .end([("x", 10.0)])
            .build()
            .unwrap()
    }

    #[test]
    fn callback_fires_exactly_once() {
        let hits = Rc::new(Cell::new(0));
        let mut tween = Tween::new(TweenId(0), spec(100.0));
        let h = hits.clone();
        tween.on_complete(move || h.set(h.get() + 1));

        assert_eq!(tween.update(0.0), TweenStatus::Running);
        assert_eq!(tween.update(50.0), TweenStatus::Running);
        assert_eq!(hits.get(), 0);
        assert_eq!(tween.update(100.0), TweenStatus::Completed);
        assert_eq!(tween.update(150.0), TweenStatus::Finished);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn on_complete_replaces_previous_callback() {
        let first = Rc::new(Cell::new(false));
        let second = Rc::new(Cell::new(false));
        let mut tween = Tween::new(TweenId(1), spec(0.0));
        let f = first.clone();
        tween.on_complete(move || f.set(true));
        let s = second.clone();
        tween.on_complete(move || s.set(true));

        assert_eq!(tween.update(0.0), TweenStatus::Completed);
        assert!(!first.get());
        assert!(second.get());
    }

    #[test]
    fn ignored_timestamp_stays_pending() {
        let mut tween = Tween::new(TweenId(2), spec(100.0));
        assert_eq!(tween.update(f64::INFINITY), TweenStatus::Ignored);
        assert_eq!(tween.phase(), Phase::Pending);
    }

    #[test]
    fn ignored_timestamp_while_running_is_not_a_resample() {
        let mut tween = Tween::new(TweenId(4), spec(100.0));
        tween.update(0.0);
        tween.update(50.0);
        assert_eq!(tween.update(f64::NAN), TweenStatus::Ignored);
        assert_eq!(tween.phase(), Phase::Running);
        assert_eq!(tween.value("x"), Some(5.0));
        assert_eq!(tween.update(60.0), TweenStatus::Running);
    }

    #[test]
    fn debug_hides_callback_body() {
        let mut tween = Tween::new(TweenId(3), spec(100.0));
        tween.on_complete(|| {});
        let dbg = format!("{tween:?}");
        assert!(dbg.contains("on_complete: true"));
    }
}
