//! TweenSet: the owner collection a frame loop drives.
//!
//! The set owns every active tween. Each `update(timestamp)` advances all of
//! them once in insertion order, then drops the ones that completed, so no
//! tween needs a back-reference to its container.

use indexmap::IndexMap;

use crate::config::Config;
use crate::error::TweenError;
use crate::ids::{IdAllocator, TweenId};
use crate::outputs::{Change, Outputs, TweenEvent};
use crate::spec::{TweenBuilder, TweenSpec};
use crate::state::Phase;
use crate::tween::{Tween, TweenStatus};

#[derive(Debug)]
pub struct TweenSet {
    cfg: Config,
    ids: IdAllocator,
    tweens: Vec<Tween>,

    // Per-frame outputs
    outputs: Outputs,
}

impl Default for TweenSet {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl TweenSet {
    pub fn new(cfg: Config) -> Self {
        Self {
            tweens: Vec::with_capacity(cfg.capacity),
            cfg,
            ids: IdAllocator::new(),
            outputs: Outputs::default(),
        }
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Builder seeded with this set's duration/easing defaults.
    pub fn builder(&self) -> TweenBuilder {
        TweenBuilder::with_config(&self.cfg)
    }

    /// Append a Pending tween. It latches its start time on the next `update`.
    pub fn insert(&mut self, spec: TweenSpec) -> TweenId {
        let id = self.ids.alloc_tween();
        self.tweens.push(Tween::new(id, spec));
        id
    }

    /// Append a Pending tween with a completion callback.
    pub fn insert_with(&mut self, spec: TweenSpec, on_complete: impl FnOnce() + 'static) -> TweenId {
        let id = self.ids.alloc_tween();
        let mut tween = Tween::new(id, spec);
        tween.on_complete(on_complete);
        self.tweens.push(tween);
        id
    }

    /// Register or replace the completion callback of an active tween.
    pub fn on_complete(
        &mut self,
        id: TweenId,
        callback: impl FnOnce() + 'static,
    ) -> Result<(), TweenError> {
        let tween = self
            .tweens
            .iter_mut()
            .find(|t| t.id() == id)
            .ok_or(TweenError::UnknownTween { id })?;
        tween.on_complete(callback);
        Ok(())
    }

    /// Abandon a tween. Its callback is dropped without running.
    pub fn remove(&mut self, id: TweenId) -> Option<Tween> {
        let idx = self.tweens.iter().position(|t| t.id() == id)?;
        log::debug!("{id} removed before completion");
        Some(self.tweens.remove(idx))
    }

    /// Abandon every tween.
    pub fn clear(&mut self) {
        self.tweens.clear();
        self.outputs.clear();
    }

    #[inline]
    pub fn get(&self, id: TweenId) -> Option<&Tween> {
        self.tweens.iter().find(|t| t.id() == id)
    }

    #[inline]
    pub fn contains(&self, id: TweenId) -> bool {
        self.get(id).is_some()
    }

    pub fn current_values(&self, id: TweenId) -> Option<&IndexMap<String, f64>> {
        self.get(id).map(|t| t.current())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }

    /// Active tween ids in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = TweenId> + '_ {
        self.tweens.iter().map(|t| t.id())
    }

    /// Outputs of the most recent `update`.
    #[inline]
    pub fn outputs(&self) -> &Outputs {
        &self.outputs
    }

    /// Advance every active tween to `timestamp` (ms) and collect this frame's outputs.
    ///
    /// Completed tweens run their callback, emit `Completed`, and are removed
    /// before this returns. Chained follow-ups are appended afterwards and
    /// start on the next call.
    pub fn update(&mut self, timestamp: f64) -> &Outputs {
        self.outputs.clear();
        let mut chained: Vec<(TweenId, TweenSpec)> = Vec::new();

        for tween in &mut self.tweens {
            let was_pending = tween.phase() == Phase::Pending;
            let status = tween.update(timestamp);

            if was_pending && status != TweenStatus::Ignored {
                if let Some(start_time) = tween.state().start_time() {
                    log::debug!("{} started at {start_time}", tween.id());
                    self.outputs.push_event(TweenEvent::Started {
                        tween: tween.id(),
                        start_time,
                    });
                }
            }

            match status {
                TweenStatus::Ignored | TweenStatus::Finished => {}
                TweenStatus::Running => push_changes(&mut self.outputs, tween),
                TweenStatus::Completed => {
                    if self.cfg.snap_to_end {
                        tween.snap_to_end();
                        push_changes(&mut self.outputs, tween);
                    }
                    log::debug!("{} completed at {timestamp}", tween.id());
                    self.outputs.push_event(TweenEvent::Completed {
                        tween: tween.id(),
                        timestamp,
                    });
                    if let Some(next) = tween.spec().then() {
                        chained.push((tween.id(), next.clone()));
                    }
                }
            }
        }

        self.tweens.retain(|t| t.phase() != Phase::Completed);

        for (from, spec) in chained {
            let to = self.insert(spec);
            log::debug!("{from} chained into {to}");
            self.outputs.push_event(TweenEvent::Chained { from, to });
        }

        log::trace!(
            "tween frame at {timestamp}: {} changes, {} active",
            self.outputs.changes.len(),
            self.tweens.len()
        );
        &self.outputs
    }
}

fn push_changes(outputs: &mut Outputs, tween: &Tween) {
    for (property, value) in tween.current() {
        outputs.push_change(Change {
            tween: tween.id(),
            property: property.clone(),
            value: *value,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(duration: f64) -> TweenSpec {
        TweenBuilder::new()
            .duration(duration)
            .start([("x", 0.0), ("y", 10.0)])
            .end([("x", 100.0), ("y", 20.0)])
            .build()
            .unwrap()
    }

    #[test]
    fn ids_follow_insertion_order() {
        let mut set = TweenSet::default();
        let a = set.insert(spec(100.0));
        let b = set.insert(spec(100.0));
        assert_eq!(set.ids().collect::<Vec<_>>(), vec![a, b]);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn changes_follow_property_order() {
        let mut set = TweenSet::default();
        let id = set.insert(spec(100.0));
        let out = set.update(0.0);
        let props: Vec<&str> = out.changes.iter().map(|c| c.property.as_str()).collect();
        assert_eq!(props, vec!["x", "y"]);
        assert_eq!(out.value(id, "y"), Some(10.0));
    }

    #[test]
    fn unknown_id_on_complete_errors() {
        let mut set = TweenSet::default();
        let err = set.on_complete(TweenId(9), || {}).unwrap_err();
        assert_eq!(err, TweenError::UnknownTween { id: TweenId(9) });
    }

    #[test]
    fn builder_uses_set_defaults() {
        let set = TweenSet::new(Config {
            default_duration_ms: 40.0,
            ..Config::default()
        });
        let spec = set.builder().build().unwrap();
        assert_eq!(spec.duration_ms(), 40.0);
    }

    #[test]
    fn non_finite_frame_emits_nothing() {
        let mut set = TweenSet::default();
        let id = set.insert(spec(100.0));
        set.update(0.0);
        set.update(50.0);
        for ts in [f64::NAN, f64::INFINITY] {
            let out = set.update(ts);
            assert!(out.is_empty(), "frame at {ts} produced {out:?}");
        }
        assert_eq!(set.current_values(id).unwrap()["x"], 50.0);
        assert_eq!(set.update(100.0).completed().collect::<Vec<_>>(), vec![id]);
    }

    #[test]
    fn clear_drops_everything() {
        let mut set = TweenSet::default();
        set.insert(spec(100.0));
        set.update(0.0);
        set.clear();
        assert!(set.is_empty());
        assert!(set.outputs().is_empty());
    }
}
