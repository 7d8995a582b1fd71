//! Output contracts from the owning tween set.
//!
//! Outputs carry the property values sampled this frame and a separate list
//! of lifecycle events. Adapters apply changes to the sprite and forward events.

use serde::{Deserialize, Serialize};

use crate::ids::TweenId;

/// One sampled property value for a given tween this frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Change {
    pub tween: TweenId,
    pub property: String,
    pub value: f64,
}

/// Lifecycle signals emitted during a frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum TweenEvent {
    /// First update latched the start time.
    Started { tween: TweenId, start_time: f64 },
    /// Elapsed time reached the duration; the tween has left the set.
    Completed { tween: TweenId, timestamp: f64 },
    /// A completed tween enqueued its follow-up.
    Chained { from: TweenId, to: TweenId },
}

/// Outputs returned by TweenSet::update().
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Outputs {
    #[serde(default)]
    pub changes: Vec<Change>,
    #[serde(default)]
    pub events: Vec<TweenEvent>,
}

impl Outputs {
    #[inline]
    pub fn clear(&mut self) {
        self.changes.clear();
        self.events.clear();
    }

    #[inline]
    pub fn push_change(&mut self, change: Change) {
        self.changes.push(change);
    }

    #[inline]
    pub fn push_event(&mut self, event: TweenEvent) {
        self.events.push(event);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty() && self.events.is_empty()
    }

    /// Latest value written for `(tween, property)` this frame.
    pub fn value(&self, tween: TweenId, property: &str) -> Option<f64> {
        self.changes
            .iter()
            .rev()
            .find(|c| c.tween == tween && c.property == property)
            .map(|c| c.value)
    }

    /// Tweens that completed this frame, in update order.
    pub fn completed(&self) -> impl Iterator<Item = TweenId> + '_ {
        self.events.iter().filter_map(|e| match e {
            TweenEvent::Completed { tween, .. } => Some(*tween),
            _ => None,
        })
    }
}
