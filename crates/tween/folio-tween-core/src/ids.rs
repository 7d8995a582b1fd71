//! Identifiers for tweens held by a [`crate::TweenSet`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque handle of a tween inside its owning set.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct TweenId(pub u32);

impl fmt::Display for TweenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tween#{}", self.0)
    }
}

/// Monotonic allocator for TweenId.
/// Ids are never reused within one allocator, so a stale handle cannot alias a newer tween.
#[derive(Default, Debug)]
pub struct IdAllocator {
    next_tween: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn alloc_tween(&mut self) -> TweenId {
        let id = TweenId(self.next_tween);
        self.next_tween = self.next_tween.wrapping_add(1);
        id
    }

    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
